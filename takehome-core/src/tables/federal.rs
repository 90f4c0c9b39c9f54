//! 2025 federal income tax rate schedules (IRS Rev. Proc. 2024-40).

use rust_decimal_macros::dec;

use crate::models::{ByFilingStatus, TaxBracket};

pub const SCHEDULES: ByFilingStatus<&[TaxBracket]> = ByFilingStatus {
    single: SINGLE,
    married_joint: MARRIED_JOINT,
    married_separate: MARRIED_SEPARATE,
    head_of_household: HEAD_OF_HOUSEHOLD,
};

pub const SINGLE: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(11925))),
    TaxBracket::new(dec!(0.12), dec!(11925), Some(dec!(48475))),
    TaxBracket::new(dec!(0.22), dec!(48475), Some(dec!(103350))),
    TaxBracket::new(dec!(0.24), dec!(103350), Some(dec!(197300))),
    TaxBracket::new(dec!(0.32), dec!(197300), Some(dec!(250525))),
    TaxBracket::new(dec!(0.35), dec!(250525), Some(dec!(626350))),
    TaxBracket::new(dec!(0.37), dec!(626350), None),
];

pub const MARRIED_JOINT: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(23850))),
    TaxBracket::new(dec!(0.12), dec!(23850), Some(dec!(96950))),
    TaxBracket::new(dec!(0.22), dec!(96950), Some(dec!(206700))),
    TaxBracket::new(dec!(0.24), dec!(206700), Some(dec!(394600))),
    TaxBracket::new(dec!(0.32), dec!(394600), Some(dec!(501050))),
    TaxBracket::new(dec!(0.35), dec!(501050), Some(dec!(751600))),
    TaxBracket::new(dec!(0.37), dec!(751600), None),
];

pub const MARRIED_SEPARATE: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(11925))),
    TaxBracket::new(dec!(0.12), dec!(11925), Some(dec!(48475))),
    TaxBracket::new(dec!(0.22), dec!(48475), Some(dec!(103350))),
    TaxBracket::new(dec!(0.24), dec!(103350), Some(dec!(197300))),
    TaxBracket::new(dec!(0.32), dec!(197300), Some(dec!(250525))),
    TaxBracket::new(dec!(0.35), dec!(250525), Some(dec!(375800))),
    TaxBracket::new(dec!(0.37), dec!(375800), None),
];

pub const HEAD_OF_HOUSEHOLD: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.10), dec!(0), Some(dec!(17000))),
    TaxBracket::new(dec!(0.12), dec!(17000), Some(dec!(64850))),
    TaxBracket::new(dec!(0.22), dec!(64850), Some(dec!(103350))),
    TaxBracket::new(dec!(0.24), dec!(103350), Some(dec!(197300))),
    TaxBracket::new(dec!(0.32), dec!(197300), Some(dec!(250500))),
    TaxBracket::new(dec!(0.35), dec!(250500), Some(dec!(626350))),
    TaxBracket::new(dec!(0.37), dec!(626350), None),
];
