//! State income tax regimes for wage income, 2025.
//!
//! Single-filer schedules are applied regardless of filing status. Local
//! and city income taxes are not modelled.

use rust_decimal_macros::dec;

use crate::models::{StateTaxInfo, StateTaxRegime, TaxBracket};

pub const STATE_TAXES: &[StateTaxInfo] = &[
    StateTaxInfo {
        code: "AL",
        name: "Alabama",
        regime: StateTaxRegime::Progressive(AL_BRACKETS),
    },
    StateTaxInfo {
        code: "AK",
        name: "Alaska",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "AZ",
        name: "Arizona",
        regime: StateTaxRegime::Flat(dec!(0.025)),
    },
    StateTaxInfo {
        code: "AR",
        name: "Arkansas",
        regime: StateTaxRegime::Progressive(AR_BRACKETS),
    },
    StateTaxInfo {
        code: "CA",
        name: "California",
        regime: StateTaxRegime::Progressive(CA_BRACKETS),
    },
    StateTaxInfo {
        code: "CO",
        name: "Colorado",
        regime: StateTaxRegime::Flat(dec!(0.044)),
    },
    StateTaxInfo {
        code: "CT",
        name: "Connecticut",
        regime: StateTaxRegime::Progressive(CT_BRACKETS),
    },
    StateTaxInfo {
        code: "DE",
        name: "Delaware",
        regime: StateTaxRegime::Progressive(DE_BRACKETS),
    },
    StateTaxInfo {
        code: "FL",
        name: "Florida",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "GA",
        name: "Georgia",
        regime: StateTaxRegime::Progressive(GA_BRACKETS),
    },
    StateTaxInfo {
        code: "HI",
        name: "Hawaii",
        regime: StateTaxRegime::Progressive(HI_BRACKETS),
    },
    StateTaxInfo {
        code: "ID",
        name: "Idaho",
        regime: StateTaxRegime::Flat(dec!(0.058)),
    },
    StateTaxInfo {
        code: "IL",
        name: "Illinois",
        regime: StateTaxRegime::Flat(dec!(0.0495)),
    },
    StateTaxInfo {
        code: "IN",
        name: "Indiana",
        regime: StateTaxRegime::Flat(dec!(0.031)),
    },
    StateTaxInfo {
        code: "IA",
        name: "Iowa",
        regime: StateTaxRegime::Flat(dec!(0.038)),
    },
    StateTaxInfo {
        code: "KS",
        name: "Kansas",
        regime: StateTaxRegime::Progressive(KS_BRACKETS),
    },
    StateTaxInfo {
        code: "KY",
        name: "Kentucky",
        regime: StateTaxRegime::Flat(dec!(0.04)),
    },
    StateTaxInfo {
        code: "LA",
        name: "Louisiana",
        regime: StateTaxRegime::Progressive(LA_BRACKETS),
    },
    StateTaxInfo {
        code: "ME",
        name: "Maine",
        regime: StateTaxRegime::Progressive(ME_BRACKETS),
    },
    StateTaxInfo {
        code: "MD",
        name: "Maryland",
        regime: StateTaxRegime::Progressive(MD_BRACKETS),
    },
    StateTaxInfo {
        code: "MA",
        name: "Massachusetts",
        regime: StateTaxRegime::Flat(dec!(0.05)),
    },
    StateTaxInfo {
        code: "MI",
        name: "Michigan",
        regime: StateTaxRegime::Flat(dec!(0.0405)),
    },
    StateTaxInfo {
        code: "MN",
        name: "Minnesota",
        regime: StateTaxRegime::Progressive(MN_BRACKETS),
    },
    StateTaxInfo {
        code: "MS",
        name: "Mississippi",
        regime: StateTaxRegime::Flat(dec!(0.05)),
    },
    StateTaxInfo {
        code: "MO",
        name: "Missouri",
        regime: StateTaxRegime::Progressive(MO_BRACKETS),
    },
    StateTaxInfo {
        code: "MT",
        name: "Montana",
        regime: StateTaxRegime::Progressive(MT_BRACKETS),
    },
    StateTaxInfo {
        code: "NE",
        name: "Nebraska",
        regime: StateTaxRegime::Progressive(NE_BRACKETS),
    },
    StateTaxInfo {
        code: "NV",
        name: "Nevada",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "NH",
        name: "New Hampshire",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "NJ",
        name: "New Jersey",
        regime: StateTaxRegime::Progressive(NJ_BRACKETS),
    },
    StateTaxInfo {
        code: "NM",
        name: "New Mexico",
        regime: StateTaxRegime::Progressive(NM_BRACKETS),
    },
    StateTaxInfo {
        code: "NY",
        name: "New York",
        regime: StateTaxRegime::Progressive(NY_BRACKETS),
    },
    StateTaxInfo {
        code: "NC",
        name: "North Carolina",
        regime: StateTaxRegime::Flat(dec!(0.0449)),
    },
    StateTaxInfo {
        code: "ND",
        name: "North Dakota",
        regime: StateTaxRegime::Flat(dec!(0.0275)),
    },
    StateTaxInfo {
        code: "OH",
        name: "Ohio",
        regime: StateTaxRegime::Progressive(OH_BRACKETS),
    },
    StateTaxInfo {
        code: "OK",
        name: "Oklahoma",
        regime: StateTaxRegime::Progressive(OK_BRACKETS),
    },
    StateTaxInfo {
        code: "OR",
        name: "Oregon",
        regime: StateTaxRegime::Progressive(OR_BRACKETS),
    },
    StateTaxInfo {
        code: "PA",
        name: "Pennsylvania",
        regime: StateTaxRegime::Flat(dec!(0.0307)),
    },
    StateTaxInfo {
        code: "RI",
        name: "Rhode Island",
        regime: StateTaxRegime::Progressive(RI_BRACKETS),
    },
    StateTaxInfo {
        code: "SC",
        name: "South Carolina",
        regime: StateTaxRegime::Progressive(SC_BRACKETS),
    },
    StateTaxInfo {
        code: "SD",
        name: "South Dakota",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "TN",
        name: "Tennessee",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "TX",
        name: "Texas",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "UT",
        name: "Utah",
        regime: StateTaxRegime::Flat(dec!(0.0465)),
    },
    StateTaxInfo {
        code: "VT",
        name: "Vermont",
        regime: StateTaxRegime::Progressive(VT_BRACKETS),
    },
    StateTaxInfo {
        code: "VA",
        name: "Virginia",
        regime: StateTaxRegime::Progressive(VA_BRACKETS),
    },
    StateTaxInfo {
        code: "WA",
        name: "Washington",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "WV",
        name: "West Virginia",
        regime: StateTaxRegime::Progressive(WV_BRACKETS),
    },
    StateTaxInfo {
        code: "WI",
        name: "Wisconsin",
        regime: StateTaxRegime::Progressive(WI_BRACKETS),
    },
    StateTaxInfo {
        code: "WY",
        name: "Wyoming",
        regime: StateTaxRegime::NoIncomeTax,
    },
    StateTaxInfo {
        code: "DC",
        name: "District of Columbia",
        regime: StateTaxRegime::Progressive(DC_BRACKETS),
    },
];

const AL_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.02), dec!(0), Some(dec!(500))),
    TaxBracket::new(dec!(0.04), dec!(500), Some(dec!(3000))),
    TaxBracket::new(dec!(0.05), dec!(3000), None),
];

const AR_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.02), dec!(0), Some(dec!(5000))),
    TaxBracket::new(dec!(0.04), dec!(5000), Some(dec!(10000))),
    TaxBracket::new(dec!(0.044), dec!(10000), None),
];

const CA_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.01), dec!(0), Some(dec!(10412))),
    TaxBracket::new(dec!(0.02), dec!(10412), Some(dec!(24684))),
    TaxBracket::new(dec!(0.04), dec!(24684), Some(dec!(38959))),
    TaxBracket::new(dec!(0.06), dec!(38959), Some(dec!(54081))),
    TaxBracket::new(dec!(0.08), dec!(54081), Some(dec!(68350))),
    TaxBracket::new(dec!(0.093), dec!(68350), Some(dec!(349137))),
    TaxBracket::new(dec!(0.103), dec!(349137), Some(dec!(418961))),
    TaxBracket::new(dec!(0.113), dec!(418961), Some(dec!(698271))),
    TaxBracket::new(dec!(0.123), dec!(698271), None),
];

const CT_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.03), dec!(0), Some(dec!(10000))),
    TaxBracket::new(dec!(0.05), dec!(10000), Some(dec!(50000))),
    TaxBracket::new(dec!(0.055), dec!(50000), Some(dec!(100000))),
    TaxBracket::new(dec!(0.06), dec!(100000), Some(dec!(200000))),
    TaxBracket::new(dec!(0.065), dec!(200000), Some(dec!(250000))),
    TaxBracket::new(dec!(0.069), dec!(250000), Some(dec!(500000))),
    TaxBracket::new(dec!(0.0699), dec!(500000), None),
];

const DE_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.022), dec!(0), Some(dec!(5000))),
    TaxBracket::new(dec!(0.039), dec!(5000), Some(dec!(10000))),
    TaxBracket::new(dec!(0.048), dec!(10000), Some(dec!(20000))),
    TaxBracket::new(dec!(0.052), dec!(20000), Some(dec!(25000))),
    TaxBracket::new(dec!(0.0555), dec!(25000), Some(dec!(60000))),
    TaxBracket::new(dec!(0.066), dec!(60000), None),
];

const GA_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.01), dec!(0), Some(dec!(750))),
    TaxBracket::new(dec!(0.02), dec!(750), Some(dec!(2250))),
    TaxBracket::new(dec!(0.03), dec!(2250), Some(dec!(3750))),
    TaxBracket::new(dec!(0.04), dec!(3750), Some(dec!(5250))),
    TaxBracket::new(dec!(0.05), dec!(5250), Some(dec!(7000))),
    TaxBracket::new(dec!(0.0575), dec!(7000), None),
];

const HI_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.014), dec!(0), Some(dec!(2400))),
    TaxBracket::new(dec!(0.032), dec!(2400), Some(dec!(4800))),
    TaxBracket::new(dec!(0.055), dec!(4800), Some(dec!(9600))),
    TaxBracket::new(dec!(0.064), dec!(9600), Some(dec!(14400))),
    TaxBracket::new(dec!(0.068), dec!(14400), Some(dec!(19200))),
    TaxBracket::new(dec!(0.072), dec!(19200), Some(dec!(24000))),
    TaxBracket::new(dec!(0.076), dec!(24000), Some(dec!(36000))),
    TaxBracket::new(dec!(0.079), dec!(36000), Some(dec!(48000))),
    TaxBracket::new(dec!(0.0825), dec!(48000), Some(dec!(150000))),
    TaxBracket::new(dec!(0.09), dec!(150000), Some(dec!(175000))),
    TaxBracket::new(dec!(0.10), dec!(175000), Some(dec!(200000))),
    TaxBracket::new(dec!(0.11), dec!(200000), None),
];

const KS_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.031), dec!(0), Some(dec!(15000))),
    TaxBracket::new(dec!(0.0525), dec!(15000), Some(dec!(30000))),
    TaxBracket::new(dec!(0.057), dec!(30000), None),
];

const LA_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0185), dec!(0), Some(dec!(12500))),
    TaxBracket::new(dec!(0.035), dec!(12500), Some(dec!(50000))),
    TaxBracket::new(dec!(0.0425), dec!(50000), None),
];

const ME_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.058), dec!(0), Some(dec!(24500))),
    TaxBracket::new(dec!(0.0675), dec!(24500), Some(dec!(58050))),
    TaxBracket::new(dec!(0.0715), dec!(58050), None),
];

const MD_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.02), dec!(0), Some(dec!(1000))),
    TaxBracket::new(dec!(0.03), dec!(1000), Some(dec!(2000))),
    TaxBracket::new(dec!(0.04), dec!(2000), Some(dec!(3000))),
    TaxBracket::new(dec!(0.0475), dec!(3000), Some(dec!(100000))),
    TaxBracket::new(dec!(0.05), dec!(100000), Some(dec!(125000))),
    TaxBracket::new(dec!(0.0525), dec!(125000), Some(dec!(150000))),
    TaxBracket::new(dec!(0.055), dec!(150000), Some(dec!(250000))),
    TaxBracket::new(dec!(0.0575), dec!(250000), None),
];

const MN_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0535), dec!(0), Some(dec!(31690))),
    TaxBracket::new(dec!(0.068), dec!(31690), Some(dec!(104090))),
    TaxBracket::new(dec!(0.0785), dec!(104090), Some(dec!(195160))),
    TaxBracket::new(dec!(0.0985), dec!(195160), None),
];

const MO_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.015), dec!(0), Some(dec!(1207))),
    TaxBracket::new(dec!(0.02), dec!(1207), Some(dec!(2414))),
    TaxBracket::new(dec!(0.025), dec!(2414), Some(dec!(3621))),
    TaxBracket::new(dec!(0.03), dec!(3621), Some(dec!(4828))),
    TaxBracket::new(dec!(0.035), dec!(4828), Some(dec!(6035))),
    TaxBracket::new(dec!(0.04), dec!(6035), Some(dec!(7242))),
    TaxBracket::new(dec!(0.045), dec!(7242), Some(dec!(8449))),
    TaxBracket::new(dec!(0.0495), dec!(8449), None),
];

const MT_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0471), dec!(0), Some(dec!(21600))),
    TaxBracket::new(dec!(0.0571), dec!(21600), None),
];

const NE_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0246), dec!(0), Some(dec!(3700))),
    TaxBracket::new(dec!(0.0351), dec!(3700), Some(dec!(22170))),
    TaxBracket::new(dec!(0.0501), dec!(22170), Some(dec!(35730))),
    TaxBracket::new(dec!(0.0664), dec!(35730), None),
];

const NJ_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.014), dec!(0), Some(dec!(20000))),
    TaxBracket::new(dec!(0.0175), dec!(20000), Some(dec!(35000))),
    TaxBracket::new(dec!(0.035), dec!(35000), Some(dec!(40000))),
    TaxBracket::new(dec!(0.05525), dec!(40000), Some(dec!(75000))),
    TaxBracket::new(dec!(0.0637), dec!(75000), Some(dec!(500000))),
    TaxBracket::new(dec!(0.0897), dec!(500000), Some(dec!(1000000))),
    TaxBracket::new(dec!(0.1075), dec!(1000000), None),
];

const NM_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.017), dec!(0), Some(dec!(5500))),
    TaxBracket::new(dec!(0.032), dec!(5500), Some(dec!(11000))),
    TaxBracket::new(dec!(0.047), dec!(11000), Some(dec!(16000))),
    TaxBracket::new(dec!(0.049), dec!(16000), Some(dec!(210000))),
    TaxBracket::new(dec!(0.059), dec!(210000), None),
];

const NY_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.04), dec!(0), Some(dec!(8500))),
    TaxBracket::new(dec!(0.045), dec!(8500), Some(dec!(11700))),
    TaxBracket::new(dec!(0.0525), dec!(11700), Some(dec!(13900))),
    TaxBracket::new(dec!(0.055), dec!(13900), Some(dec!(80650))),
    TaxBracket::new(dec!(0.06), dec!(80650), Some(dec!(215400))),
    TaxBracket::new(dec!(0.0685), dec!(215400), Some(dec!(1077550))),
    TaxBracket::new(dec!(0.0965), dec!(1077550), Some(dec!(5000000))),
    TaxBracket::new(dec!(0.103), dec!(5000000), Some(dec!(25000000))),
    TaxBracket::new(dec!(0.109), dec!(25000000), None),
];

const OH_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0), dec!(0), Some(dec!(26050))),
    TaxBracket::new(dec!(0.02765), dec!(26050), Some(dec!(100000))),
    TaxBracket::new(dec!(0.03226), dec!(100000), Some(dec!(115300))),
    TaxBracket::new(dec!(0.03688), dec!(115300), None),
];

const OK_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0025), dec!(0), Some(dec!(1000))),
    TaxBracket::new(dec!(0.0075), dec!(1000), Some(dec!(2500))),
    TaxBracket::new(dec!(0.0175), dec!(2500), Some(dec!(3750))),
    TaxBracket::new(dec!(0.0275), dec!(3750), Some(dec!(4900))),
    TaxBracket::new(dec!(0.0375), dec!(4900), Some(dec!(7200))),
    TaxBracket::new(dec!(0.0475), dec!(7200), None),
];

const OR_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0475), dec!(0), Some(dec!(4300))),
    TaxBracket::new(dec!(0.0675), dec!(4300), Some(dec!(10750))),
    TaxBracket::new(dec!(0.0875), dec!(10750), Some(dec!(125000))),
    TaxBracket::new(dec!(0.099), dec!(125000), None),
];

const RI_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0375), dec!(0), Some(dec!(77450))),
    TaxBracket::new(dec!(0.0475), dec!(77450), Some(dec!(176050))),
    TaxBracket::new(dec!(0.0599), dec!(176050), None),
];

const SC_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0), dec!(0), Some(dec!(3460))),
    TaxBracket::new(dec!(0.03), dec!(3460), Some(dec!(17330))),
    TaxBracket::new(dec!(0.064), dec!(17330), None),
];

const VT_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0335), dec!(0), Some(dec!(45400))),
    TaxBracket::new(dec!(0.066), dec!(45400), Some(dec!(110050))),
    TaxBracket::new(dec!(0.076), dec!(110050), Some(dec!(229550))),
    TaxBracket::new(dec!(0.0875), dec!(229550), None),
];

const VA_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.02), dec!(0), Some(dec!(3000))),
    TaxBracket::new(dec!(0.03), dec!(3000), Some(dec!(5000))),
    TaxBracket::new(dec!(0.05), dec!(5000), Some(dec!(17000))),
    TaxBracket::new(dec!(0.0575), dec!(17000), None),
];

const WV_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0236), dec!(0), Some(dec!(10000))),
    TaxBracket::new(dec!(0.0315), dec!(10000), Some(dec!(25000))),
    TaxBracket::new(dec!(0.0354), dec!(25000), Some(dec!(40000))),
    TaxBracket::new(dec!(0.0472), dec!(40000), Some(dec!(60000))),
    TaxBracket::new(dec!(0.0512), dec!(60000), None),
];

const WI_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.0354), dec!(0), Some(dec!(13810))),
    TaxBracket::new(dec!(0.0465), dec!(13810), Some(dec!(27630))),
    TaxBracket::new(dec!(0.0627), dec!(27630), Some(dec!(304170))),
    TaxBracket::new(dec!(0.0765), dec!(304170), None),
];

const DC_BRACKETS: &[TaxBracket] = &[
    TaxBracket::new(dec!(0.04), dec!(0), Some(dec!(10000))),
    TaxBracket::new(dec!(0.06), dec!(10000), Some(dec!(40000))),
    TaxBracket::new(dec!(0.065), dec!(40000), Some(dec!(60000))),
    TaxBracket::new(dec!(0.085), dec!(60000), Some(dec!(250000))),
    TaxBracket::new(dec!(0.0925), dec!(250000), Some(dec!(500000))),
    TaxBracket::new(dec!(0.0975), dec!(500000), Some(dec!(1000000))),
    TaxBracket::new(dec!(0.1075), dec!(1000000), None),
];

/// Looks up a state by its two-letter code, ignoring ASCII case.
pub fn find_state(code: &str) -> Option<&'static StateTaxInfo> {
    super::TAX_YEAR_2025.state(code)
}

/// Display name for a state code, or the code itself when it is unknown.
pub fn state_name(code: &str) -> &str {
    find_state(code).map_or(code, |state| state.name)
}
