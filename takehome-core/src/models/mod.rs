mod city;
mod filing_status;
mod retirement;
mod state_regime;
mod take_home;
mod tax_bracket;

pub use city::City;
pub use filing_status::FilingStatus;
pub use retirement::{
    EmployerMatch, MAX_CUSTOM_MATCH_PERCENT, MatchPreset, RetirementContribution, RetirementPlan,
};
pub use state_regime::{StateTaxInfo, StateTaxRegime};
pub use take_home::{TakeHomeInput, TaxCalculationResult};
pub use tax_bracket::{ByFilingStatus, TaxBracket};
