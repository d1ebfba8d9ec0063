pub mod analysis;
pub mod contract;

pub use analysis::{AnalysisResult, CompanyProfile};
pub use contract::ContractRecord;
