// Synthetic contract listings. Stands in for a real registry integration
// (e.g. SAM.gov), which this service does not perform.

pub mod synthesizer;
pub mod templates;

pub use synthesizer::{normalize_keyword, synthesize};
