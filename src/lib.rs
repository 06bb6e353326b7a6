pub mod analyzer;
pub mod category;
pub mod config;
pub mod consts;
pub mod dice;
pub mod enumerate;
pub mod error;
pub mod filter;
pub mod hand;
pub mod report;
// cmd and reports are binary modules (under main.rs); they only render what
// the library computes.

pub use analyzer::{analyze, analyze_config};
pub use category::{CategorySet, HandCategory};
pub use config::RollConfig;
pub use error::{HandError, HandResult};
pub use filter::CategoryFilter;
pub use hand::Hand;
pub use report::AnalysisReport;
