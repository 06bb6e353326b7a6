pub mod analyze;
pub mod categories;
