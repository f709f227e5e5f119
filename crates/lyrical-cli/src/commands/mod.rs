pub mod analyze;
pub mod catalog;
pub mod lint;
pub mod words;
