pub mod dashboard;
pub mod filter_select;
