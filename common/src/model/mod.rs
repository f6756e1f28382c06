pub mod affiliation;
pub mod sample;
pub mod select_option;
pub mod species;
