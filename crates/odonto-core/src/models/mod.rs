pub mod patient;
pub mod survey;
