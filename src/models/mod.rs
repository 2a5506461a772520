pub mod case_entry;
pub mod category;
pub mod reminder;
pub mod shift;
