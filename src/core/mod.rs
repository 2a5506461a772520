pub mod caselog;
pub mod log;
pub mod logic;
pub mod productivity;
pub mod reminder;
pub mod shifts;
