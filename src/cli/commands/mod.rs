pub mod cases;
pub mod config;
pub mod db;
pub mod init;
pub mod log;
pub mod remind;
pub mod report;
pub mod reset;
pub mod shifts;
