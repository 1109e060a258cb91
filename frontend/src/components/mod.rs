pub mod catalog;
pub mod groups;
pub mod uploads;
