pub mod address;
pub mod calendar;
pub mod mint;
pub mod settings;
