#[macro_use]
extern crate rust_i18n;

pub mod actions;
pub mod api;
pub mod appointments;
pub mod availability;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod forms;
pub mod notify;
pub mod session;
pub mod shutdown;
pub mod startup;
pub mod utils;
pub mod validation;

// Initialize i18n
i18n!("locales", fallback = "en");
