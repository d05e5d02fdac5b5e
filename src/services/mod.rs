//! Application service layer.
//!
//! Services hold logic that operates on domain values without owning any
//! storage.

mod birthday_service;

pub use birthday_service::{
    anchor_to_year, roll_weekend_forward, BirthdayScheduler, DEFAULT_WINDOW_DAYS,
};
