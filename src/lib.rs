pub mod calendar;
pub mod config;
pub mod error;
pub mod notify;
pub mod schedule;
pub mod sync;
