//! Calendar month day grids.
//!
//! A [`MonthGrid`] yields the days of one month plus the "filler" days from
//! the neighbouring months needed to complete 7-day rows that start on a
//! configurable weekday. Dates are `chrono::NaiveDate`; a [`Formatter`] can
//! turn them into any output type on the way out.

pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod parse;

pub use calendar::{days_in_month, MonthGrid};
pub use config::GridConfig;
pub use error::{ErrorKind, GridError};
pub use format::Formatter;
