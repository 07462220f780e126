//! Command implementations

pub mod daily;
pub mod simple;
pub mod stats;

pub use daily::{DailyReport, daily_report, print_daily_report};
pub use simple::{LineCommand, run_simple, submit_line};
pub use stats::collect_stats;
