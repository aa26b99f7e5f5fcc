//! Display formatting for terminal output
//!
//! Provides money, date and percentage formatting, progress bars, and
//! table rendering shared by the reports.

pub mod format;
pub mod table;

pub use format::{
    double_separator, format_bar, format_change, format_date, format_header, format_money,
    format_percentage, separator, truncate,
};
pub use table::render_table;
