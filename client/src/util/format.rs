//! Display formatting for timestamps.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use time::OffsetDateTime;
use time::macros::format_description;

/// Format a row timestamp as `Mar 5, 2024`.
pub fn short_date(ts: OffsetDateTime) -> String {
    ts.format(format_description!("[month repr:short] [day padding:none], [year]"))
        .unwrap_or_default()
}
