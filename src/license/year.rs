//! Copyright year expressions.
//!
//! The template does not store a concrete end year. It stores `${year}`,
//! which the instancer resolves on every build, so a template generated in
//! one year stays correct in the next without downloading it again.

use chrono::{Datelike, Local};

/// Token left in the template for the instancer to resolve.
pub const YEAR_VARIABLE: &str = "${year}";

/// Build the year expression for the template.
///
/// Returns `${year}` when there is no inception year or it is the current
/// year, otherwise `<inception>-${year}`.
pub fn year_expression(inception_year: Option<i32>, current_year: i32) -> String {
    match inception_year {
        Some(year) if year != current_year => format!("{}-{}", year, YEAR_VARIABLE),
        _ => YEAR_VARIABLE.to_string(),
    }
}

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}
