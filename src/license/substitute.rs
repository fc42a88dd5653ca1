//! Placeholder substitution in downloaded license text.
//!
//! Canonical license documents mark the copyright holder and year with
//! `[fullname]` and `[year]`. Each placeholder is replaced independently; a
//! placeholder without a value is left in place for a later stage.

/// Placeholder for the copyright holder.
pub const FULLNAME_PLACEHOLDER: &str = "[fullname]";

/// Placeholder for the copyright year.
pub const YEAR_PLACEHOLDER: &str = "[year]";

/// Values for the license placeholders. `None` or empty means "leave as is".
#[derive(Debug, Clone, Copy, Default)]
pub struct Variables<'a> {
    pub fullname: Option<&'a str>,
    pub year: Option<&'a str>,
}

/// Replace `[fullname]` and `[year]` with the given values.
pub fn substitute_variables(text: &str, variables: &Variables<'_>) -> String {
    let mut text = text.to_string();

    if let Some(name) = variables.fullname.filter(|name| !name.is_empty()) {
        text = text.replace(FULLNAME_PLACEHOLDER, name);
    }

    if let Some(year) = variables.year.filter(|year| !year.is_empty()) {
        text = text.replace(YEAR_PLACEHOLDER, year);
    }

    text
}
