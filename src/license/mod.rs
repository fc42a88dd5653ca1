//! License template retrieval and rendering.
//!
//! Two stages:
//!
//! 1. **Template**: download the canonical license ([`fetch`]), strip its
//!    preamble and indentation ([`normalize`]), fill in `[fullname]` and
//!    `[year]` ([`substitute`]) where the year becomes an expression still
//!    containing `${year}` ([`year`]), and write the template file.
//! 2. **Instance**: read the template, resolve `${year}` to the current year
//!    and write the project license file ([`instance`]).

pub mod fetch;
pub mod instance;
pub mod normalize;
pub mod substitute;
pub mod template;
pub mod year;


pub use fetch::{LicenseSource, UrlSource};
pub use instance::update_license;
pub use template::update_template;
pub use year::current_year;
