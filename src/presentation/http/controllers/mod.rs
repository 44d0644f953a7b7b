// src/presentation/http/controllers/mod.rs
pub mod accounts;
pub mod api;
pub mod content;
pub mod dashboards;
pub mod home;
pub mod journalists;
pub mod publishers;

use crate::application::{ApplicationResult, error::ApplicationError};

/// Read an optional foreign key from a form field. A blank field means
/// "none"; anything else must be an integer id.
pub(crate) fn parse_optional_id(raw: Option<&str>, field: &str) -> ApplicationResult<Option<i64>> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| ApplicationError::validation(format!("{field} must be a valid id"))),
    }
}

/// Blank form fields mean "not given".
pub(crate) fn non_blank(raw: Option<String>) -> Option<String> {
    raw.filter(|value| !value.trim().is_empty())
}
