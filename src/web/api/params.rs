use std::collections::HashMap;

use crate::web::api::error::{ApiError, ApiResult};

/// Raw query string values, read by name with the API's error conventions.
///
/// Blank values count as absent.
pub struct QueryParams<'a>(&'a HashMap<String, String>);

impl<'a> QueryParams<'a> {
    pub fn new(params: &'a HashMap<String, String>) -> Self {
        Self(params)
    }

    fn raw(&self, name: &str) -> Option<&'a str> {
        self.0
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    pub fn required_str(&self, name: &'static str) -> ApiResult<&'a str> {
        self.raw(name).ok_or(ApiError::MissingParameter(name))
    }

    pub fn required_f64(&self, name: &'static str) -> ApiResult<f64> {
        parse_number(name, self.required_str(name)?)
    }

    pub fn optional_f64(&self, name: &'static str) -> ApiResult<Option<f64>> {
        self.raw(name).map(|v| parse_number(name, v)).transpose()
    }
}

fn parse_number(name: &str, value: &str) -> ApiResult<f64> {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| ApiError::Validation(format!("{} must be a number, got '{}'", name, value)))
}
