//! Named-parameter configuration reader.
//!
//! [`Params`] is the narrow interface between a configuration source
//! (file parser, CLI, test fixture) and the propagators. Values are kept as
//! raw strings in insertion order and parsed on lookup, so each consumer
//! decides the type of the parameters it reads.

use crate::error::ConfigError;
use indexmap::IndexMap;
use std::str::FromStr;

/// An ordered map of parameter name to raw value.
///
/// Names are matched exactly (case-sensitive).
///
/// # Examples
///
/// ```
/// use nfwave_core::Params;
///
/// let params: Params = [("Deltax", "0.0035"), ("Range", "0.086")]
///     .into_iter()
///     .collect();
/// let deltax: f64 = params.required("Deltax").unwrap();
/// assert_eq!(deltax, 0.0035);
/// assert!(params.optional("phi").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params {
    values: IndexMap<String, String>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter, returning the previous raw value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    /// Raw value of an optional parameter.
    pub fn optional(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Parse a required parameter.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingParam`] if absent, [`ConfigError::InvalidParam`]
    /// if the raw value does not parse as `T`.
    pub fn required<T>(&self, name: &str) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        let raw = self
            .optional(name)
            .ok_or_else(|| ConfigError::MissingParam { name: name.into() })?;
        raw.trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidParam {
                name: name.into(),
                value: raw.into(),
                reason: e.to_string(),
            })
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate `(name, raw value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
