//! Per-call options for the equality and copy engines.
//!
//! Options are plain values built per invocation. Both structs deserialize
//! from TOML so shared comparison profiles can live next to a test suite:
//!
//! ```toml
//! mode = "sub_equals"
//! ignore = ["id", "updated_at"]
//! ```

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{GraphError, Result};

/// Member-set reconciliation policy for composite comparisons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompareMode {
    /// Member-name sets must match exactly
    #[default]
    Strict,
    /// Every source member must exist on the compare side and be equal;
    /// extra compare members are tolerated
    SubEquals,
    /// Only members present on both sides are compared
    Intersection,
}

impl CompareMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompareMode::Strict => "strict",
            CompareMode::SubEquals => "sub_equals",
            CompareMode::Intersection => "intersection",
        }
    }
}

impl fmt::Display for CompareMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for [`DeepEqualityTester`](crate::equality::DeepEqualityTester).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompareOptions {
    pub mode: CompareMode,
    /// Member names skipped at every depth
    pub ignore: BTreeSet<String>,
}

impl CompareOptions {
    pub fn strict() -> Self {
        Self::default()
    }

    pub fn sub_equals() -> Self {
        Self::default().with_mode(CompareMode::SubEquals)
    }

    pub fn intersection() -> Self {
        Self::default().with_mode(CompareMode::Intersection)
    }

    pub fn with_mode(mut self, mode: CompareMode) -> Self {
        self.mode = mode;
        self
    }

    /// Add member names to the ignore set
    pub fn ignoring<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn ignores(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }

    /// Parse options from a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOptions`] on malformed TOML, an unknown
    /// mode or an unknown key.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| GraphError::InvalidOptions {
            reason: e.to_string(),
        })
    }
}

/// Options for [`copy_properties_with`](crate::copy::copy_properties_with).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CopyOptions {
    /// Recurse into sequences and composites instead of assigning them whole
    pub deep: bool,
    /// Member names never copied, at any depth
    pub ignore: BTreeSet<String>,
}

impl Default for CopyOptions {
    fn default() -> Self {
        Self {
            deep: true,
            ignore: BTreeSet::new(),
        }
    }
}

impl CopyOptions {
    pub fn deep() -> Self {
        Self::default()
    }

    /// Every member is assigned directly, sharing nothing but cloned values
    pub fn shallow() -> Self {
        Self {
            deep: false,
            ..Self::default()
        }
    }

    /// Add member names to the ignore set
    pub fn ignoring<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn ignores(&self, name: &str) -> bool {
        self.ignore.contains(name)
    }

    /// Parse options from a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidOptions`] on malformed TOML or an unknown key.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        toml::from_str(input).map_err(|e| GraphError::InvalidOptions {
            reason: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_options_from_toml() {
        let opts = CompareOptions::from_toml_str(
            r#"
            mode = "sub_equals"
            ignore = ["id", "updated_at"]
            "#,
        )
        .unwrap();
        assert_eq!(opts.mode, CompareMode::SubEquals);
        assert!(opts.ignores("id"));
        assert!(!opts.ignores("name"));
    }

    #[test]
    fn test_empty_toml_gives_defaults() {
        assert_eq!(
            CompareOptions::from_toml_str("").unwrap(),
            CompareOptions::strict()
        );
        let copy = CopyOptions::from_toml_str("").unwrap();
        assert!(copy.deep);
        assert!(copy.ignore.is_empty());
    }

    #[test]
    fn test_unknown_mode_is_invalid_options() {
        let err = CompareOptions::from_toml_str(r#"mode = "fuzzy""#).unwrap_err();
        assert!(matches!(err, GraphError::InvalidOptions { .. }));

        let err = CopyOptions::from_toml_str("depth = 3").unwrap_err();
        assert!(matches!(err, GraphError::InvalidOptions { .. }));
    }

    #[test]
    fn test_builders() {
        let opts = CompareOptions::intersection().ignoring(["a", "b"]);
        assert_eq!(opts.mode, CompareMode::Intersection);
        assert_eq!(opts.ignore.len(), 2);
        assert_eq!(opts.mode.to_string(), "intersection");
        assert!(!CopyOptions::shallow().deep);
    }
}
