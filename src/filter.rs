// src/filter.rs
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Per-line keyword predicate. Two filters are supported; both are
/// case-sensitive substring tests against fixed literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineFilter {
    /// Matches provider URL settings plus any line mentioning AUTH, CUSTOM
    /// or OIDC. The `GOTRUE_EXTERNAL_` prefix test binds only to the URL
    /// containment test; the remaining keywords match anywhere in the line.
    Anchored,
    /// Matches any line mentioning OIDC, CUSTOM or GOTRUE_EXTERNAL.
    Broad,
}

impl LineFilter {
    pub fn matches(&self, line: &str) -> bool {
        match self {
            LineFilter::Anchored => {
                (line.starts_with("GOTRUE_EXTERNAL_") && line.contains("URL"))
                    || line.contains("AUTH")
                    || line.contains("CUSTOM")
                    || line.contains("OIDC")
            }
            LineFilter::Broad => {
                line.contains("OIDC")
                    || line.contains("CUSTOM")
                    || line.contains("GOTRUE_EXTERNAL")
            }
        }
    }

    /// Returns the matching lines of `document`, in document order.
    ///
    /// Lines are delimited by `'\n'` and carried through untouched, carriage
    /// returns included.
    pub fn filter_lines<'a>(&self, document: &'a str) -> Vec<&'a str> {
        document.split('\n').filter(|line| self.matches(line)).collect()
    }
}

impl FromStr for LineFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "anchored" => Ok(LineFilter::Anchored),
            "broad" => Ok(LineFilter::Broad),
            _ => Err(format!(
                "Unknown filter '{}', expected 'anchored' or 'broad'",
                s
            )),
        }
    }
}
