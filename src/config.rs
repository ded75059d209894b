// src/config.rs
use serde::{Deserialize, Serialize};
use std::fs;

use crate::error::ScanError;
use crate::filter::LineFilter;

pub const DEFAULT_DOC_URL: &str =
    "https://raw.githubusercontent.com/supabase/auth/master/README.md";

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
    pub url: String,
    pub filter: LineFilter,
}

impl Settings {
    pub fn load_from_file(path: &str) -> Result<Self, ScanError> {
        let content = fs::read_to_string(path)?;
        let settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_DOC_URL.to_string(),
            filter: LineFilter::Anchored,
        }
    }
}
