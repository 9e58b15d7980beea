use std::collections::HashMap;

use anyhow::{Context, Result};

const DEFAULT_BASE_URL: &str = "https://app.cased.com";
const DEPLOYMENTS_PATH: &str = "/api/v1/deployments/";

/// Snapshot of the environment variables the notifier reads.
///
/// Values are trimmed on capture; a variable that is unset or blank is
/// treated as absent everywhere.
#[derive(Debug)]
pub struct Config {
    vars: HashMap<String, String>,
}

impl Config {
    /// Capture the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped,
    /// the same as if they were unset.
    pub fn from_env() -> Self {
        let vars = std::env::vars_os().filter_map(|(name, value)| {
            Some((name.into_string().ok()?, value.into_string().ok()?))
        });
        Self::from_vars(vars)
    }

    /// Build a snapshot from explicit pairs. Used by tests.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: AsRef<str>,
    {
        let vars = vars
            .into_iter()
            .filter_map(|(name, value)| {
                let value = value.as_ref().trim();
                (!value.is_empty()).then(|| (name.into(), value.to_string()))
            })
            .collect();
        Self { vars }
    }

    /// Trimmed value of `name`, or `None` when unset or blank.
    pub fn var(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// First present value among `names`, in order.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.var(name))
    }

    pub fn api_key(&self) -> Result<&str> {
        self.var("API_KEY").context("API_KEY is required")
    }

    pub fn base_url(&self) -> &str {
        self.var("CASED_BASE_URL").unwrap_or(DEFAULT_BASE_URL)
    }

    /// Full URL of the deployments endpoint.
    pub fn endpoint(&self) -> String {
        format!(
            "{}{}",
            self.base_url().trim_end_matches('/'),
            DEPLOYMENTS_PATH
        )
    }
}
