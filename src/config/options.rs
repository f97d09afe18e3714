//! Raw option set for the `run` command.
//!
//! clap only tokenizes the command line; presence checks, numeric validation
//! and deployment-mode selection happen here against a plain key/value view,
//! so failures can name the exact option that was wrong.

use std::collections::BTreeMap;

use crate::error::OptionError;

/// Raw key/value options as supplied on the command line.
///
/// Empty values count as absent throughout: `--remote_address ""` behaves
/// the same as omitting the option.
#[derive(Debug, Default, Clone)]
pub struct RawOptions {
    values: BTreeMap<&'static str, String>,
}

impl RawOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an option value.
    pub fn set(&mut self, name: &'static str, value: impl Into<String>) {
        self.values.insert(name, value.into());
    }

    /// Record an option if it was supplied.
    pub fn set_opt(&mut self, name: &'static str, value: Option<String>) {
        if let Some(value) = value {
            self.set(name, value);
        }
    }

    /// Optional lookup.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .get(name)
            .map(String::as_str)
            .filter(|v| !v.is_empty())
    }

    /// Required lookup.
    pub fn require(&self, name: &'static str) -> Result<&str, OptionError> {
        self.get(name).ok_or(OptionError::Missing { name })
    }

    /// Required positive port number.
    pub fn require_port(&self, name: &'static str) -> Result<u16, OptionError> {
        let raw = self.require(name)?;
        raw.parse::<u16>()
            .ok()
            .filter(|port| *port > 0)
            .ok_or_else(|| OptionError::InvalidNumeric {
                name,
                value: raw.to_string(),
            })
    }

    /// Optional positive integer, falling back to `default` when absent.
    pub fn positive_or(&self, name: &'static str, default: u32) -> Result<u32, OptionError> {
        match self.get(name) {
            None => Ok(default),
            Some(raw) => raw
                .parse::<u32>()
                .ok()
                .filter(|n| *n > 0)
                .ok_or_else(|| OptionError::InvalidNumeric {
                    name,
                    value: raw.to_string(),
                }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_present() {
        let mut opts = RawOptions::new();
        opts.set("public_address", "1.2.3.4");
        assert_eq!(opts.require("public_address").unwrap(), "1.2.3.4");
    }

    #[test]
    fn test_require_absent_names_the_key() {
        let opts = RawOptions::new();
        assert_eq!(
            opts.require("cluster_port"),
            Err(OptionError::Missing {
                name: "cluster_port"
            })
        );
    }

    #[test]
    fn test_empty_value_counts_as_absent() {
        let mut opts = RawOptions::new();
        opts.set("remote_address", "");
        assert_eq!(opts.get("remote_address"), None);
    }

    #[test]
    fn test_require_port_rejects_non_numeric() {
        let mut opts = RawOptions::new();
        opts.set("cluster_port", "570a");
        assert_eq!(
            opts.require_port("cluster_port"),
            Err(OptionError::InvalidNumeric {
                name: "cluster_port",
                value: "570a".to_string()
            })
        );
    }

    #[test]
    fn test_require_port_rejects_zero() {
        let mut opts = RawOptions::new();
        opts.set("event_bus_port", "0");
        assert!(matches!(
            opts.require_port("event_bus_port"),
            Err(OptionError::InvalidNumeric { .. })
        ));
    }

    #[test]
    fn test_positive_or_default() {
        let opts = RawOptions::new();
        assert_eq!(opts.positive_or("instances", 1).unwrap(), 1);
    }

    #[test]
    fn test_positive_or_rejects_zero() {
        let mut opts = RawOptions::new();
        opts.set("instances", "0");
        assert!(opts.positive_or("instances", 1).is_err());
    }
}
