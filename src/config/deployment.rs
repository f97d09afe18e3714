//! Deployment request resolution.

use serde::Serialize;

use crate::config::options::RawOptions;
use crate::error::OptionError;

/// How the execution unit is obtained.
///
/// Exactly one mode is active per request, selected by which options were
/// supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeploymentMode {
    /// Download a packaged bundle from the artifact repository.
    RemoteBundle { bundle: String },
    /// Run a unit already present on the local filesystem.
    LocalUnit {
        unit_path: String,
        classpath_root: String,
    },
}

/// A validated unit-of-work submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentRequest {
    pub mode: DeploymentMode,
    pub instance_count: u32,
}

impl DeploymentRequest {
    /// Select the deployment mode from the supplied options.
    ///
    /// `bundle` and `unit`+`classpath` are mutually exclusive; supplying
    /// both is ambiguous and supplying neither leaves nothing to deploy.
    /// A lone `unit` or `classpath` fails on the missing half.
    pub fn resolve(opts: &RawOptions) -> Result<Self, OptionError> {
        let bundle = opts.get("bundle");
        let local = opts.get("unit").or(opts.get("classpath"));

        let mode = match (bundle, local) {
            (Some(_), Some(_)) => return Err(OptionError::AmbiguousDeploymentMode),
            (Some(bundle), None) => DeploymentMode::RemoteBundle {
                bundle: bundle.to_string(),
            },
            (None, Some(_)) => DeploymentMode::LocalUnit {
                unit_path: opts.require("unit")?.to_string(),
                classpath_root: opts.require("classpath")?.to_string(),
            },
            (None, None) => return Err(OptionError::MissingDeploymentTarget),
        };

        Ok(Self {
            mode,
            instance_count: opts.positive_or("instances", 1)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundle_alone_selects_remote_bundle() {
        let mut opts = RawOptions::new();
        opts.set("bundle", "foo");
        let request = DeploymentRequest::resolve(&opts).unwrap();
        assert_eq!(
            request.mode,
            DeploymentMode::RemoteBundle {
                bundle: "foo".to_string()
            }
        );
        assert_eq!(request.instance_count, 1);
    }

    #[test]
    fn test_unit_and_classpath_select_local_unit() {
        let mut opts = RawOptions::new();
        opts.set("unit", "/app/main.unit");
        opts.set("classpath", "/app/lib");
        let request = DeploymentRequest::resolve(&opts).unwrap();
        assert_eq!(
            request.mode,
            DeploymentMode::LocalUnit {
                unit_path: "/app/main.unit".to_string(),
                classpath_root: "/app/lib".to_string(),
            }
        );
    }

    #[test]
    fn test_both_modes_is_ambiguous() {
        let mut opts = RawOptions::new();
        opts.set("bundle", "foo");
        opts.set("unit", "/app/main.unit");
        opts.set("classpath", "/app/lib");
        assert_eq!(
            DeploymentRequest::resolve(&opts),
            Err(OptionError::AmbiguousDeploymentMode)
        );
    }

    #[test]
    fn test_neither_mode_is_missing_target() {
        let opts = RawOptions::new();
        assert_eq!(
            DeploymentRequest::resolve(&opts),
            Err(OptionError::MissingDeploymentTarget)
        );
    }

    #[test]
    fn test_unit_without_classpath_names_the_missing_half() {
        let mut opts = RawOptions::new();
        opts.set("unit", "/app/main.unit");
        assert_eq!(
            DeploymentRequest::resolve(&opts),
            Err(OptionError::Missing { name: "classpath" })
        );
    }

    #[test]
    fn test_classpath_without_unit_names_the_missing_half() {
        let mut opts = RawOptions::new();
        opts.set("classpath", "/app/lib");
        assert_eq!(
            DeploymentRequest::resolve(&opts),
            Err(OptionError::Missing { name: "unit" })
        );
    }

    #[test]
    fn test_explicit_instance_count() {
        let mut opts = RawOptions::new();
        opts.set("bundle", "foo");
        opts.set("instances", "3");
        let request = DeploymentRequest::resolve(&opts).unwrap();
        assert_eq!(request.instance_count, 3);
    }

    #[test]
    fn test_non_numeric_instance_count() {
        let mut opts = RawOptions::new();
        opts.set("bundle", "foo");
        opts.set("instances", "many");
        assert_eq!(
            DeploymentRequest::resolve(&opts),
            Err(OptionError::InvalidNumeric {
                name: "instances",
                value: "many".to_string()
            })
        );
    }
}
