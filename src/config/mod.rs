//! Publish configuration
//!
//! Every field has a default matching the historical apitests layout, so an
//! empty (or absent) configuration file reproduces the legacy behaviour. A
//! YAML file can override any subset, and command-line flags override the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{self, Result};


/// Default bundle template location
pub const DEFAULT_TEMPLATE_PATH: &str = "./tests/apitests/python/bundle_data/bundle.json.tmpl";

/// Default working bundle location
pub const DEFAULT_WORKING_PATH: &str = "./tests/apitests/python/bundle_data/bundle.json";

/// Default fixed bundle location, written by `cnab-to-oci fixup`
pub const DEFAULT_FIXED_PATH: &str = "./tests/apitests/python/bundle_data/fixed-bundle.json";

/// Default external tool
pub const DEFAULT_TOOL: &str = "cnab-to-oci";

/// Log level handed to `cnab-to-oci fixup`
pub const DEFAULT_TOOL_LOG_LEVEL: &str = "error";

/// Service whose image is replaced when image substitution is enabled
pub const DEFAULT_SERVICE_NAME: &str = "hello";

/// Configuration for one publish cycle
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PublishConfig {
    /// Bundle template read by the load step
    pub template_path: PathBuf,

    /// Working bundle written by the load step
    pub working_path: PathBuf,

    /// Fixed bundle written by the fixup step
    pub fixed_path: PathBuf,

    /// Program invoked for fixup and push
    pub tool: String,

    /// Value passed to `--log-level` on fixup
    pub log_level: String,

    /// Log failing commands and carry on instead of aborting
    pub ignore_command_failures: bool,

    /// Write the service and invocation images into the working bundle
    pub substitute_images: bool,

    /// Key under `images` that receives the service image
    pub service_name: String,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            working_path: PathBuf::from(DEFAULT_WORKING_PATH),
            fixed_path: PathBuf::from(DEFAULT_FIXED_PATH),
            tool: DEFAULT_TOOL.to_string(),
            log_level: DEFAULT_TOOL_LOG_LEVEL.to_string(),
            ignore_command_failures: false,
            substitute_images: false,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
        }
    }
}

/// Values from the command line that take precedence over the file
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub template_path: Option<PathBuf>,
    pub working_path: Option<PathBuf>,
    pub fixed_path: Option<PathBuf>,
    pub tool: Option<String>,
    pub ignore_command_failures: bool,
    pub substitute_images: bool,
}

impl PublishConfig {
    /// Parse configuration from YAML; `path` is only used in error messages
    pub fn from_yaml(yaml: &str, path: &Path) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| error::config::parse_failed(path, e))
    }

    /// Load configuration from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                error::config::not_found(path)
            } else {
                error::config::read_failed(path, e)
            }
        })?;

        Self::from_yaml(&content, path)
    }

    /// Apply command-line overrides; flags only ever switch behaviour on
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(template_path) = overrides.template_path {
            self.template_path = template_path;
        }
        if let Some(working_path) = overrides.working_path {
            self.working_path = working_path;
        }
        if let Some(fixed_path) = overrides.fixed_path {
            self.fixed_path = fixed_path;
        }
        if let Some(tool) = overrides.tool {
            self.tool = tool;
        }
        self.ignore_command_failures |= overrides.ignore_command_failures;
        self.substitute_images |= overrides.substitute_images;
        self
    }
}
