//! Common test utilities for cnab-publish integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// Bundle template in the default apitests layout
pub const TEMPLATE_PATH: &str = "tests/apitests/python/bundle_data/bundle.json.tmpl";

/// Working bundle in the default apitests layout
pub const WORKING_PATH: &str = "tests/apitests/python/bundle_data/bundle.json";

/// Fixed bundle in the default apitests layout
#[allow(dead_code)]
pub const FIXED_PATH: &str = "tests/apitests/python/bundle_data/fixed-bundle.json";

/// Version line printed by the fake tool
#[allow(dead_code)]
pub const FAKE_TOOL_VERSION: &str = "Version: v0.3.1-fake";

/// Stderr line printed by the fake tool when it fails
#[allow(dead_code)]
pub const FAKE_TOOL_ERROR: &str = "fake cnab-to-oci: registry unreachable";

/// A minimal CNAB bundle template
pub const TEMPLATE: &str = r#"{"schemaVersion":"v1.0.0","name":"hello","images":{"hello":{"image":"nginx:latest"}},"invocationImages":[{"image":"cnab/helloworld:0.1.1","contentDigest":"sha256:abc"}]}"#;

/// A temporary working directory for one CLI run
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a workspace with the template at its default location
    #[allow(dead_code)]
    pub fn with_template() -> Self {
        let workspace = Self::new();
        workspace.write_file(TEMPLATE_PATH, TEMPLATE);
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    #[allow(dead_code)]
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Install a fake `cnab-to-oci` that appends its arguments to a log file
    /// and exits with `$FAKE_CNAB_EXIT` (default 0), complaining on stderr
    /// when that is non-zero. `version` prints [`FAKE_TOOL_VERSION`].
    /// Returns the script path.
    #[cfg(unix)]
    #[allow(dead_code)]
    pub fn fake_tool(&self) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = self.path.join("bin").join("cnab-to-oci");
        let log = self.tool_log_path();
        self.write_file(
            "bin/cnab-to-oci",
            &format!(
                "#!/bin/sh\n\
                 printf '%s\\n' \"$*\" >> '{}'\n\
                 [ \"$1\" = version ] && echo '{FAKE_TOOL_VERSION}'\n\
                 code=\"${{FAKE_CNAB_EXIT:-0}}\"\n\
                 [ \"$code\" = 0 ] || echo '{FAKE_TOOL_ERROR}' >&2\n\
                 exit \"$code\"\n",
                log.display()
            ),
        );
        let mut permissions = std::fs::metadata(&script)
            .expect("Failed to stat fake tool")
            .permissions();
        permissions.set_mode(0o755);
        std::fs::set_permissions(&script, permissions).expect("Failed to chmod fake tool");
        script
    }

    /// Argument lines recorded by the fake tool, one per invocation
    #[allow(dead_code)]
    pub fn tool_calls(&self) -> Vec<String> {
        let log = self.tool_log_path();
        if !log.exists() {
            return Vec::new();
        }
        std::fs::read_to_string(log)
            .expect("Failed to read fake tool log")
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[allow(dead_code)]
    fn tool_log_path(&self) -> PathBuf {
        self.path.join("cnab-to-oci.log")
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
