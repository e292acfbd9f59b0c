use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".propexrc.json";

/// Test code references placeholders too, but its keys are usually
/// fixture noise rather than real deployment surface.
pub const TEST_FILE_PATTERNS: &[&str] = &[
    "**/tests/**",
    "**/__tests__/**",
    "**/*_test.*",
    "**/test_*.*",
    "**/*.test.*",
    "**/*.spec.*",
];

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directories or glob patterns to scan; empty means the whole root.
    #[serde(default)]
    pub includes: Vec<String>,
    /// Paths or glob patterns to skip.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// File extensions considered scannable source.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Target environment names, one report column each.
    #[serde(default = "default_environments")]
    pub environments: Vec<String>,
    /// Directory the rendered artifacts are written to, relative to the
    /// source root unless absolute.
    #[serde(default = "default_out_dir")]
    pub out_dir: String,
    #[serde(default = "default_ignore_test_files")]
    pub ignore_test_files: bool,
}

fn default_extensions() -> Vec<String> {
    ["rs", "java", "kt", "scala", "go", "py", "js", "ts"]
        .map(String::from)
        .to_vec()
}

fn default_environments() -> Vec<String> {
    vec!["ref".to_string()]
}

fn default_out_dir() -> String {
    ".".to_string()
}

fn default_ignore_test_files() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            includes: Vec::new(),
            ignores: Vec::new(),
            extensions: default_extensions(),
            environments: default_environments(),
            out_dir: default_out_dir(),
            ignore_test_files: default_ignore_test_files(),
        }
    }
}

impl Config {
    /// Load the config file from the source root, falling back to the
    /// defaults when none exists. A present but unparsable file is an
    /// error; silently ignoring a typo would mask a misconfigured scan.
    pub fn load(source_root: &Path) -> Result<Self> {
        let path = source_root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Resolve the output directory against the source root.
    pub fn resolved_out_dir(&self, source_root: &Path) -> PathBuf {
        let out = Path::new(&self.out_dir);
        if out.is_absolute() {
            out.to_path_buf()
        } else {
            source_root.join(out)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let json = serde_json::to_string_pretty(&Config::default())?;
    Ok(json + "\n")
}
