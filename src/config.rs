//! Tool configuration loaded from `config.toml`.
//!
//! ```toml
//! balie_dir = "/opt/balie"
//! source_file = "RTESentence.java"
//! classpath = [".", "./lib/weka.jar"]
//! runtime_stderr = "fail"
//! ```
//!
//! Lookup order: `$BALIE_NER_CONFIG`, then `./config.toml`, then
//! `~/.config/balie-ner/config.toml`.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{NerError, Result};

/// Environment variable that overrides the config file location.
pub const CONFIG_ENV: &str = "BALIE_NER_CONFIG";

/// Config file name looked up in the working and user config directories.
pub const CONFIG_FILE: &str = "config.toml";

/// What to do when the `java` step writes to stderr.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeStderrPolicy {
    /// Abort before parsing
    #[default]
    Fail,
    /// Log the stderr text and keep going
    Warn,
    /// Discard it
    Ignore,
}

/// Settings for driving Balie.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Balie installation directory; every subprocess runs here.
    pub balie_dir: PathBuf,
    /// Name of the generated Java source, written into `balie_dir`.
    #[serde(default = "default_source_file")]
    pub source_file: String,
    /// Classpath entries for the `java` step, relative to `balie_dir`.
    #[serde(default = "default_classpath")]
    pub classpath: Vec<String>,
    #[serde(default = "default_javac")]
    pub javac: PathBuf,
    #[serde(default = "default_java")]
    pub java: PathBuf,
    #[serde(default)]
    pub runtime_stderr: RuntimeStderrPolicy,
}

fn default_source_file() -> String {
    "RTESentence.java".to_string()
}

fn default_classpath() -> Vec<String> {
    vec![".".to_string(), "./lib/weka.jar".to_string()]
}

fn default_javac() -> PathBuf {
    which::which("javac").unwrap_or_else(|_| PathBuf::from("javac"))
}

fn default_java() -> PathBuf {
    which::which("java").unwrap_or_else(|_| PathBuf::from("java"))
}

impl Settings {
    /// Settings for a Balie installation with every other key defaulted.
    #[must_use]
    pub fn for_dir(balie_dir: impl Into<PathBuf>) -> Self {
        Self {
            balie_dir: balie_dir.into(),
            source_file: default_source_file(),
            classpath: default_classpath(),
            javac: default_javac(),
            java: default_java(),
            runtime_stderr: RuntimeStderrPolicy::default(),
        }
    }

    /// Load settings from the resolved config location.
    pub fn load() -> Result<Self> {
        Self::from_file(&config_path())
    }

    /// Load and validate settings from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {}", path.display());

        let content = std::fs::read_to_string(path).map_err(|e| {
            NerError::Config(format!("failed to read {}: {e}", path.display()))
        })?;

        let settings = Self::from_toml(&content)
            .map_err(|e| NerError::Config(format!("{} in {}", e, path.display())))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from TOML text without touching the filesystem.
    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Check that the settings describe a usable installation.
    pub fn validate(&self) -> Result<()> {
        if !self.balie_dir.is_dir() {
            return Err(NerError::Config(format!(
                "balie_dir {} is not a directory",
                self.balie_dir.display()
            )));
        }

        if self.class_name().is_none() {
            return Err(NerError::Config(format!(
                "source_file '{}' must be a .java file named after a valid class",
                self.source_file
            )));
        }

        Ok(())
    }

    /// Java class name derived from `source_file` (`RTESentence.java` -> `RTESentence`).
    #[must_use]
    pub fn class_name(&self) -> Option<&str> {
        let stem = self.source_file.strip_suffix(".java")?;
        is_java_identifier(stem).then_some(stem)
    }

    /// Path of the generated source inside the installation directory.
    #[must_use]
    pub fn source_path(&self) -> PathBuf {
        self.balie_dir.join(&self.source_file)
    }
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}

/// Return the path of the config file to load.
fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }

    let local = PathBuf::from(CONFIG_FILE);
    if local.exists() {
        return local;
    }

    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("balie-ner")
        .join(CONFIG_FILE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let settings = Settings::from_toml(r#"balie_dir = "/opt/balie""#).unwrap();
        assert_eq!(settings.balie_dir, PathBuf::from("/opt/balie"));
        assert_eq!(settings.source_file, "RTESentence.java");
        assert_eq!(settings.classpath, vec![".", "./lib/weka.jar"]);
        assert_eq!(settings.runtime_stderr, RuntimeStderrPolicy::Fail);
    }

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
balie_dir = "/opt/balie"
source_file = "Chunker.java"
classpath = [".", "lib/balie.jar"]
javac = "/usr/lib/jvm/bin/javac"
java = "/usr/lib/jvm/bin/java"
runtime_stderr = "warn"
"#;
        let settings = Settings::from_toml(toml_str).unwrap();
        assert_eq!(settings.class_name(), Some("Chunker"));
        assert_eq!(settings.classpath, vec![".", "lib/balie.jar"]);
        assert_eq!(settings.javac, PathBuf::from("/usr/lib/jvm/bin/javac"));
        assert_eq!(settings.runtime_stderr, RuntimeStderrPolicy::Warn);
    }

    #[test]
    fn missing_balie_dir_is_rejected() {
        assert!(Settings::from_toml(r#"source_file = "A.java""#).is_err());
    }

    #[test]
    fn unknown_stderr_policy_is_rejected() {
        let toml_str = r#"
balie_dir = "/opt/balie"
runtime_stderr = "sometimes"
"#;
        assert!(Settings::from_toml(toml_str).is_err());
    }

    #[test]
    fn class_name_requires_java_identifier() {
        let mut settings = Settings::for_dir("/opt/balie");
        assert_eq!(settings.class_name(), Some("RTESentence"));

        settings.source_file = "RTESentence.txt".into();
        assert_eq!(settings.class_name(), None);

        settings.source_file = "1Bad.java".into();
        assert_eq!(settings.class_name(), None);

        settings.source_file = "my-class.java".into();
        assert_eq!(settings.class_name(), None);
    }

    #[test]
    fn validate_rejects_missing_directory() {
        let settings = Settings::for_dir("/definitely/not/a/balie/install");
        let err = settings.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn from_file_reports_missing_file_as_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::from_file(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, NerError::Config(_)));
    }

    #[test]
    fn from_file_loads_and_validates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(
            &path,
            format!("balie_dir = {:?}\n", dir.path().to_string_lossy()),
        )
        .unwrap();

        let settings = Settings::from_file(&path).unwrap();
        assert_eq!(settings.balie_dir, dir.path());
        assert_eq!(settings.source_path(), dir.path().join("RTESentence.java"));
    }

    #[test]
    fn from_file_reports_malformed_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "balie_dir = [unterminated").unwrap();

        let err = Settings::from_file(&path).unwrap_err();
        assert!(matches!(err, NerError::Config(_)));
    }
}
