//! Compile and run the generated program with the JDK tools.
//!
//! Every subprocess gets the Balie directory as an explicit working directory;
//! the process-wide current directory is never touched.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use tracing::{debug, warn};

use crate::config::{RuntimeStderrPolicy, Settings};
use crate::error::{NerError, Result};

/// Captured result of one finished subprocess.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// Run `program` with `args` in `cwd` and wait for it to finish.
    pub fn capture<I, S>(program: &Path, args: I, cwd: &Path) -> std::io::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        Ok(Self {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }

    /// `true` when the tool wrote anything at all to stderr, whitespace included.
    #[must_use]
    pub fn has_stderr(&self) -> bool {
        !self.stderr.is_empty()
    }

    /// Human-readable failure detail: stderr, falling back to stdout.
    #[must_use]
    pub fn diagnostics(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }
}

/// `javac`/`java` invocation settings for one Balie installation.
#[derive(Debug, Clone)]
pub struct Toolchain {
    javac: PathBuf,
    java: PathBuf,
    work_dir: PathBuf,
    classpath: Vec<String>,
    runtime_stderr: RuntimeStderrPolicy,
}

impl Toolchain {
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            javac: settings.javac.clone(),
            java: settings.java.clone(),
            work_dir: settings.balie_dir.clone(),
            classpath: settings.classpath.clone(),
            runtime_stderr: settings.runtime_stderr,
        }
    }

    /// Classpath argument joined with the platform separator.
    #[must_use]
    pub fn classpath_arg(&self) -> String {
        let separator = if cfg!(windows) { ";" } else { ":" };
        self.classpath.join(separator)
    }

    /// Compile `source_file` (relative to the working directory).
    ///
    /// Any stderr output counts as a failure, matching how `javac` reports errors.
    pub fn compile(&self, source_file: &str) -> Result<()> {
        debug!("Running {} {}", self.javac.display(), source_file);

        let output = ToolOutput::capture(&self.javac, [source_file], &self.work_dir)
            .map_err(|e| {
                NerError::Compile(format!("failed to run {}: {e}", self.javac.display()))
            })?;

        if !output.status.success() || output.has_stderr() {
            return Err(NerError::Compile(describe_failure(&self.javac, &output)));
        }

        Ok(())
    }

    /// Run the compiled class and return its stdout.
    pub fn execute(&self, class_name: &str) -> Result<String> {
        let classpath = self.classpath_arg();
        debug!(
            "Running {} -cp {} {}",
            self.java.display(),
            classpath,
            class_name
        );

        let output = ToolOutput::capture(
            &self.java,
            ["-cp", classpath.as_str(), class_name],
            &self.work_dir,
        )
        .map_err(|e| NerError::RuntimeTool(format!("failed to run {}: {e}", self.java.display())))?;

        if !output.status.success() {
            return Err(NerError::RuntimeTool(describe_failure(&self.java, &output)));
        }

        if output.has_stderr() {
            match self.runtime_stderr {
                RuntimeStderrPolicy::Fail => {
                    return Err(NerError::RuntimeTool(describe_failure(&self.java, &output)));
                }
                RuntimeStderrPolicy::Warn => {
                    warn!("{} stderr: {}", self.java.display(), output.stderr.trim());
                }
                RuntimeStderrPolicy::Ignore => {}
            }
        }

        Ok(output.stdout)
    }
}

fn describe_failure(program: &Path, output: &ToolOutput) -> String {
    let detail = output.diagnostics();
    if detail.is_empty() {
        format!("{} exited with {}", program.display(), output.status)
    } else {
        format!("{} exited with {}:\n{detail}", program.display(), output.status)
    }
}
