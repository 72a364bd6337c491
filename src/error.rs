//! Error taxonomy for the chunking pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Pipeline errors
#[derive(Error, Debug)]
pub enum NerError {
    #[error("No input file given.")]
    MissingInput,

    #[error("Can't read from input file: {}", .path.display())]
    InputFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Input file is not valid UTF-8: {}", .path.display())]
    InputEncoding {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    #[error("configuration error: {0}")]
    Config(String),

    #[error("javac compile error: {0}")]
    Compile(String),

    #[error("java runtime error: {0}")]
    RuntimeTool(String),

    #[error("can't write to output {target}: {source}")]
    OutputFile {
        target: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl NerError {
    /// Process exit code reported for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingInput
            | Self::InputFile { .. }
            | Self::InputEncoding { .. }
            | Self::Io(_) => 1,
            Self::Config(_) => 2,
            Self::Compile(_) => 3,
            Self::RuntimeTool(_) => 4,
            Self::OutputFile { .. } => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, NerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_errors_exit_with_one() {
        assert_eq!(NerError::MissingInput.exit_code(), 1);
        let err = NerError::InputFile {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Can't read from input file: missing.txt");
    }

    #[test]
    fn undecodable_input_is_not_reported_as_unreadable() {
        let source = String::from_utf8(vec![b'M', 0xFC, b'n']).unwrap_err();
        let err = NerError::InputEncoding {
            path: PathBuf::from("latin1.txt"),
            source,
        };
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "Input file is not valid UTF-8: latin1.txt");
    }

    #[test]
    fn tool_errors_have_distinct_codes() {
        let codes = [
            NerError::Config(String::new()).exit_code(),
            NerError::Compile(String::new()).exit_code(),
            NerError::RuntimeTool(String::new()).exit_code(),
            NerError::OutputFile {
                target: "out.txt".into(),
                source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            }
            .exit_code(),
        ];
        assert_eq!(codes, [2, 3, 4, 5]);
    }

    #[test]
    fn compile_error_keeps_diagnostics() {
        let err = NerError::Compile("RTESentence.java:3: error: ';' expected".into());
        assert!(err.to_string().contains("';' expected"));
    }
}
