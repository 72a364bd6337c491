//! `balie-ner` - named entity chunking with the Balie Java library
//!
//! Balie has no command line interface, so each run generates a small Java
//! driver class embedding the text, compiles it with `javac`, runs it with
//! `java` and extracts the `<ENAMEX>` annotations it prints.
//!
//! # Example
//!
//! ```rust,no_run
//! use balie_ner::{BalieChunker, Settings};
//!
//! fn main() -> anyhow::Result<()> {
//!     let chunker = BalieChunker::new(Settings::load()?)?;
//!     for entity in chunker.chunk("Boy George visited Wisconsin.")? {
//!         println!("{entity}");
//!     }
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod driver;
pub mod error;
pub mod parser;
pub mod pipeline;

pub use codegen::{escape_line, render_fragments, split_lines, JavaProgram};
pub use config::{RuntimeStderrPolicy, Settings};
pub use driver::{ToolOutput, Toolchain};
pub use error::{NerError, Result};
pub use parser::{parse_annotations, NamedEntity};
pub use pipeline::BalieChunker;

/// Sentences mentioning people, places and organizations, for trying out a
/// Balie installation.
pub const SAMPLE_TEXT: &str = "
Barack Obama, Hillary Clinton and George Bush met in a bar in Wisconsin. They
were discussing issues regarding the Netherlands, the Queen of England and
Boy George.
";

/// Version of balie-ner
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
