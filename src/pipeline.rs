//! End-to-end chunking: generate, compile, run, parse.

use std::time::Instant;

use tracing::{debug, info};

use crate::codegen::JavaProgram;
use crate::config::Settings;
use crate::driver::Toolchain;
use crate::error::{NerError, Result};
use crate::parser::{parse_annotations, NamedEntity};

/// Runs Balie over text through a generated Java program.
#[derive(Debug, Clone)]
pub struct BalieChunker {
    settings: Settings,
    program: JavaProgram,
    toolchain: Toolchain,
}

impl BalieChunker {
    /// Build a chunker for validated settings.
    ///
    /// # Errors
    ///
    /// Returns [`NerError::Config`] if the source file name does not name a Java class.
    pub fn new(settings: Settings) -> Result<Self> {
        let class_name = settings.class_name().ok_or_else(|| {
            NerError::Config(format!(
                "source_file '{}' does not name a Java class",
                settings.source_file
            ))
        })?;

        let program = JavaProgram::new(class_name);
        let toolchain = Toolchain::from_settings(&settings);

        Ok(Self {
            settings,
            program,
            toolchain,
        })
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Find named entities in untokenized `text`.
    ///
    /// Overwrites the generated source in the Balie directory on every call.
    pub fn chunk(&self, text: &str) -> Result<Vec<NamedEntity>> {
        let start = Instant::now();

        let source_path = self.settings.source_path();
        let source = self.program.render(text);
        std::fs::write(&source_path, source)?;
        info!("Generated {}", source_path.display());

        self.toolchain.compile(&self.settings.source_file)?;
        debug!("Compiled {}", self.program.class_name());

        let output = self.toolchain.execute(self.program.class_name())?;
        debug!("Balie produced {} bytes", output.len());

        let entities = parse_annotations(&output);
        info!(
            "Found {} named entities in {:.2}s",
            entities.len(),
            start.elapsed().as_secs_f64()
        );

        Ok(entities)
    }
}
