use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use balie_ner::{BalieChunker, NerError, Settings};

use super::write_entities;

pub fn cmd_chunk(input: Option<&Path>, output: Option<&Path>) -> Result<()> {
    let input = input.ok_or(NerError::MissingInput)?;
    let bytes = std::fs::read(input).map_err(|source| NerError::InputFile {
        path: input.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|source| NerError::InputEncoding {
        path: input.to_path_buf(),
        source,
    })?;

    let settings = Settings::load()?;
    info!("Using Balie at {}", settings.balie_dir.display());

    let chunker = BalieChunker::new(settings)?;
    let entities = chunker
        .chunk(&text)
        .with_context(|| format!("failed to chunk {}", input.display()))?;

    write_entities(&entities, output)?;
    Ok(())
}
