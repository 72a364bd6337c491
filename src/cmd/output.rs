use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use balie_ner::{NamedEntity, NerError};

/// Write one tuple line per entity to `path`, or to stdout when `None`.
///
/// The file is only created here, after chunking succeeded.
pub fn write_entities(entities: &[NamedEntity], path: Option<&Path>) -> Result<(), NerError> {
    match path {
        Some(path) => {
            let target = path.display().to_string();
            let file = File::create(path).map_err(|source| NerError::OutputFile {
                target: target.clone(),
                source,
            })?;
            write_lines(entities, BufWriter::new(file))
                .map_err(|source| NerError::OutputFile { target, source })
        }
        None => write_lines(entities, io::stdout().lock()).map_err(|source| {
            NerError::OutputFile {
                target: "stdout".to_string(),
                source,
            }
        }),
    }
}

fn write_lines<W: Write>(entities: &[NamedEntity], mut writer: W) -> io::Result<()> {
    for entity in entities {
        writeln!(writer, "{entity}")?;
    }
    writer.flush()
}
