mod chunk;
mod output;

pub use chunk::cmd_chunk;
pub use output::write_entities;
