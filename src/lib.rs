pub mod api;
pub mod config;
pub mod format;
pub mod reader;

pub use api::{dump_file, dump_to_writer};
pub use config::{DumpConfig, DumpError, Window};
pub use format::HexFormatter;
pub use reader::{Chunk, ChunkReader};
