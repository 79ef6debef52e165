use crate::config::{DumpConfig, DumpError, Window};
use crate::format::HexFormatter;
use crate::reader::ChunkReader;
use log::debug;
use std::fs::File;
use std::io::{Read, Seek, Write};

/// Validate and dump a file according to `config`.
///
/// The file is opened once for the size check (handle dropped immediately)
/// and once more for the dump itself, which streams chunk by chunk into
/// `out` without buffering more than one chunk.
///
/// # Errors
/// - [`DumpError::EmptyFile`] before any output if the file has no bytes
/// - [`DumpError::WindowOutOfRange`] before any output if `offset + limit`
///   reaches past EOF
/// - [`DumpError::Io`] if the file cannot be opened, or if a read or write
///   fails mid-dump (whatever was already flushed stays flushed)
///
/// # Example
/// ```no_run
/// use hxd::{DumpConfig, dump_file};
///
/// fn main() -> anyhow::Result<()> {
///     let config = DumpConfig {
///         file_path: "firmware.bin".into(),
///         chunk_size: 16,
///         show_ascii: true,
///         offset: 0,
///         limit: 0,
///     };
///     let mut out = std::io::stdout().lock();
///     dump_file(&config, &mut out)?;
///     Ok(())
/// }
/// ```
pub fn dump_file<W: Write>(config: &DumpConfig, out: &mut W) -> Result<(), DumpError> {
    let file_size = File::open(&config.file_path)?.metadata()?.len();
    let window = config.resolve_window(file_size)?;
    debug!(
        "dumping {} bytes of {} from offset {:#x}",
        window.limit,
        config.file_path.display(),
        window.offset
    );

    let file = File::open(&config.file_path)?;
    dump_to_writer(file, window, config, out)
}

/// Dump an already-resolved window of any seekable source.
///
/// `window` must satisfy `offset + limit <= source size`; use
/// [`DumpConfig::resolve_window`] to get one.
pub fn dump_to_writer<R, W>(
    source: R,
    window: Window,
    config: &DumpConfig,
    out: &mut W,
) -> Result<(), DumpError>
where
    R: Read + Seek,
    W: Write,
{
    let reader = ChunkReader::new(source, window, config.chunk_size);
    HexFormatter::new(config).render(reader, out)?;
    Ok(())
}
