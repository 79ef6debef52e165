use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum DumpError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("file is empty")]
    EmptyFile,
    #[error("requested window {offset}+{limit} exceeds file size {file_size}")]
    WindowOutOfRange {
        offset: u64,
        limit: u64,
        file_size: u64,
    },
}

/// Validated dump configuration, built once by the CLI and read-only after.
#[derive(Debug, Clone)]
pub struct DumpConfig {
    pub file_path: PathBuf,
    /// Bytes shown per row; also the read granularity.
    pub chunk_size: usize,
    pub show_ascii: bool,
    /// First byte of the file to display.
    pub offset: u64,
    /// Bytes to display; 0 means "to end of file".
    pub limit: u64,
}

/// The resolved `[offset, offset + limit)` byte range selected for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub offset: u64,
    pub limit: u64,
}

impl Window {
    pub fn end(&self) -> u64 {
        self.offset + self.limit
    }
}

impl DumpConfig {
    /// Resolve the configured offset/limit against the actual file size.
    ///
    /// A `limit` of 0 resolves to everything from `offset` to EOF. The
    /// returned window satisfies `offset + limit <= file_size`; anything
    /// that would reach past EOF is rejected rather than clamped.
    pub fn resolve_window(&self, file_size: u64) -> Result<Window, DumpError> {
        if file_size == 0 {
            return Err(DumpError::EmptyFile);
        }

        let available = file_size.saturating_sub(self.offset);
        let limit = if self.limit == 0 { available } else { self.limit };
        if self.offset > file_size || limit > available {
            return Err(DumpError::WindowOutOfRange {
                offset: self.offset,
                limit: self.limit,
                file_size,
            });
        }

        Ok(Window {
            offset: self.offset,
            limit,
        })
    }
}
