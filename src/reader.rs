use crate::config::Window;
use std::cmp::min;
use std::io::{self, ErrorKind, Read, Seek, SeekFrom};

/// One slice of file bytes, `0 < len <= chunk_size`, tagged with the
/// absolute offset it was read from.
#[derive(Debug, Clone)]
pub struct Chunk {
    pub offset: u64,
    pub bytes: Vec<u8>,
}

/// Windowed sequential reader over any seekable byte source.
///
/// Yields chunks covering exactly `[window.offset, window.offset + window.limit)`,
/// each at most `chunk_size` bytes, the last possibly shorter. The cursor is
/// owned by the instance, so separate dumps in one process never interfere;
/// re-running a dump means constructing a fresh reader.
#[derive(Debug)]
pub struct ChunkReader<R> {
    source: R,
    cursor: u64,
    end: u64,
    chunk_size: usize,
}

impl<R: Read + Seek> ChunkReader<R> {
    pub fn new(source: R, window: Window, chunk_size: usize) -> Self {
        ChunkReader {
            source,
            cursor: window.offset,
            end: window.end(),
            chunk_size,
        }
    }

    fn advance(&mut self) -> io::Result<Option<Chunk>> {
        let remaining = self.end.saturating_sub(self.cursor);
        if remaining == 0 {
            return Ok(None);
        }

        let want = min(remaining, self.chunk_size as u64) as usize;
        self.source.seek(SeekFrom::Start(self.cursor))?;

        let mut bytes = vec![0u8; want];
        let mut filled = 0;
        while filled < want {
            match self.source.read(&mut bytes[filled..]) {
                Ok(0) => break, // EOF inside the window: normal termination
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
        if filled == 0 {
            return Ok(None);
        }
        bytes.truncate(filled);

        let chunk = Chunk {
            offset: self.cursor,
            bytes,
        };
        self.cursor += filled as u64;
        log::trace!("read {} bytes at {:#x}", chunk.bytes.len(), chunk.offset);
        Ok(Some(chunk))
    }
}

impl<R: Read + Seek> Iterator for ChunkReader<R> {
    type Item = io::Result<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        self.advance().transpose()
    }
}
