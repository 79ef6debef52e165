use crate::config::DumpConfig;
use crate::reader::Chunk;
use std::io::{self, Write};

/// Renders a chunk stream as aligned hex/ASCII rows, written incrementally
/// to the output sink so arbitrarily large files never need buffering.
#[derive(Debug)]
pub struct HexFormatter {
    title: String,
    chunk_size: usize,
    show_ascii: bool,
    start_address: u64,
}

impl HexFormatter {
    pub fn new(config: &DumpConfig) -> Self {
        HexFormatter {
            title: config.file_path.display().to_string(),
            chunk_size: config.chunk_size,
            show_ascii: config.show_ascii,
            start_address: config.offset,
        }
    }

    /// Write the full dump: title, column header, rule, one row per chunk,
    /// and a trailing blank line.
    pub fn render<I, W>(&self, chunks: I, out: &mut W) -> io::Result<()>
    where
        I: IntoIterator<Item = io::Result<Chunk>>,
        W: Write,
    {
        self.write_preamble(out)?;

        // The display address advances by the nominal row width, not by the
        // bytes actually read, so a short final row keeps the address grid.
        let mut display_address = self.start_address;
        for chunk in chunks {
            let chunk = chunk?;
            self.write_row(out, display_address, &chunk.bytes)?;
            display_address += self.chunk_size as u64;
        }

        writeln!(out)
    }

    fn write_preamble<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "\nHexdump for <{}>:\n\n", self.title)?;

        // Column header: indent past the address gutter, then one two-digit
        // uppercase index per column.
        write!(out, "{:11}", "")?;
        for i in 0..self.chunk_size {
            write!(out, "{:02X} ", i)?;
        }
        writeln!(out)?;

        let len = if self.show_ascii {
            16 + 4 * self.chunk_size
        } else {
            10 + 3 * self.chunk_size
        };
        let mut rule = vec![b'-'; len];
        if self.show_ascii {
            rule[13 + 3 * self.chunk_size] = b'+';
        }
        out.write_all(&rule)?;
        writeln!(out)
    }

    fn write_row<W: Write>(&self, out: &mut W, address: u64, bytes: &[u8]) -> io::Result<()> {
        // addresses wrap above 32 bits, like %08X
        write!(out, "{:08X} | ", address as u32)?;

        for b in bytes {
            write!(out, "{:02x} ", b)?;
        }
        if bytes.len() < self.chunk_size {
            write!(out, "{:width$}", "", width = 3 * (self.chunk_size - bytes.len()))?;
        }

        if self.show_ascii {
            out.write_all(b"    |   ")?;
            for &b in bytes {
                if b < 0x20 || b == 0x7F {
                    out.write_all(b".")?;
                } else {
                    // Raw byte, not re-encoded: values >= 0x80 pass through.
                    out.write_all(&[b])?;
                }
            }
        }

        writeln!(out)
    }
}
