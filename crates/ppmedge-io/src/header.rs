//! P6 header parsing and formatting
//!
//! The header is the ASCII magic `P6`, then width, height and max channel
//! value as decimal integers separated by whitespace. A `#` where a token
//! may start opens a comment running to the end of its line. Exactly one
//! whitespace byte follows the max value; pixel data begins right after it.

use crate::{IoError, IoResult};
use ppmedge_core::{CHANNELS, MAX_CHANNEL_VALUE};
use std::io::{BufRead, ErrorKind};

/// Magic token identifying a binary RGB PPM file.
pub const MAGIC: &[u8; 2] = b"P6";

/// Upper bound on the number of header bytes scanned before giving up.
pub const MAX_HEADER_BYTES: usize = 64 * 1024;

/// Parsed P6 header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PpmHeader {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Max channel value (always 255 once validated)
    pub max_value: u32,
}

impl PpmHeader {
    /// Header for an 8-bit-per-channel image of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        PpmHeader {
            width,
            height,
            max_value: MAX_CHANNEL_VALUE,
        }
    }

    /// Number of pixel-data bytes that follow this header.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::Format`] if the size overflows `usize`.
    pub fn data_len(&self) -> IoResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                IoError::format(format!(
                    "image size {}x{} is too large",
                    self.width, self.height
                ))
            })
    }

    /// Serialize as `P6\n<width> <height>\n255\n`.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!("P6\n{} {}\n{}\n", self.width, self.height, self.max_value).into_bytes()
    }

    /// Read and validate a header, leaving `reader` at the first pixel byte.
    ///
    /// # Errors
    ///
    /// - [`IoError::Format`] for a bad magic, malformed or incomplete header,
    ///   zero dimensions, or a max value other than 255
    /// - [`IoError::Io`] if the underlying reader fails
    pub fn read<R: BufRead>(reader: &mut R) -> IoResult<Self> {
        let mut scanner = HeaderScanner::new(reader);

        let magic = [scanner.next_byte()?, scanner.next_byte()?];
        if &magic != MAGIC {
            return Err(IoError::format(format!(
                "bad magic {:?}, expected \"P6\"",
                String::from_utf8_lossy(&magic)
            )));
        }
        if !scanner.peek()?.is_ascii_whitespace() {
            return Err(IoError::format("magic is not followed by whitespace"));
        }

        let width = scanner.read_uint("width")?;
        let height = scanner.read_uint("height")?;
        let max_value = scanner.read_uint("max channel value")?;

        let end = scanner.next_byte()?;
        if !end.is_ascii_whitespace() {
            return Err(IoError::format("max channel value is not followed by whitespace"));
        }

        if width == 0 || height == 0 {
            return Err(IoError::format(format!(
                "invalid image dimensions {}x{}",
                width, height
            )));
        }
        if max_value != MAX_CHANNEL_VALUE {
            return Err(IoError::format(format!(
                "unsupported max channel value {}, only {} is supported",
                max_value, MAX_CHANNEL_VALUE
            )));
        }

        let header = PpmHeader {
            width,
            height,
            max_value,
        };
        header.data_len()?;
        Ok(header)
    }
}

/// Byte-at-a-time reader over the header block.
struct HeaderScanner<'a, R> {
    reader: &'a mut R,
    consumed: usize,
}

impl<'a, R: BufRead> HeaderScanner<'a, R> {
    fn new(reader: &'a mut R) -> Self {
        HeaderScanner {
            reader,
            consumed: 0,
        }
    }

    fn peek(&mut self) -> IoResult<u8> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    return buf
                        .first()
                        .copied()
                        .ok_or_else(|| IoError::format("unexpected end of file in header"));
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    fn next_byte(&mut self) -> IoResult<u8> {
        let b = self.peek()?;
        if self.consumed >= MAX_HEADER_BYTES {
            return Err(IoError::format(format!(
                "header exceeds {} bytes",
                MAX_HEADER_BYTES
            )));
        }
        self.reader.consume(1);
        self.consumed += 1;
        Ok(b)
    }

    /// Skip whitespace and comments up to the start of the next token.
    fn skip_separators(&mut self) -> IoResult<()> {
        loop {
            let b = self.peek()?;
            if b.is_ascii_whitespace() {
                self.next_byte()?;
            } else if b == b'#' {
                while self.next_byte()? != b'\n' {}
            } else {
                return Ok(());
            }
        }
    }

    fn read_uint(&mut self, field: &str) -> IoResult<u32> {
        self.skip_separators()?;
        let mut value: u32 = 0;
        let mut digits = 0usize;
        while self.peek()?.is_ascii_digit() {
            let d = self.next_byte()? - b'0';
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u32::from(d)))
                .ok_or_else(|| IoError::format(format!("{} is too large", field)))?;
            digits += 1;
        }
        if digits == 0 {
            return Err(IoError::format(format!("expected {} in header", field)));
        }
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    fn parse(bytes: &[u8]) -> IoResult<(PpmHeader, Vec<u8>)> {
        let mut cursor = Cursor::new(bytes);
        let header = PpmHeader::read(&mut cursor)?;
        let mut rest = Vec::new();
        cursor.read_to_end(&mut rest).unwrap();
        Ok((header, rest))
    }

    #[test]
    fn test_plain_header() {
        let (h, rest) = parse(b"P6\n3 2\n255\nXYZ").unwrap();
        assert_eq!(h, PpmHeader::new(3, 2));
        assert_eq!(rest, b"XYZ");
    }

    #[test]
    fn test_comments_interleaved() {
        let bytes = b"P6\n# first\n## second\n3 2\n# between\n255\n\x01";
        let (h, rest) = parse(bytes).unwrap();
        assert_eq!((h.width, h.height), (3, 2));
        assert_eq!(rest, b"\x01");
    }

    #[test]
    fn test_single_line_header() {
        let (h, rest) = parse(b"P6 640 480 255\n\x00\x01").unwrap();
        assert_eq!((h.width, h.height), (640, 480));
        assert_eq!(rest, b"\x00\x01");
    }

    #[test]
    fn test_single_whitespace_terminates_header() {
        // A newline byte right after the terminator is pixel data, not header
        let (_, rest) = parse(b"P6\n1 1\n255\n\n\n\n").unwrap();
        assert_eq!(rest, b"\n\n\n");
    }

    #[test]
    fn test_bad_magic() {
        assert!(matches!(parse(b"P3\n1 1\n255\n"), Err(IoError::Format(_))));
        assert!(matches!(parse(b"P"), Err(IoError::Format(_))));
        assert!(matches!(parse(b"P61 1\n255\n"), Err(IoError::Format(_))));
    }

    #[test]
    fn test_max_value_must_be_255() {
        assert!(matches!(
            parse(b"P6\n1 1\n65535\n\0\0\0\0\0\0"),
            Err(IoError::Format(_))
        ));
        assert!(matches!(parse(b"P6\n1 1\n100\n\0\0\0"), Err(IoError::Format(_))));
    }

    #[test]
    fn test_malformed_header() {
        assert!(matches!(parse(b"P6\nabc 2\n255\n"), Err(IoError::Format(_))));
        assert!(matches!(parse(b"P6\n3 2\n"), Err(IoError::Format(_))));
        assert!(matches!(parse(b"P6\n0 2\n255\n"), Err(IoError::Format(_))));
        assert!(matches!(
            parse(b"P6\n99999999999 2\n255\n"),
            Err(IoError::Format(_))
        ));
    }

    #[test]
    fn test_non_size_line_is_not_skipped() {
        // Tokens are read in order; a stray text line is not passed over
        // in search of a later size line
        assert!(matches!(
            parse(b"P6\nsize follows\n3 2\n255\n"),
            Err(IoError::Format(_))
        ));
        // A third integer on the size line is taken as the max value
        assert!(matches!(
            parse(b"P6\n3 2 7\n255\n"),
            Err(IoError::Format(_))
        ));
    }

    #[test]
    fn test_to_bytes() {
        assert_eq!(PpmHeader::new(7, 5).to_bytes(), b"P6\n7 5\n255\n");
    }
}
