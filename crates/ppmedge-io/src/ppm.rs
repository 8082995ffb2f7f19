//! PPM (binary P6) format support
//!
//! Reads and writes 8-bit-per-channel RGB images. The ASCII variant (P3),
//! grayscale and bitmap PNM types, and 16-bit channels are not supported.

use crate::header::PpmHeader;
use crate::{IoError, IoResult};
use ppmedge_core::Image;
use std::io::{BufRead, Read, Write};

/// Read a P6 image from a reader.
///
/// # Arguments
/// * `reader` - A buffered reader positioned at the `P6` magic
///
/// # Errors
///
/// - [`IoError::Format`] if the header is invalid
/// - [`IoError::TruncatedData`] if fewer than `width * height * 3` pixel
///   bytes follow the header
/// - [`IoError::Io`] if the reader fails
///
/// Bytes after the declared pixel data are left unread.
pub fn read_ppm<R: BufRead>(mut reader: R) -> IoResult<Image> {
    let header = PpmHeader::read(&mut reader)?;
    let expected = header.data_len()?;

    // The buffer grows with the bytes actually present, so a short file
    // reports truncation whatever size its header declares.
    let mut data = Vec::new();
    reader.take(expected as u64).read_to_end(&mut data)?;
    if data.len() < expected {
        return Err(IoError::TruncatedData {
            expected,
            actual: data.len(),
        });
    }

    Ok(Image::from_raw_bytes(header.width, header.height, &data)?)
}

/// Write an image as binary P6 to a writer.
///
/// The header is always `P6\n<width> <height>\n255\n`, followed by the
/// pixel records in row-major order.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the writer fails or accepts fewer bytes than
/// the full buffer.
pub fn write_ppm<W: Write>(image: &Image, mut writer: W) -> IoResult<()> {
    let header = PpmHeader::new(image.width(), image.height());
    writer.write_all(&header.to_bytes())?;
    writer.write_all(&image.to_raw_bytes()?)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppmedge_core::Pixel;
    use std::io::Cursor;

    fn gradient(w: u32, h: u32) -> Image {
        let pixels = (0..w * h)
            .map(|i| Pixel::new(i as u8, (i * 3) as u8, 255 - i as u8))
            .collect();
        Image::from_pixels(w, h, pixels).unwrap()
    }

    #[test]
    fn test_write_layout() {
        let image = Image::from_pixels(2, 1, vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)])
            .unwrap();
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        assert_eq!(out, b"P6\n2 1\n255\n\x01\x02\x03\x04\x05\x06");
    }

    #[test]
    fn test_roundtrip() {
        let image = gradient(5, 3);
        let mut out = Vec::new();
        write_ppm(&image, &mut out).unwrap();
        let back = read_ppm(Cursor::new(out)).unwrap();
        assert_eq!(back, image);
    }

    #[test]
    fn test_truncated_data() {
        let mut bytes = b"P6\n2 2\n255\n".to_vec();
        bytes.extend_from_slice(&[7u8; 11]);
        match read_ppm(Cursor::new(bytes)) {
            Err(IoError::TruncatedData { expected, actual }) => {
                assert_eq!(expected, 12);
                assert_eq!(actual, 11);
            }
            other => panic!("expected truncation error, got {:?}", other),
        }
    }

    #[test]
    fn test_truncation_reported_before_allocation() {
        let mut bytes = b"P6\n50000 40000\n255\n".to_vec();
        bytes.extend_from_slice(&[1, 2, 3]);
        match read_ppm(Cursor::new(bytes)) {
            Err(IoError::TruncatedData { expected, actual }) => {
                assert_eq!(expected, 6_000_000_000);
                assert_eq!(actual, 3);
            }
            other => panic!("expected truncation error, got {:?}", other),
        }
    }

    #[test]
    fn test_trailing_bytes_ignored() {
        let mut bytes = b"P6\n1 1\n255\n".to_vec();
        bytes.extend_from_slice(&[10, 20, 30, 99, 99]);
        let image = read_ppm(Cursor::new(bytes)).unwrap();
        assert_eq!(image.pixels(), &[Pixel::new(10, 20, 30)]);
    }

    struct ShortWriter {
        budget: usize,
    }

    impl Write for ShortWriter {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            let n = buf.len().min(self.budget);
            self.budget -= n;
            Ok(n)
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_short_write_is_error() {
        let image = gradient(4, 4);
        let result = write_ppm(&image, ShortWriter { budget: 20 });
        assert!(matches!(result, Err(IoError::Io(_))));
    }
}
