//! ppmedge-io - Binary P6 image codec
//!
//! Bit-exact conversion between binary P6 files and [`Image`]:
//!
//! - [`read_image`] / [`write_image`] - one file per call, no shared state
//! - [`read_image_mem`] / [`write_image_mem`] - in-memory variants
//! - [`read_ppm`] / [`write_ppm`] - over arbitrary readers and writers
//!
//! Writes to a path go through a temporary file in the destination directory
//! that is renamed into place only once every byte has been written, so a
//! failed write never leaves a truncated image under the requested name.

mod error;
pub mod header;
pub mod ppm;

pub use error::{IoError, IoResult};
pub use header::PpmHeader;
pub use ppm::{read_ppm, write_ppm};

use log::debug;
use ppmedge_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor};
use std::path::Path;

/// File extension used for encoded images.
pub const PPM_EXTENSION: &str = "ppm";

/// Decode the P6 file at `path`.
///
/// # Errors
///
/// - [`IoError::Io`] if the file cannot be opened or read
/// - [`IoError::Format`] / [`IoError::TruncatedData`] for malformed content
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Image> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let image = read_ppm(BufReader::new(file))?;
    debug!(
        "decoded {}x{} image from {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(image)
}

/// Encode `image` as P6 to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`IoError::Io`] if the file cannot be created, fully written,
/// or moved into place. On error no file is left at `path` by this call.
pub fn write_image<P: AsRef<Path>>(image: &Image, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let tmp = tempfile::NamedTempFile::new_in(dir)?;
    let mut writer = BufWriter::new(tmp);
    write_ppm(image, &mut writer)?;
    let tmp = writer.into_inner().map_err(|e| e.into_error())?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;

    debug!(
        "encoded {}x{} image to {}",
        image.width(),
        image.height(),
        path.display()
    );
    Ok(())
}

/// Decode a P6 image held in memory.
pub fn read_image_mem(data: &[u8]) -> IoResult<Image> {
    read_ppm(Cursor::new(data))
}

/// Encode an image as P6 into a new byte buffer.
pub fn write_image_mem(image: &Image) -> IoResult<Vec<u8>> {
    let mut out = Vec::with_capacity(image.raw_len() + 32);
    write_ppm(image, &mut out)?;
    Ok(out)
}
