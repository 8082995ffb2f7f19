//! Output file naming
//!
//! The i-th input (1-based, in the order given) is written as
//! `<prefix><i>.<extension>`, e.g. `laplacian3.ppm` for the third input.

use ppmedge_io::PPM_EXTENSION;

/// Default output name prefix.
pub const OUTPUT_PREFIX: &str = "laplacian";

/// Output file name for the input at 1-based position `index`.
pub fn output_file_name(prefix: &str, index: usize) -> String {
    format!("{}{}.{}", prefix, index, PPM_EXTENSION)
}
