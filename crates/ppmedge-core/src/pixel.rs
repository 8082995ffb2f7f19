//! RGB pixel type and channel helpers
//!
//! A [`Pixel`] is three unsigned 8-bit channels in red, green, blue order,
//! with no alpha. The layout matches one P6 pixel record byte for byte.

/// Number of channels stored per pixel.
pub const CHANNELS: usize = 3;

/// Largest value a channel can hold.
pub const MAX_CHANNEL_VALUE: u32 = 255;

/// One RGB pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(C)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Pixel {
    /// All channels zero.
    pub const BLACK: Pixel = Pixel { r: 0, g: 0, b: 0 };

    /// All channels at [`MAX_CHANNEL_VALUE`].
    pub const WHITE: Pixel = Pixel {
        r: 255,
        g: 255,
        b: 255,
    };

    /// Create a pixel from its three channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    /// Create a gray pixel with every channel set to `v`.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Pixel { r: v, g: v, b: v }
    }

    /// Build a pixel from a 3-byte `R G B` record.
    #[inline]
    pub fn from_bytes(bytes: [u8; CHANNELS]) -> Self {
        let [r, g, b] = bytes;
        Pixel { r, g, b }
    }

    /// The pixel as a 3-byte `R G B` record.
    #[inline]
    pub fn to_bytes(self) -> [u8; CHANNELS] {
        [self.r, self.g, self.b]
    }

    /// Build a pixel from signed per-channel sums, clamping each to `[0, 255]`.
    #[inline]
    pub fn from_clamped(r: i32, g: i32, b: i32) -> Self {
        Pixel {
            r: clamp_channel(r),
            g: clamp_channel(g),
            b: clamp_channel(b),
        }
    }
}

impl From<(u8, u8, u8)> for Pixel {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Pixel { r, g, b }
    }
}

/// Clamp a signed accumulator to a channel value.
///
/// Values below 0 become 0, values above 255 become 255.
#[inline]
pub fn clamp_channel(value: i32) -> u8 {
    value.clamp(0, MAX_CHANNEL_VALUE as i32) as u8
}
