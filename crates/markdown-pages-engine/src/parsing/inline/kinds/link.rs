/// Link inline type: `[text](url)`.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// A `[` directly after this byte starts an image, not a link.
    pub const IMAGE_MARKER: u8 = b'!';
}
