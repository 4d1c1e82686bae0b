/// Image inline type: `![alt](url)`.
pub struct Image;

impl Image {
    pub const OPEN: &'static [u8; 2] = b"![";
    pub const ALT_CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
}
