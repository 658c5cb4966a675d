/// Emphasis toggle markers.
///
/// Each marker alternates between opening and closing its span.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static [u8; 3] = b"'''";
    pub const ITALIC: &'static [u8; 2] = b"''";
}
