/// Horizontal rule marker. Only the first four dashes are consumed; any further
/// dashes start a new token.
pub struct HorizontalRule;

impl HorizontalRule {
    pub const MARKER: &'static [u8; 4] = b"----";
}
