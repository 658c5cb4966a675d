/// Bulleted list marker. A run of `n` markers at line start is a depth-`n` item.
pub struct ListMarker;

impl ListMarker {
    pub const MARKER: u8 = b'*';

    /// Splits a leading marker run off `s`, returning `(depth, rest)`.
    pub fn strip_prefix(s: &str) -> Option<(usize, &str)> {
        let depth = s.bytes().take_while(|&b| b == Self::MARKER).count();
        if depth == 0 {
            return None;
        }
        Some((depth, &s[depth..]))
    }
}
