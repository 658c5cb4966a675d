use super::{
    cursor::Cursor,
    kinds::{Emphasis, HorizontalRule},
};

/// One token of a line's inline content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// `'''`
    Bold,
    /// `''`
    Italic,
    /// `----`
    HorizontalRule,
    /// A run of non-delimiter characters. The first character is always taken,
    /// even if it is itself a delimiter, so a leading space is kept with the word.
    Word(&'a str),
}

/// Bytes that end a word.
pub fn is_delimiter(b: u8) -> bool {
    matches!(b, b' ' | b'\'' | b'*' | b'\r' | b'\n')
}

/// Returns the next token, or `None` at end of line. Carriage returns are skipped.
pub fn next_token<'a>(cur: &mut Cursor<'a>) -> Option<Token<'a>> {
    while cur.peek() == Some(b'\r') {
        cur.bump();
    }
    if cur.eof() {
        return None;
    }

    if cur.starts_with(Emphasis::BOLD) {
        cur.bump_n(Emphasis::BOLD.len());
        return Some(Token::Bold);
    }
    if cur.starts_with(Emphasis::ITALIC) {
        cur.bump_n(Emphasis::ITALIC.len());
        return Some(Token::Italic);
    }
    if cur.starts_with(HorizontalRule::MARKER) {
        cur.bump_n(HorizontalRule::MARKER.len());
        return Some(Token::HorizontalRule);
    }

    let start = cur.i;
    cur.bump_char();
    cur.bump_while(|b| !is_delimiter(b));
    Some(Token::Word(&cur.s[start..cur.i]))
}

/// Iterator over every token of a line.
pub struct Tokens<'a> {
    cur: Cursor<'a>,
}

impl<'a> Tokens<'a> {
    pub fn new(cur: Cursor<'a>) -> Self {
        Self { cur }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        next_token(&mut self.cur)
    }
}

/// Tokenizes a whole line from its start.
pub fn tokenize(line: &str) -> Tokens<'_> {
    Tokens::new(Cursor::new(line))
}
