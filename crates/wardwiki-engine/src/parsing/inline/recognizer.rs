use super::kinds::{BareUrl, WikiWord};

/// A piece of a recognized word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Piece<'a> {
    Text(&'a str),
    Link { href: String, label: &'a str },
}

/// Classifies a plain word as WikiWord link, bare URL link, or literal text.
///
/// A WikiWord anywhere in the word wins; text around it is kept as literal
/// prefix/suffix. Otherwise the word (less any leading whitespace carried over
/// from the scanner) becomes a link if it is an `http`/`https` URL.
/// Empty pieces are never returned.
pub fn recognize(word: &str) -> Vec<Piece<'_>> {
    let mut out = vec![];

    if let Some(m) = WikiWord::find(word) {
        push_text(&mut out, &word[..m.start]);
        out.push(Piece::Link {
            href: WikiWord::href(m.name),
            label: m.name,
        });
        push_text(&mut out, &word[m.end..]);
        return out;
    }

    let candidate = word.trim_start();
    if BareUrl::matches(candidate) {
        push_text(&mut out, &word[..word.len() - candidate.len()]);
        out.push(Piece::Link {
            href: candidate.to_string(),
            label: candidate,
        });
        return out;
    }

    push_text(&mut out, word);
    out
}

fn push_text<'a>(out: &mut Vec<Piece<'a>>, s: &'a str) {
    if !s.is_empty() {
        out.push(Piece::Text(s));
    }
}
