use url::Url;

/// A whole word that parses as an absolute `http` or `https` URL.
pub struct BareUrl;

impl BareUrl {
    pub const SCHEMES: [&'static str; 2] = ["http", "https"];

    /// Returns true if `word` is a URL with an allowed scheme. Words that fail to
    /// parse are simply not URLs.
    pub fn matches(word: &str) -> bool {
        match Url::parse(word) {
            Ok(url) => Self::SCHEMES.contains(&url.scheme()),
            Err(_) => false,
        }
    }
}
