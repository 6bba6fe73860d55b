//! URL detection in message bodies.

use std::sync::LazyLock;

use regex::Regex;
use url::Url;

/// Top-level domains accepted for links written without a scheme or `www.`.
const BARE_TLDS: &str = "com|org|net|edu|gov|io|co|in|uk|us|de|fr|ru|me|ly|gl|gg|tv|app|dev|ai|info|biz|xyz";

static CANDIDATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"(?i)\b(?:(?:https?|ftp)://[^\s<>]+|www\.[^\s<>]+|(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:{BARE_TLDS})\b(?:/[^\s<>]*)?)"
    );
    Regex::new(&pattern).expect("URL candidate pattern is valid")
});

/// Characters stripped from the end of a candidate, e.g. `see x.com.`
const TRAILING: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}', '\'', '"'];

/// Finds well-formed URLs in free text.
///
/// Candidates are `scheme://...` links (http, https, ftp), `www.` links and
/// bare `domain.tld/path` links for a fixed list of common TLDs. A candidate
/// directly preceded or followed by `@` is part of an e-mail address and
/// ignored. Each
/// candidate must parse as a URL with a dotted host.
///
/// # Example
///
/// ```
/// use chatstat::stats::UrlExtractor;
///
/// let urls = UrlExtractor::new();
/// assert_eq!(urls.find_urls("see https://example.com/a, ok"), vec!["https://example.com/a"]);
/// assert_eq!(urls.count("mail bob@example.com"), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlExtractor;

impl UrlExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Returns the URLs found in `text`, in order of appearance.
    pub fn find_urls<'a>(&self, text: &'a str) -> Vec<&'a str> {
        CANDIDATE_RE
            .find_iter(text)
            .filter(|m| !text[..m.start()].ends_with('@') && !text[m.end()..].starts_with('@'))
            .map(|m| m.as_str().trim_end_matches(TRAILING))
            .filter(|candidate| is_well_formed(candidate))
            .collect()
    }

    /// Returns the number of URLs in `text`.
    pub fn count(&self, text: &str) -> usize {
        self.find_urls(text).len()
    }
}

fn is_well_formed(candidate: &str) -> bool {
    let parsed = if candidate.contains("://") {
        Url::parse(candidate)
    } else {
        Url::parse(&format!("http://{candidate}"))
    };

    parsed
        .ok()
        .and_then(|url| url.host_str().map(|host| host.contains('.')))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_urls() {
        let urls = UrlExtractor::new();
        assert_eq!(urls.find_urls("check http://x.co now"), vec!["http://x.co"]);
        assert_eq!(
            urls.find_urls("a https://example.com/path?q=1 b ftp://files.example.org"),
            vec!["https://example.com/path?q=1", "ftp://files.example.org"]
        );
    }

    #[test]
    fn test_www_and_bare_domains() {
        let urls = UrlExtractor::new();
        assert_eq!(urls.find_urls("go to www.rust-lang.org!"), vec!["www.rust-lang.org"]);
        assert_eq!(urls.find_urls("try example.com/docs."), vec!["example.com/docs"]);
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        let urls = UrlExtractor::new();
        assert_eq!(urls.find_urls("(see https://a.io/x)."), vec!["https://a.io/x"]);
    }

    #[test]
    fn test_email_domain_ignored() {
        assert_eq!(UrlExtractor::new().count("write to bob@example.com"), 0);
    }

    #[test]
    fn test_email_local_part_ignored() {
        let urls = UrlExtractor::new();
        assert!(urls.find_urls("mail alice.in@x.com today").is_empty());
        assert_eq!(urls.find_urls("alice.in@x.com or x.com"), vec!["x.com"]);
    }

    #[test]
    fn test_not_urls() {
        let urls = UrlExtractor::new();
        assert_eq!(urls.count("e.g. this is fine"), 0);
        assert_eq!(urls.count("version 1.5 released"), 0);
        assert_eq!(urls.count("http://localhost:8080"), 0);
        assert_eq!(urls.count("<Media omitted>"), 0);
    }

    #[test]
    fn test_multiple_urls() {
        let text = "http://a.com http://b.com and www.c.org";
        assert_eq!(UrlExtractor::new().count(text), 3);
    }
}
