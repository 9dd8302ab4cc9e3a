use regex::Regex;
use std::sync::Arc;
use crate::Result;

/// Characters that cannot appear in a filename on Windows.
const INVALID_FILENAME_CHARS: &str = r#"[<>:"/\\|?*]"#;

/// Cleans filenames and track titles.
///
/// Filenames lose smart double quotes and any filesystem-invalid character,
/// while titles keep their quotes as plain ASCII. Both forms get dash and
/// whitespace normalization, and both functions are idempotent.
#[derive(Clone)]
pub struct NameNormalizer {
    invalid_chars: Arc<Regex>,
    whitespace: Arc<Regex>,
}

impl NameNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            invalid_chars: Arc::new(Regex::new(INVALID_FILENAME_CHARS)?),
            whitespace: Arc::new(Regex::new(r"\s+")?),
        })
    }

    /// Cleaned on-disk form of a media filename.
    pub fn clean_filename(&self, filename: &str) -> String {
        let cleaned = filename
            .replace(|c: char| c == '\u{201C}' || c == '\u{201D}', "")
            .replace(|c: char| c == '\u{2018}' || c == '\u{2019}', "'")
            .replace(|c: char| c == '\u{2013}' || c == '\u{2014}', "-");

        let cleaned = self.invalid_chars.replace_all(&cleaned, "");
        self.collapse_whitespace(&cleaned)
    }

    /// Cleaned form of a free-text title. Slashes and colons survive.
    pub fn clean_title(&self, title: &str) -> String {
        let cleaned = title
            .replace(|c: char| c == '\u{201C}' || c == '\u{201D}', "\"")
            .replace(|c: char| c == '\u{2018}' || c == '\u{2019}', "'")
            .replace(|c: char| c == '\u{2013}' || c == '\u{2014}', "-");

        self.collapse_whitespace(&cleaned)
    }

    fn collapse_whitespace(&self, text: &str) -> String {
        self.whitespace.replace_all(text, " ").trim().to_string()
    }
}
