//! Plain-text bodies
//!
//! Emails without an HTML part skip the converter. Their text is cut at the first
//! configured delimiter line (such as `--- Reply above this line ---`), which may be
//! prefixed by quoting (`>` and spaces), and then trimmed.

use regex::Regex;

/// Truncate `body` at the first line starting with one of `delimiters`.
///
/// Delimiters are literal strings; blank entries are ignored. The delimiter must be
/// followed by optional whitespace and a line break.
pub fn cleanup_plain_body<S: AsRef<str>>(body: &str, delimiters: &[S]) -> String {
    let alternatives: Vec<String> = delimiters
        .iter()
        .map(|delimiter| delimiter.as_ref())
        .filter(|delimiter: &&str| !delimiter.trim().is_empty())
        .map(regex::escape)
        .collect();

    if alternatives.is_empty() {
        return body.trim().to_string();
    }

    let pattern = format!(r"(?ms)^[> ]*(?:{})\s*[\r\n].*", alternatives.join("|"));
    match Regex::new(&pattern) {
        Ok(cut) => cut.replace(body, "").trim().to_string(),
        Err(err) => {
            tracing::warn!(%err, "ignoring body delimiters");
            body.trim().to_string()
        }
    }
}
