//! Wildcard filename filters.
//!
//! A filter set is parsed from a space-separated pattern string the way the
//! extension input presents it: `*.tif *.jpg`. `*` matches any run of
//! characters, `?` a single character; everything else is literal. Matching
//! covers the whole filename and is case-insensitive. An empty input, or the
//! lone pattern `*`, matches every file.

use regex::{Regex, RegexBuilder};

/// Ordered set of wildcard patterns. Replaced wholesale on every filter edit.
#[derive(Clone)]
pub struct FilterSet {
    patterns: Vec<Regex>,
}

impl FilterSet {
    /// Parses a space-separated wildcard string into a filter set.
    ///
    /// Pattern syntax is not validated; every non-empty token becomes a
    /// pattern. No tokens at all means "match everything".
    pub fn parse(input: &str) -> Self {
        let patterns = input
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(translate)
            .collect();
        Self { patterns }
    }

    /// Returns true if the filename matches at least one pattern.
    pub fn matches(&self, filename: &str) -> bool {
        self.patterns.is_empty() || self.patterns.iter().any(|re| re.is_match(filename))
    }
}

/// Translates one wildcard pattern into an anchored case-insensitive regex.
fn translate(pattern: &str) -> Regex {
    let mut expression = String::with_capacity(pattern.len() + 8);
    expression.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => expression.push_str(".*"),
            '?' => expression.push('.'),
            ch => expression.push_str(&regex::escape(&ch.to_string())),
        }
    }
    expression.push('$');
    RegexBuilder::new(&expression)
        .case_insensitive(true)
        .build()
        .expect("escaped wildcard pattern is a valid regex")
}
