use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use rayon::prelude::*;

use crate::error::Result;
use crate::literal::extract_literals;

/// Word-boundary-like prefix applied to all regexes.
/// Matches: start of string, or a non-alphanumeric boundary.
const BOUNDARY_PREFIX: &str = r"(?:^|[^A-Z0-9_\-]|[^A-Z0-9\-]_)";

/// Literals shorter than this make the prefilter too noisy to be worth it.
const MIN_LITERAL_LEN: usize = 3;

/// Build the full boundary-prefixed, case-insensitive regex string.
pub(crate) fn full_pattern(pattern: &str) -> String {
    format!("(?i){}(?:{})", BOUNDARY_PREFIX, pattern)
}

// ---------------------------------------------------------------------------
// Captures — unified enum over regex::Captures and fancy_regex::Captures
// ---------------------------------------------------------------------------

/// Lightweight wrapper so callers (substitute, capture_or_empty) don't need
/// to know which regex engine produced the match.
pub(crate) enum Captures<'a> {
    Standard(regex::Captures<'a>),
    Fancy(fancy_regex::Captures<'a>),
}

impl<'a> Captures<'a> {
    /// Get the matched text for capture group `i`, or `None` if the group
    /// didn't participate in the match.
    pub fn get_str(&self, i: usize) -> Option<&'a str> {
        match self {
            Captures::Standard(c) => c.get(i).map(|m| m.as_str()),
            Captures::Fancy(c) => c.get(i).map(|m| m.as_str()),
        }
    }
}

/// A compiled pattern: the `regex` crate when it accepts the pattern,
/// fancy_regex for the rest (look-around and similar PCRE features).
pub(crate) enum Matcher {
    Standard(regex::Regex),
    Fancy(fancy_regex::Regex),
}

impl Matcher {
    pub fn compile(full: &str) -> Result<Self> {
        match regex::Regex::new(full) {
            Ok(re) => Ok(Matcher::Standard(re)),
            Err(_) => Ok(Matcher::Fancy(fancy_regex::Regex::new(full)?)),
        }
    }

    pub fn captures<'t>(&self, ua: &'t str) -> Option<Captures<'t>> {
        match self {
            Matcher::Standard(re) => re.captures(ua).map(Captures::Standard),
            // A backtrack-limit error is treated as no match.
            Matcher::Fancy(re) => re.captures(ua).ok().flatten().map(Captures::Fancy),
        }
    }

    pub fn is_fancy(&self) -> bool {
        matches!(self, Matcher::Fancy(_))
    }
}

/// Result of a successful match.
pub(crate) struct MatchResult<'a, T> {
    pub data: &'a T,
    pub captures: Captures<'a>,
}

// ---------------------------------------------------------------------------
// CompiledParser — flat list matching (browsers, engines, OS)
// ---------------------------------------------------------------------------

/// Core matching engine: Aho-Corasick literal prefilter + ordered regex list.
///
/// `T` is the associated data for each entry (e.g. browser name, OS name).
pub(crate) struct CompiledParser<T> {
    matchers: Vec<Matcher>,
    /// Entry data indexed by entry index.
    data: Vec<T>,
    /// Prefix literals of all prefilterable entries; `None` if there are none.
    prefilter: Option<AhoCorasick>,
    /// Maps Aho-Corasick pattern id → entry index.
    literal_to_entry: Vec<usize>,
    /// Entries without usable literals, tried on every input.
    always: Vec<bool>,
}

impl<T> CompiledParser<T> {
    /// Build a CompiledParser from an iterator of (regex_pattern, data) pairs.
    pub fn build(items: impl IntoIterator<Item = (String, T)>) -> Result<Self>
    where
        T: Send,
    {
        let (patterns, data): (Vec<String>, Vec<T>) = items.into_iter().unzip();

        let matchers: Vec<Matcher> = patterns
            .par_iter()
            .map(|p| Matcher::compile(&full_pattern(p)))
            .collect::<Result<Vec<_>>>()?;

        let literals: Vec<Vec<String>> = patterns
            .par_iter()
            .map(|p| extract_literals(p, MIN_LITERAL_LEN))
            .collect();

        let always: Vec<bool> = literals.iter().map(Vec::is_empty).collect();

        let mut literal_to_entry: Vec<usize> = Vec::new();
        let mut ac_patterns: Vec<String> = Vec::new();
        for (idx, lits) in literals.into_iter().enumerate() {
            for lit in lits {
                literal_to_entry.push(idx);
                ac_patterns.push(lit);
            }
        }

        let prefilter = if ac_patterns.is_empty() {
            None
        } else {
            Some(
                AhoCorasickBuilder::new()
                    .ascii_case_insensitive(true)
                    .build(&ac_patterns)?,
            )
        };

        tracing::debug!(
            entries = matchers.len(),
            fancy = matchers.iter().filter(|m| m.is_fancy()).count(),
            always = always.iter().filter(|a| **a).count(),
            literals = ac_patterns.len(),
            "compiled parser"
        );

        Ok(Self {
            matchers,
            data,
            prefilter,
            literal_to_entry,
            always,
        })
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Find the first matching entry (preserving original order).
    pub fn match_first<'a>(&'a self, ua: &'a str) -> Option<MatchResult<'a, T>> {
        let mut candidates = self.always.clone();
        if let Some(ac) = &self.prefilter {
            for m in ac.find_overlapping_iter(ua) {
                candidates[self.literal_to_entry[m.pattern().as_usize()]] = true;
            }
        }

        tracing::trace!(
            candidates = candidates.iter().filter(|c| **c).count(),
            "prefiltered entries"
        );

        candidates
            .iter()
            .enumerate()
            .filter(|(_, candidate)| **candidate)
            .find_map(|(idx, _)| {
                self.matchers[idx]
                    .captures(ua)
                    .map(|captures| MatchResult {
                        data: &self.data[idx],
                        captures,
                    })
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser(entries: &[(&str, &'static str)]) -> CompiledParser<&'static str> {
        CompiledParser::build(entries.iter().map(|(p, d)| (p.to_string(), *d))).unwrap()
    }

    #[test]
    fn first_match_wins() {
        let p = parser(&[(r"Electron/(\d+)", "electron"), (r"Chrome/(\d+)", "chrome")]);
        let m = p.match_first("Chrome/114 Electron/25").unwrap();
        assert_eq!(*m.data, "electron");
        assert_eq!(m.captures.get_str(1), Some("25"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let p = parser(&[(r"Firefox/(\d+)", "firefox")]);
        let m = p.match_first("mozilla firefox/115").unwrap();
        assert_eq!(m.captures.get_str(1), Some("115"));
    }

    #[test]
    fn boundary_prefix_rejects_embedded_tokens() {
        let p = parser(&[(r"Chrome/(\d+)", "chrome")]);
        assert!(p.match_first("HeadlessChrome/115").is_none());
        assert!(p.match_first("(Chrome/115)").is_some());
    }

    #[test]
    fn fancy_patterns_keep_order() {
        let p = parser(&[
            (r"Chrome/(?!2[0-7]\.)(\d+)", "blink"),
            (r"WebKit/(\d+)", "webkit"),
        ]);
        assert_eq!(*p.match_first("Chrome/25.0 WebKit/537").unwrap().data, "webkit");
        assert_eq!(*p.match_first("Chrome/115.0 WebKit/537").unwrap().data, "blink");
    }

    #[test]
    fn pattern_rejected_by_both_engines_is_an_error() {
        let result = CompiledParser::build(vec![(r"Chrome/(\d+".to_string(), ())]);
        assert!(matches!(result, Err(crate::Error::FancyRegex(_))));
    }

    #[test]
    fn no_match() {
        let p = parser(&[(r"Firefox/(\d+)", "firefox")]);
        assert!(p.match_first("curl/8.0").is_none());
        assert_eq!(p.len(), 1);
    }
}
