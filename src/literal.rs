use regex_syntax::{hir::literal::Extractor, parse};

/// Extract prefix literals from a regex pattern for use as Aho-Corasick
/// pre-filter candidates.
///
/// Every match of `pattern` starts with one of the returned literals, so an
/// input containing none of them can skip the entry. Returns an empty vec when
/// no complete set of literals of at least `min_len` bytes exists; the entry
/// must then be tried on every input. Patterns `regex_syntax` cannot parse
/// (look-around and other PCRE-isms) also yield an empty vec.
pub(crate) fn extract_literals(pattern: &str, min_len: usize) -> Vec<String> {
    let hir = match parse(pattern) {
        Ok(h) => h,
        Err(_) => return Vec::new(),
    };

    let mut extractor = Extractor::new();
    extractor.kind(regex_syntax::hir::literal::ExtractKind::Prefix);

    let seq = extractor.extract(&hir);
    let Some(literals) = seq.literals() else {
        return Vec::new();
    };

    let mut out = Vec::with_capacity(literals.len());
    for lit in literals {
        // A single short or non-UTF-8 literal breaks the "one of these must
        // occur" guarantee for the whole set.
        match std::str::from_utf8(lit.as_bytes()) {
            Ok(s) if s.len() >= min_len => out.push(s.to_lowercase()),
            _ => return Vec::new(),
        }
    }
    out.sort();
    out.dedup();
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_literal() {
        let lits = extract_literals(r"Firefox/(\d+[\.\d]*)", 3);
        assert_eq!(lits, vec!["firefox/"]);
    }

    #[test]
    fn alternation() {
        let lits = extract_literals("Electron|Chrome", 3);
        assert!(lits.contains(&"electron".to_string()));
        assert!(lits.contains(&"chrome".to_string()));
    }

    #[test]
    fn too_short_returns_empty() {
        let lits = extract_literals(r"\d+\.\d+", 3);
        assert!(lits.is_empty());
    }

    #[test]
    fn one_short_branch_disables_prefilter() {
        let lits = extract_literals("Opera|rv", 3);
        assert!(lits.is_empty());
    }

    #[test]
    fn lookaround_is_always_candidate() {
        let lits = extract_literals(r"Chrome/(?!2[0-7]\.)(\d+)", 3);
        assert!(lits.is_empty());
    }
}
