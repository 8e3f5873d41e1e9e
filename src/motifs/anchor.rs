use super::{ScanError, Span};
use regex::Regex;

/// Start and end anchors delimiting a motif. Both are regular expression
/// fragments, usually plain nucleotides with an occasional character class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorPair {
    pub start: &'static str,
    pub end: &'static str,
}

impl AnchorPair {
    pub const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    pub fn pattern(&self) -> String {
        format!("{}(.*?){}", self.start, self.end)
    }

    pub fn compile(&self) -> Result<AnchorMatcher, ScanError> {
        let pattern = self.pattern();
        let regex =
            Regex::new(&pattern).map_err(|e| ScanError::InvalidPattern(format!("{pattern}: {e}")))?;
        Ok(AnchorMatcher { pair: *self, regex })
    }
}

#[derive(Debug, Clone)]
pub struct AnchorMatcher {
    pair: AnchorPair,
    regex: Regex,
}

impl AnchorMatcher {
    pub fn pair(&self) -> &AnchorPair {
        &self.pair
    }

    /// Shortest span that opens with the first start anchor and closes with
    /// the nearest end anchor after it. Positions are relative to `seq`.
    pub fn find(&self, seq: &str) -> Option<Span> {
        self.regex.find(seq).map(|m| Span::new(m.start(), m.end()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_is_lazy() {
        let matcher = AnchorPair::new("GACC[CTG]", "AGGTC").compile().unwrap();
        let seq = "TTGACCCAAAGGTCAAAGGTC";
        assert_eq!(matcher.find(seq), Some(Span::new(2, 14)));
    }

    #[test]
    fn first_start_anchor_wins() {
        let matcher = AnchorPair::new("ACT", "AAA").compile().unwrap();
        let seq = "ACTGGGGACTAAA";
        assert_eq!(matcher.find(seq), Some(Span::new(0, 13)));
    }

    #[test]
    fn anchors_may_be_adjacent() {
        let matcher = AnchorPair::new("AGCA", "TGCT").compile().unwrap();
        assert_eq!(matcher.find("CCAGCATGCTCC"), Some(Span::new(2, 10)));
    }

    #[test]
    fn missing_end_anchor_is_no_match() {
        let matcher = AnchorPair::new("GGGG", "CCTCCA").compile().unwrap();
        assert_eq!(matcher.find("GGGGAAAACCTCC"), None);
    }

    #[test]
    fn matching_is_case_sensitive() {
        let matcher = AnchorPair::new("GACCA", "[TA]GGTC").compile().unwrap();
        assert_eq!(matcher.find("gaccatttggtc"), None);
        assert_eq!(matcher.find("GACCATTTGGTC"), Some(Span::new(0, 12)));
    }

    #[test]
    fn invalid_pattern_is_reported() {
        assert!(matches!(
            AnchorPair::new("GA[CC", "T").compile(),
            Err(ScanError::InvalidPattern(_))
        ));
    }
}
