use std::{collections::BTreeMap, fmt, str::FromStr};

/// Half-open interval in ITS coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Named regions of the ITS. Variants are declared in the order in which
/// they are laid out along the spacer, so the derived `Ord` is discovery order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MotifName {
    Leader,
    D1D1,
    D2D3,
    TRna1,
    TRna2,
    BoxB,
    BoxA,
    D4,
}

impl MotifName {
    pub const ALL: [MotifName; 8] = [
        MotifName::Leader,
        MotifName::D1D1,
        MotifName::D2D3,
        MotifName::TRna1,
        MotifName::TRna2,
        MotifName::BoxB,
        MotifName::BoxA,
        MotifName::D4,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MotifName::Leader => "leader",
            MotifName::D1D1 => "d1d1",
            MotifName::D2D3 => "d2d3",
            MotifName::TRna1 => "tRNA1",
            MotifName::TRna2 => "tRNA2",
            MotifName::BoxB => "BoxB",
            MotifName::BoxA => "BoxA",
            MotifName::D4 => "D4",
        }
    }
}

impl fmt::Display for MotifName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MotifName {
    type Err = String;
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        MotifName::ALL
            .into_iter()
            .find(|motif| motif.as_str() == name)
            .ok_or_else(|| format!("Unknown motif name: {}", name))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotifCall {
    Found(Span),
    NotFound,
}

impl MotifCall {
    pub fn span(&self) -> Option<Span> {
        match self {
            MotifCall::Found(span) => Some(*span),
            MotifCall::NotFound => None,
        }
    }
}

/// Result of walking one ITS region.
///
/// Scanned motifs are always present, either found or not. The gap motifs
/// (`leader`, `d2d3`) are only present when the motif that closes them was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifSet {
    its: String,
    calls: BTreeMap<MotifName, MotifCall>,
}

impl MotifSet {
    pub(crate) fn new(its: &str) -> Self {
        Self {
            its: its.to_string(),
            calls: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, name: MotifName, call: MotifCall) {
        self.calls.insert(name, call);
    }

    pub fn its(&self) -> &str {
        &self.its
    }

    /// `None` means the motif was never assigned, which only happens for gap motifs.
    pub fn get(&self, name: MotifName) -> Option<MotifCall> {
        self.calls.get(&name).copied()
    }

    pub fn span(&self, name: MotifName) -> Option<Span> {
        self.get(name).and_then(|call| call.span())
    }

    pub fn sequence_of(&self, name: MotifName) -> Option<&str> {
        self.span(name).map(|span| &self.its[span.start..span.end])
    }

    /// All assigned motifs in discovery order.
    pub fn calls(&self) -> impl Iterator<Item = (MotifName, MotifCall)> + '_ {
        self.calls.iter().map(|(name, call)| (*name, *call))
    }

    pub fn spans(&self) -> impl Iterator<Item = (MotifName, Span)> + '_ {
        self.calls()
            .filter_map(|(name, call)| call.span().map(|span| (name, span)))
    }

    pub fn missing(&self) -> Vec<MotifName> {
        self.calls()
            .filter(|(_, call)| *call == MotifCall::NotFound)
            .map(|(name, _)| name)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn motif_names_round_trip_through_strings() {
        for name in MotifName::ALL {
            assert_eq!(name.as_str().parse::<MotifName>(), Ok(name));
        }
        assert!("ITS".parse::<MotifName>().is_err());
    }

    #[test]
    fn calls_iterate_in_layout_order() {
        let mut set = MotifSet::new("ACGTACGTAC");
        set.record(MotifName::TRna1, MotifCall::NotFound);
        set.record(MotifName::D1D1, MotifCall::Found(Span::new(2, 6)));
        set.record(MotifName::Leader, MotifCall::Found(Span::new(0, 2)));

        let names: Vec<_> = set.calls().map(|(name, _)| name).collect();
        assert_eq!(
            names,
            vec![MotifName::Leader, MotifName::D1D1, MotifName::TRna1]
        );
        assert_eq!(set.sequence_of(MotifName::D1D1), Some("GTAC"));
        assert_eq!(set.missing(), vec![MotifName::TRna1]);
        assert_eq!(set.get(MotifName::D2D3), None);
    }

    #[test]
    fn span_length() {
        assert_eq!(Span::new(3, 10).len(), 7);
        assert!(Span::new(4, 4).is_empty());
    }
}
