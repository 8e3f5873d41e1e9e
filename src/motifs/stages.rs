use super::{AnchorPair, MotifName};

/// Basal clamp. Tried for every stage whose own anchors are absent.
pub const GENERIC_FALLBACK: AnchorPair = AnchorPair::new("GACCA", "[TA]GGTC");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stage {
    pub motif: MotifName,
    pub primary: AnchorPair,
    /// Region between the previous cursor position and this motif's start.
    pub gap: Option<MotifName>,
}

pub const ITS_STAGES: [Stage; 6] = [
    Stage {
        motif: MotifName::D1D1,
        primary: AnchorPair::new("GACC[CTG]", "AGGTC"),
        gap: Some(MotifName::Leader),
    },
    Stage {
        motif: MotifName::TRna1,
        primary: AnchorPair::new("GGGCTATTA", "GGCCCA"),
        gap: Some(MotifName::D2D3),
    },
    Stage {
        motif: MotifName::TRna2,
        primary: AnchorPair::new("GGGG", "CCTCCA"),
        gap: None,
    },
    Stage {
        motif: MotifName::BoxB,
        primary: AnchorPair::new("AGCA", "TGCT"),
        gap: None,
    },
    Stage {
        motif: MotifName::BoxA,
        primary: AnchorPair::new("G[CA]A", "GAAA"),
        gap: None,
    },
    Stage {
        motif: MotifName::D4,
        primary: AnchorPair::new("ACT", "AAA"),
        gap: None,
    },
];
