mod anchor;
mod error;
mod its_locator;
mod motif_set;
mod stages;
mod walker;

pub use anchor::{AnchorMatcher, AnchorPair};
pub use error::ScanError;
pub use its_locator::{locate_its, ItsRegion, ITS_START_ANCHOR};
pub use motif_set::{MotifCall, MotifName, MotifSet, Span};
pub use stages::{Stage, GENERIC_FALLBACK, ITS_STAGES};
pub use walker::{find_motifs, MotifWalker};
