use super::{
    AnchorMatcher, AnchorPair, MotifCall, MotifSet, ScanError, Span, Stage, GENERIC_FALLBACK,
    ITS_STAGES,
};
use once_cell::sync::Lazy;

// The built-in table is constant; `built_in_stage_table_compiles` covers it.
static DEFAULT_WALKER: Lazy<MotifWalker> = Lazy::new(|| {
    MotifWalker::new(&ITS_STAGES, &GENERIC_FALLBACK)
        .expect("Built-in anchor patterns must be valid regular expressions")
});

/// Walks an ITS region with the built-in stage table.
pub fn find_motifs(its_region: &str) -> MotifSet {
    DEFAULT_WALKER.walk(its_region)
}

#[derive(Debug)]
struct CompiledStage {
    stage: Stage,
    primary: AnchorMatcher,
    fallback: AnchorMatcher,
}

impl CompiledStage {
    /// Finds this stage's motif in `remaining`, which starts at `offset` in the
    /// ITS. On a hit the cursor moves past the motif; on a miss it stays put.
    fn scan_and_trim<'a>(&self, remaining: &'a str, offset: usize) -> (&'a str, usize, MotifCall) {
        let hit = self
            .primary
            .find(remaining)
            .or_else(|| self.fallback.find(remaining));

        match hit {
            Some(local) => {
                let span = Span::new(local.start + offset, local.end + offset);
                (&remaining[local.end..], span.end, MotifCall::Found(span))
            }
            None => (remaining, offset, MotifCall::NotFound),
        }
    }
}

/// Ordered anchor scan over an ITS region.
#[derive(Debug)]
pub struct MotifWalker {
    stages: Vec<CompiledStage>,
}

impl MotifWalker {
    pub fn new(stages: &[Stage], fallback: &AnchorPair) -> Result<Self, ScanError> {
        let fallback = fallback.compile()?;
        let stages = stages
            .iter()
            .map(|stage| {
                Ok(CompiledStage {
                    stage: *stage,
                    primary: stage.primary.compile()?,
                    fallback: fallback.clone(),
                })
            })
            .collect::<Result<Vec<_>, ScanError>>()?;
        Ok(Self { stages })
    }

    pub fn walk(&self, its_region: &str) -> MotifSet {
        let mut motifs = MotifSet::new(its_region);
        let mut remaining = its_region;
        let mut offset = 0;

        for compiled in &self.stages {
            let stage = &compiled.stage;
            let (next_remaining, next_offset, call) = compiled.scan_and_trim(remaining, offset);

            match call {
                MotifCall::Found(span) => {
                    if let Some(gap) = stage.gap {
                        motifs.record(gap, MotifCall::Found(Span::new(offset, span.start)));
                    }
                    log::trace!("{} found at {}-{}", stage.motif, span.start, span.end);
                }
                MotifCall::NotFound => log::trace!("{} not found past {}", stage.motif, offset),
            }

            motifs.record(stage.motif, call);
            remaining = next_remaining;
            offset = next_offset;
        }

        motifs
    }
}
