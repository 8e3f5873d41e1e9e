use super::ScanError;

/// Last bases of the 16S gene. The spacer starts right after them.
pub const ITS_START_ANCHOR: &str = "CCTCCTT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItsRegion<'a> {
    /// Position in the gene region where the ITS begins.
    pub offset: usize,
    pub seq: &'a str,
}

/// Trims everything up to and including the first end-of-16S anchor.
pub fn locate_its(gene_region: &str) -> Result<ItsRegion<'_>, ScanError> {
    let anchor_pos = gene_region
        .find(ITS_START_ANCHOR)
        .ok_or(ScanError::ItsBoundaryNotFound)?;
    let offset = anchor_pos + ITS_START_ANCHOR.len();
    Ok(ItsRegion {
        offset,
        seq: &gene_region[offset..],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn its_starts_after_anchor() {
        let region = locate_its("AAAACCTCCTTGACCCXXXAGGTCYYY").unwrap();
        assert_eq!(region.offset, 11);
        assert_eq!(region.seq, "GACCCXXXAGGTCYYY");
    }

    #[test]
    fn only_first_anchor_is_used() {
        let gene_region = "ACCTCCTTGGCCTCCTTAA";
        let region = locate_its(gene_region).unwrap();
        assert_eq!(region.offset, 1 + ITS_START_ANCHOR.len());
        assert_eq!(region.seq, "GGCCTCCTTAA");
    }

    #[test]
    fn anchor_at_end_gives_empty_its() {
        let region = locate_its("GGGCCTCCTT").unwrap();
        assert_eq!(region.offset, 10);
        assert_eq!(region.seq, "");
    }

    #[test]
    fn offset_is_anchor_position_plus_seven() {
        for prefix_len in [0, 1, 5, 40] {
            let gene_region = format!("{}CCTCCTTACGT", "A".repeat(prefix_len));
            let region = locate_its(&gene_region).unwrap();
            assert_eq!(region.offset, prefix_len + 7);
            assert_eq!(region.seq, &gene_region[prefix_len + 7..]);
        }
    }

    #[test]
    fn missing_anchor_is_reported() {
        assert_eq!(
            locate_its("ACGTACGTCCTCCTAGG"),
            Err(ScanError::ItsBoundaryNotFound)
        );
        assert_eq!(locate_its(""), Err(ScanError::ItsBoundaryNotFound));
    }

    #[test]
    fn lowercase_anchor_is_not_matched() {
        assert_eq!(
            locate_its("aaacctccttggg"),
            Err(ScanError::ItsBoundaryNotFound)
        );
    }
}
