use crate::EutilsError;
use gb_io::reader::SeqReader;
use std::io::Read;

/// A nucleotide record reduced to what motif scanning needs.
#[derive(Debug, Clone, PartialEq)]
pub struct GenbankRecord {
    pub accession: String,
    pub definition: Option<String>,
    pub organism: Option<String>,
    pub taxonomy: Vec<String>,
    /// Upper-cased sequence.
    pub seq: String,
}

/// Parses the first record of a GenBank flat file.
pub fn parse_genbank(text: &str) -> Result<GenbankRecord, EutilsError> {
    read_genbank(text.as_bytes())?
        .into_iter()
        .next()
        .ok_or_else(|| EutilsError::Parse("GenBank text contains no records".to_string()))
}

pub fn read_genbank<R: Read>(reader: R) -> Result<Vec<GenbankRecord>, EutilsError> {
    let mut records = Vec::new();
    for (index, seq) in SeqReader::new(reader).enumerate() {
        let seq = seq.map_err(|e| {
            EutilsError::Parse(format!("Unable to read GenBank record {}: {}", index + 1, e))
        })?;

        let accession = seq
            .accession
            .clone()
            .or_else(|| seq.version.clone())
            .or_else(|| seq.name.clone())
            .unwrap_or_else(|| format!("record_{}", index + 1));

        let (organism, taxonomy) = match seq.source.as_ref().and_then(|s| s.organism.as_deref()) {
            Some(text) => {
                let (name, lineage) = split_organism(text);
                (Some(name), lineage)
            }
            None => (seq.source.as_ref().map(|s| s.source.clone()), Vec::new()),
        };

        records.push(GenbankRecord {
            accession,
            definition: seq.definition.clone(),
            organism,
            taxonomy,
            seq: String::from_utf8_lossy(&seq.seq).to_ascii_uppercase(),
        });
    }
    Ok(records)
}

/// Splits an ORGANISM block into the organism name (first line) and its
/// semicolon-separated lineage (remaining lines).
fn split_organism(text: &str) -> (String, Vec<String>) {
    let mut lines = text.lines();
    let name = lines.next().unwrap_or_default().trim().to_string();
    let lineage = lines
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ")
        .split(';')
        .map(|taxon| taxon.trim().trim_end_matches('.').to_string())
        .filter(|taxon| !taxon.is_empty())
        .collect();
    (name, lineage)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = "\
LOCUS       TEST0001                  40 bp    DNA     linear   BCT 01-JAN-2020
DEFINITION  Test 16S-23S ribosomal RNA intergenic spacer.
ACCESSION   TEST0001
VERSION     TEST0001.1
SOURCE      Escherichia coli
  ORGANISM  Escherichia coli
            Bacteria; Pseudomonadota; Gammaproteobacteria.
FEATURES             Location/Qualifiers
     source          1..40
                     /organism=\"Escherichia coli\"
ORIGIN
        1 acgtcctcct tgacccaaaa aggtcttttg ggctattaaa
//
";

    #[test]
    fn parse_record_uppercases_sequence() {
        let record = parse_genbank(RECORD).unwrap();
        assert_eq!(record.accession, "TEST0001");
        assert_eq!(record.seq, "ACGTCCTCCTTGACCCAAAAAGGTCTTTTGGGCTATTAAA");
        assert_eq!(record.organism.as_deref(), Some("Escherichia coli"));
        assert_eq!(
            record.taxonomy,
            vec!["Bacteria", "Pseudomonadota", "Gammaproteobacteria"]
        );
    }

    #[test]
    fn empty_text_is_parse_error() {
        assert!(matches!(parse_genbank(""), Err(EutilsError::Parse(_))));
    }

    #[test]
    fn split_organism_block() {
        let (name, lineage) = split_organism(
            "Escherichia coli\nBacteria; Pseudomonadota; Gammaproteobacteria;\nEnterobacterales.",
        );
        assert_eq!(name, "Escherichia coli");
        assert_eq!(
            lineage,
            vec![
                "Bacteria",
                "Pseudomonadota",
                "Gammaproteobacteria",
                "Enterobacterales"
            ]
        );
    }

    #[test]
    fn split_organism_without_lineage() {
        let (name, lineage) = split_organism("Bacillus subtilis");
        assert_eq!(name, "Bacillus subtilis");
        assert!(lineage.is_empty());
    }
}
