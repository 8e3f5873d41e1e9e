use super::Result;
use bio::io::fasta;
use flate2::read::MultiGzDecoder;
use std::fs::File;
use std::io::{BufReader, Read as ioRead};
use std::path::Path;

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceRecord {
    pub id: String,
    pub seq: String,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, seq: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            seq: seq.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SequenceFormat {
    Fasta,
    Genbank,
}

impl SequenceFormat {
    pub fn from_path(path: &Path) -> Self {
        let name = path.to_string_lossy().to_lowercase();
        let name = name
            .strip_suffix(".gz")
            .or_else(|| name.strip_suffix(".gzip"))
            .unwrap_or(&name);
        match Path::new(name).extension().and_then(|ext| ext.to_str()) {
            Some("gb") | Some("gbk") | Some("genbank") | Some("gbff") => SequenceFormat::Genbank,
            _ => SequenceFormat::Fasta,
        }
    }
}

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".gzip")
}

pub fn open_sequence_reader(path: &Path) -> Result<BufReader<Box<dyn ioRead>>> {
    let file = File::open(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    if is_gzipped(path) {
        let gz_decoder = MultiGzDecoder::new(file);
        if gz_decoder.header().is_some() {
            Ok(BufReader::new(Box::new(gz_decoder)))
        } else {
            Err(format!("Invalid gzip header: {}", path.to_string_lossy()))
        }
    } else {
        Ok(BufReader::new(Box::new(file)))
    }
}

/// Loads every record of a FASTA or GenBank file.
pub fn read_sequences(path: &Path, uppercase: bool) -> Result<Vec<SequenceRecord>> {
    let reader = open_sequence_reader(path)?;
    let format = SequenceFormat::from_path(path);
    log::debug!("Reading {:?} records from {}", format, path.display());

    let mut records = match format {
        SequenceFormat::Fasta => read_fasta(reader),
        SequenceFormat::Genbank => read_genbank(reader),
    }
    .map_err(|e| format!("{}: {}", path.display(), e))?;

    if records.is_empty() {
        return Err(format!("No sequences found in {}", path.display()));
    }
    if uppercase {
        for record in records.iter_mut() {
            record.seq.make_ascii_uppercase();
        }
    }
    Ok(records)
}

pub fn read_fasta<R: ioRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    fasta::Reader::new(reader)
        .records()
        .map(|record| {
            let record = record.map_err(|e| format!("Invalid FASTA record: {}", e))?;
            Ok(SequenceRecord::new(
                record.id(),
                String::from_utf8_lossy(record.seq()),
            ))
        })
        .collect()
}

pub fn read_genbank<R: ioRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    Ok(eutils::read_genbank(reader)?
        .into_iter()
        .map(|record| SequenceRecord::new(record.accession, record.seq))
        .collect())
}
