use crate::EutilsError;
use quick_xml::{events::Event, Reader};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Taxon {
    pub tax_id: String,
    pub scientific_name: String,
    pub rank: String,
    pub lineage: String,
}

#[derive(Deserialize)]
struct ESearchResponse {
    esearchresult: ESearchResult,
}

#[derive(Deserialize)]
struct ESearchResult {
    #[serde(default)]
    idlist: Vec<String>,
}

pub fn parse_esearch_ids(body: &str) -> Result<Vec<String>, EutilsError> {
    let response: ESearchResponse =
        serde_json::from_str(body).map_err(|e| EutilsError::Parse(e.to_string()))?;
    Ok(response.esearchresult.idlist)
}

/// Reads the top-level `Taxon` entries of a `TaxaSet` document. Taxa nested
/// under `LineageEx` are skipped.
pub fn parse_taxa(xml: &str) -> Result<Vec<Taxon>, EutilsError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut taxa = Vec::new();
    let mut path: Vec<Vec<u8>> = Vec::new();
    let mut current = Taxon::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => path.push(e.name().as_ref().to_vec()),
            Ok(Event::End(_)) => {
                let closed = path.pop();
                if path.len() == 1 && closed.as_deref() == Some(b"Taxon".as_slice()) {
                    taxa.push(std::mem::take(&mut current));
                }
            }
            Ok(Event::Text(text)) => {
                if path.len() != 3 || path[1] != b"Taxon" {
                    continue;
                }
                let value = text
                    .unescape()
                    .map_err(|e| EutilsError::Parse(e.to_string()))?
                    .into_owned();
                match path[2].as_slice() {
                    b"TaxId" => current.tax_id = value,
                    b"ScientificName" => current.scientific_name = value,
                    b"Rank" => current.rank = value,
                    b"Lineage" => current.lineage = value,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => {
                return Err(EutilsError::Parse(format!(
                    "Malformed taxonomy XML at position {}: {}",
                    reader.buffer_position(),
                    e
                )))
            }
            _ => {}
        }
    }

    Ok(taxa)
}
