use crate::genbank::{parse_genbank, GenbankRecord};
use crate::taxonomy::{parse_esearch_ids, parse_taxa, Taxon};
use crate::EutilsError;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

#[derive(Debug, Clone)]
pub struct EutilsConfig {
    pub base_url: String,
    /// Contact address NCBI associates with the requests.
    pub email: Option<String>,
    pub api_key: Option<String>,
    pub tool: String,
    pub timeout: Duration,
}

impl Default for EutilsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            email: None,
            api_key: None,
            tool: "itscan".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

pub struct EutilsClient {
    config: EutilsConfig,
    agent: ureq::Agent,
}

impl EutilsClient {
    pub fn new(config: EutilsConfig) -> Self {
        let agent = ureq::AgentBuilder::new().timeout(config.timeout).build();
        Self { config, agent }
    }

    pub fn config(&self) -> &EutilsConfig {
        &self.config
    }

    /// Downloads a nucleotide record in GenBank flat-file format.
    pub fn fetch_genbank_text(&self, accession: &str) -> Result<String, EutilsError> {
        self.get(
            "efetch.fcgi",
            &[
                ("db", "nucleotide"),
                ("id", accession),
                ("rettype", "gb"),
                ("retmode", "text"),
            ],
        )
    }

    pub fn fetch_nucleotide(&self, accession: &str) -> Result<(GenbankRecord, String), EutilsError> {
        let text = self.fetch_genbank_text(accession)?;
        if text.trim().is_empty() {
            return Err(EutilsError::NotFound(accession.to_string()));
        }
        let record = parse_genbank(&text)?;
        Ok((record, text))
    }

    /// Resolves an organism name to its first matching taxonomy id.
    pub fn search_tax_id(&self, organism: &str) -> Result<String, EutilsError> {
        let term = organism.trim();
        let body = self.get(
            "esearch.fcgi",
            &[("db", "taxonomy"), ("term", term), ("retmode", "json")],
        )?;
        parse_esearch_ids(&body)?
            .into_iter()
            .next()
            .ok_or_else(|| EutilsError::NotFound(term.to_string()))
    }

    pub fn fetch_taxonomy(&self, tax_id: &str) -> Result<Taxon, EutilsError> {
        let body = self.get(
            "efetch.fcgi",
            &[("db", "taxonomy"), ("id", tax_id), ("retmode", "xml")],
        )?;
        parse_taxa(&body)?
            .into_iter()
            .next()
            .ok_or_else(|| EutilsError::NotFound(format!("taxonomy id {}", tax_id)))
    }

    fn get(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<String, EutilsError> {
        let url = format!("{}/{}", self.config.base_url.trim_end_matches('/'), endpoint);
        let mut request = self.agent.get(&url).query("tool", &self.config.tool);
        if let Some(email) = &self.config.email {
            request = request.query("email", email);
        }
        if let Some(api_key) = &self.config.api_key {
            request = request.query("api_key", api_key);
        }
        for (key, value) in params {
            request = request.query(key, value);
        }

        log::debug!("GET {} {:?}", url, params);
        request
            .call()
            .map_err(|e| EutilsError::Http(e.to_string()))?
            .into_string()
            .map_err(|e| EutilsError::Http(e.to_string()))
    }
}
