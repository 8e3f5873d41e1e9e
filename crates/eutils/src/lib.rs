/*!
This crate provides a small blocking client for the NCBI Entrez E-utilities
that is just large enough to drive ITS motif scanning: nucleotide records are
downloaded as GenBank text with `efetch`, organism names are resolved to
taxonomy ids with `esearch`, and taxonomy records are fetched as XML.

GenBank parsing lives here as well so that downloaded records and local
GenBank files are turned into sequences by the same code.

Requests are made once. Retrying or throttling is left to the caller.
*/

mod client;
mod error;
mod genbank;
mod taxonomy;

pub use client::{EutilsClient, EutilsConfig, DEFAULT_BASE_URL};
pub use error::EutilsError;
pub use genbank::{parse_genbank, read_genbank, GenbankRecord};
pub use taxonomy::{parse_esearch_ids, parse_taxa, Taxon};
