use crate::cli::FetchArgs;
use crate::motifs::ScanError;
use crate::scan::{scan_record, ScanReport, ScanSummary};
use crate::utils::{create_writer, write_text_file, Result, SequenceRecord};
use crate::writers::write_reports;
use eutils::{EutilsClient, EutilsError, GenbankRecord};
use std::path::Path;

pub fn fetch(args: FetchArgs) -> Result<()> {
    let client = EutilsClient::new(args.ncbi.to_config());
    if client.config().email.is_none() {
        log::warn!("No contact e-mail set; NCBI asks for one via --email or NCBI_EMAIL");
    }

    let reports: Vec<ScanReport> = args
        .accessions
        .iter()
        .map(|accession| {
            let fetched = client.fetch_nucleotide(accession);
            process_fetched(accession, fetched, args.save_genbank.as_deref())
        })
        .collect();

    let writer = create_writer(&args.report.output)?;
    write_reports(writer, args.report.format, &reports)?;
    ScanSummary::from_reports(&reports).log();
    Ok(())
}

/// Turns one download into a report. Failing to save the raw record is
/// logged and does not stop the scan.
fn process_fetched(
    accession: &str,
    fetched: std::result::Result<(GenbankRecord, String), EutilsError>,
    save_dir: Option<&Path>,
) -> ScanReport {
    match fetched {
        Ok((record, text)) => {
            if let Some(dir) = save_dir {
                if let Err(err) = save_genbank(dir, accession, &text) {
                    log::error!("{}: {}", accession, err);
                }
            }
            log_record(&record);
            scan_record(&SequenceRecord::new(accession, record.seq))
        }
        Err(err) => {
            log::error!("{}: {}", accession, err);
            ScanReport::failed(accession, ScanError::UpstreamFetchFailure(err.to_string()))
        }
    }
}

fn log_record(record: &GenbankRecord) {
    log::info!(
        "{}: {} ({} bp)",
        record.accession,
        record.definition.as_deref().unwrap_or("no definition"),
        record.seq.len()
    );
    if let Some(organism) = &record.organism {
        log::info!("{}: organism {}", record.accession, organism);
    }
    if !record.taxonomy.is_empty() {
        log::info!(
            "{}: taxonomy {}",
            record.accession,
            record.taxonomy.join("; ")
        );
    }
}

fn save_genbank(dir: &Path, accession: &str, text: &str) -> Result<()> {
    let path = dir.join(format!("{}.gb", accession));
    log::debug!("Saving {} to {}", accession, path.display());
    write_text_file(&path, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saved_record_named_after_accession() {
        let dir = tempfile::tempdir().unwrap();
        save_genbank(dir.path(), "AB000001.1", "LOCUS\n//\n").unwrap();
        let saved = std::fs::read_to_string(dir.path().join("AB000001.1.gb")).unwrap();
        assert_eq!(saved, "LOCUS\n//\n");
    }

    fn downloaded(accession: &str, seq: &str) -> (GenbankRecord, String) {
        let record = GenbankRecord {
            accession: accession.to_string(),
            definition: None,
            organism: None,
            taxonomy: Vec::new(),
            seq: seq.to_string(),
        };
        (record, format!("LOCUS       {}\n//\n", accession))
    }

    #[test]
    fn unwritable_save_target_keeps_every_report() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("AB1.gb")).unwrap();

        let reports: Vec<ScanReport> = ["AB0", "AB1", "AB2"]
            .iter()
            .map(|accession| {
                let fetched = Ok(downloaded(accession, "AACCTCCTTGACCCAAAGGTC"));
                process_fetched(accession, fetched, Some(dir.path()))
            })
            .collect();

        let ids: Vec<&str> = reports.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["AB0", "AB1", "AB2"]);
        assert!(reports.iter().all(|r| r.its_offset == Some(9)));
        assert!(dir.path().join("AB0.gb").is_file());
        assert!(dir.path().join("AB1.gb").is_dir());
        assert!(dir.path().join("AB2.gb").is_file());
    }

    #[test]
    fn download_failure_becomes_failed_report() {
        let report = process_fetched(
            "AB3",
            Err(EutilsError::Http("status code 400".to_string())),
            None,
        );
        assert_eq!(report.id, "AB3");
        assert_eq!(report.result.unwrap_err().status(), "fetch_failed");
    }
}
