use crate::cli::ScanArgs;
use crate::scan::{initialize_thread_pool, scan_records, ScanSummary};
use crate::utils::{create_writer, read_sequences, Result, SequenceRecord};
use crate::writers::write_reports;

pub fn scan(args: ScanArgs) -> Result<()> {
    let records = load_records(&args)?;
    log::info!("Loaded {} sequence(s)", records.len());

    let pool = initialize_thread_pool(args.num_threads)?;
    let reports = scan_records(&pool, &records);

    let writer = create_writer(&args.report.output)?;
    write_reports(writer, args.report.format, &reports)?;
    ScanSummary::from_reports(&reports).log();
    Ok(())
}

fn load_records(args: &ScanArgs) -> Result<Vec<SequenceRecord>> {
    if let Some(seq) = &args.sequence {
        let seq = if args.uppercase {
            seq.to_ascii_uppercase()
        } else {
            seq.clone()
        };
        return Ok(vec![SequenceRecord::new("sequence", seq)]);
    }

    let mut records = Vec::new();
    for path in &args.input_paths {
        records.extend(read_sequences(path, args.uppercase)?);
    }
    Ok(records)
}
