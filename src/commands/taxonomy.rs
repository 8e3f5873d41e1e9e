use crate::cli::TaxonomyArgs;
use crate::utils::{create_writer, is_tax_id, Result};
use eutils::{EutilsClient, Taxon};
use itertools::Itertools;
use std::io::Write;

pub fn taxonomy(args: TaxonomyArgs) -> Result<()> {
    let client = EutilsClient::new(args.ncbi.to_config());

    let tax_id = if is_tax_id(&args.query) {
        args.query.clone()
    } else {
        let tax_id = client.search_tax_id(&args.query)?;
        log::info!("{} resolved to taxonomy id {}", args.query, tax_id);
        tax_id
    };

    let taxon = client.fetch_taxonomy(&tax_id)?;
    let mut writer = create_writer(&args.output)?;
    write_taxon(&mut writer, &taxon)?;
    writer.flush().map_err(|e| e.to_string())
}

fn write_taxon<W: Write>(writer: &mut W, taxon: &Taxon) -> Result<()> {
    writeln!(writer, "#tax_id\tscientific_name\trank\tlineage").map_err(|e| e.to_string())?;
    let row = [
        taxon.tax_id.as_str(),
        taxon.scientific_name.as_str(),
        taxon.rank.as_str(),
        taxon.lineage.as_str(),
    ];
    writeln!(writer, "{}", row.iter().join("\t")).map_err(|e| e.to_string())
}
