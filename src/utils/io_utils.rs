use crate::utils::Result;
use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::Path,
};

/// Opens the report destination; `-` is standard output.
pub fn create_writer(output: &str) -> Result<Box<dyn Write>> {
    if output == "-" {
        return Ok(Box::new(BufWriter::new(io::stdout().lock())));
    }
    let file =
        File::create(output).map_err(|e| format!("Unable to create {}: {}", output, e))?;
    Ok(Box::new(BufWriter::new(file)))
}

pub fn write_text_file(path: &Path, text: &str) -> Result<()> {
    std::fs::write(path, text).map_err(|e| format!("Unable to write {}: {}", path.display(), e))
}
