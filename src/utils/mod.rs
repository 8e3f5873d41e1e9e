mod io_utils;
mod output_format;
mod readers;
mod util;

pub use io_utils::{create_writer, write_text_file};
pub use output_format::OutputFormat;
pub use readers::{
    open_sequence_reader, read_fasta, read_genbank, read_sequences, SequenceFormat,
    SequenceRecord,
};
pub use util::{handle_error_and_exit, is_tax_id, Result};
