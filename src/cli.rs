use crate::utils::{OutputFormat, Result};
use chrono::Datelike;
use clap::{ArgAction, ArgGroup, Args, Parser, Subcommand};
use env_logger::fmt::Color;
use eutils::{EutilsConfig, DEFAULT_BASE_URL};
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
    time::Duration,
};

pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    format!(
        "{}-{}",
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    )
});

#[derive(Parser)]
#[command(name="itscan",
          author="nlab <nlab@fastmail.com>",
          version=&**FULL_VERSION,
          long_about = None,
          disable_help_subcommand = true,
          after_help = format!("Copyright (C) 2020-{}     nlab
This program comes with ABSOLUTELY NO WARRANTY.", chrono::Utc::now().year()),
          help_template = "{name} {version}\n{author}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[clap(short = 'v')]
    #[clap(long = "verbose")]
    #[clap(global = true)]
    #[clap(action = ArgAction::Count, help = "Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)")]
    pub verbosity: u8,
}

#[derive(Subcommand)]
pub enum Command {
    #[clap(about = "Find ITS motifs in FASTA/GenBank files or a raw sequence")]
    Scan(ScanArgs),
    #[clap(about = "Download GenBank records by accession and find their ITS motifs")]
    Fetch(FetchArgs),
    #[clap(about = "Look up the taxonomic classification of an organism or tax id")]
    Taxonomy(TaxonomyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReportArgs {
    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output path, '-' for standard output")]
    #[clap(value_name = "OUTPUT")]
    #[clap(default_value = "-")]
    #[arg(value_parser = check_prefix_path)]
    pub output: String,

    #[clap(long = "format")]
    #[clap(value_name = "FORMAT")]
    #[clap(help = "Report format (tsv or json)")]
    #[clap(default_value = "tsv")]
    pub format: OutputFormat,
}

#[derive(Parser, Debug)]
#[command(group(ArgGroup::new("input").required(true).args(["input_paths", "sequence"])))]
#[command(arg_required_else_help(true))]
pub struct ScanArgs {
    #[clap(short = 'i')]
    #[clap(long = "input")]
    #[clap(help = "FASTA or GenBank file(s) with 16S-23S sequences, optionally gzipped")]
    #[clap(value_name = "FILE")]
    #[clap(num_args = 1..)]
    #[arg(value_parser = check_file_exists)]
    pub input_paths: Vec<PathBuf>,

    #[clap(short = 's')]
    #[clap(long = "sequence")]
    #[clap(help = "Raw nucleotide sequence to scan")]
    #[clap(value_name = "SEQUENCE")]
    #[arg(value_parser = check_sequence_nonempty)]
    pub sequence: Option<String>,

    #[command(flatten)]
    pub report: ReportArgs,

    #[clap(short = 't')]
    #[clap(long = "threads")]
    #[clap(help = "Number of threads")]
    #[clap(value_name = "THREADS")]
    #[clap(default_value = "1")]
    #[arg(value_parser = threads_in_range)]
    pub num_threads: usize,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "uppercase")]
    #[clap(help = "Convert FASTA and raw input to upper case before scanning")]
    pub uppercase: bool,
}

#[derive(Args, Debug, Clone)]
pub struct NcbiArgs {
    #[clap(help_heading("NCBI"))]
    #[clap(long = "email")]
    #[clap(env = "NCBI_EMAIL")]
    #[clap(value_name = "EMAIL")]
    #[clap(help = "Contact e-mail reported to NCBI with each request")]
    pub email: Option<String>,

    #[clap(help_heading("NCBI"))]
    #[clap(long = "api-key")]
    #[clap(env = "NCBI_API_KEY")]
    #[clap(value_name = "API_KEY")]
    #[clap(help = "NCBI API key")]
    pub api_key: Option<String>,

    #[clap(help_heading("NCBI"))]
    #[clap(long = "eutils-url")]
    #[clap(env = "ITSCAN_EUTILS_URL")]
    #[clap(value_name = "URL")]
    #[clap(help = "Base URL of the E-utilities service")]
    #[clap(default_value = DEFAULT_BASE_URL)]
    pub eutils_url: String,

    #[clap(help_heading("NCBI"))]
    #[clap(long = "timeout")]
    #[clap(value_name = "SECONDS")]
    #[clap(help = "Request timeout in seconds")]
    #[clap(default_value = "60")]
    pub timeout_secs: u64,
}

impl NcbiArgs {
    pub fn to_config(&self) -> EutilsConfig {
        EutilsConfig {
            base_url: self.eutils_url.clone(),
            email: self.email.clone(),
            api_key: self.api_key.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            ..EutilsConfig::default()
        }
    }
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct FetchArgs {
    #[clap(required = true)]
    #[clap(help = "GenBank accession number(s)")]
    #[clap(value_name = "ACCESSION")]
    #[arg(value_parser = check_accession)]
    pub accessions: Vec<String>,

    #[command(flatten)]
    pub report: ReportArgs,

    #[command(flatten)]
    pub ncbi: NcbiArgs,

    #[clap(help_heading("Advanced"))]
    #[clap(long = "save-genbank")]
    #[clap(value_name = "DIR")]
    #[clap(help = "Directory to store the downloaded GenBank records in")]
    #[arg(value_parser = check_dir_exists)]
    pub save_genbank: Option<PathBuf>,
}

#[derive(Parser, Debug)]
#[command(arg_required_else_help(true))]
pub struct TaxonomyArgs {
    #[clap(required = true)]
    #[clap(help = "Organism name or NCBI taxonomy id")]
    #[clap(value_name = "ORGANISM")]
    #[arg(value_parser = check_query_nonempty)]
    pub query: String,

    #[clap(short = 'o')]
    #[clap(long = "output")]
    #[clap(help = "Output path, '-' for standard output")]
    #[clap(value_name = "OUTPUT")]
    #[clap(default_value = "-")]
    #[arg(value_parser = check_prefix_path)]
    pub output: String,

    #[command(flatten)]
    pub ncbi: NcbiArgs,
}

pub fn init_verbose(args: &Cli) {
    let filter_level: LevelFilter = match args.verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let level = record.level();
            let mut style = buf.style();
            match record.level() {
                Level::Error => style.set_color(Color::Red),
                Level::Warn => style.set_color(Color::Yellow),
                Level::Info => style.set_color(Color::Green),
                Level::Debug => style.set_color(Color::Blue),
                Level::Trace => style.set_color(Color::Cyan),
            };

            writeln!(
                buf,
                "{} [{}] - {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                style.value(level),
                record.args()
            )
        })
        .filter_level(filter_level)
        .init();
}

fn check_prefix_path(s: &str) -> Result<String> {
    if s == "-" {
        return Ok(s.to_string());
    }
    let path = Path::new(s);
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(format!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(s.to_string())
}

fn threads_in_range(s: &str) -> Result<usize> {
    let thread: usize = s
        .parse()
        .map_err(|_| format!("`{}` is not a valid thread number", s))?;
    if thread >= 1 {
        Ok(thread)
    } else {
        Err("Number of threads must be at least 1".into())
    }
}

fn check_file_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.exists() {
        Err(format!("File does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_dir_exists(s: &str) -> Result<PathBuf> {
    let path = Path::new(s);
    if !path.is_dir() {
        Err(format!("Directory does not exist: {}", path.display()))
    } else {
        Ok(path.to_path_buf())
    }
}

fn check_sequence_nonempty(s: &str) -> Result<String> {
    let seq: String = s.split_whitespace().collect();
    if seq.is_empty() {
        Err("Sequence cannot be an empty string".to_string())
    } else {
        Ok(seq)
    }
}

fn check_accession(s: &str) -> Result<String> {
    let accession = s.trim();
    if accession.is_empty() {
        Err("Accession cannot be an empty string".to_string())
    } else if !accession
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
    {
        Err(format!("Invalid accession: {}", accession))
    } else {
        Ok(accession.to_string())
    }
}

fn check_query_nonempty(s: &str) -> Result<String> {
    if s.trim().is_empty() {
        Err("Organism cannot be an empty string".to_string())
    } else {
        Ok(s.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn scan_requires_an_input() {
        assert!(Cli::try_parse_from(["itscan", "scan", "--format", "json"]).is_err());
    }

    #[test]
    fn scan_raw_sequence() {
        let cli = Cli::try_parse_from(["itscan", "scan", "-s", "ACGT CCTCCTT", "-t", "2"]).unwrap();
        match cli.command {
            Command::Scan(args) => {
                assert_eq!(args.sequence.as_deref(), Some("ACGTCCTCCTT"));
                assert_eq!(args.num_threads, 2);
                assert_eq!(args.report.format, OutputFormat::Tsv);
                assert_eq!(args.report.output, "-");
            }
            _ => panic!("Expected scan command"),
        }
    }

    #[test]
    fn fetch_accessions_and_ncbi_defaults() {
        let cli =
            Cli::try_parse_from(["itscan", "fetch", "AB000001.1", "CP009072", "--format", "json"])
                .unwrap();
        match cli.command {
            Command::Fetch(args) => {
                assert_eq!(args.accessions, vec!["AB000001.1", "CP009072"]);
                assert_eq!(args.report.format, OutputFormat::Json);
                let config = args.ncbi.to_config();
                assert_eq!(config.tool, "itscan");
                assert_eq!(config.timeout, Duration::from_secs(60));
            }
            _ => panic!("Expected fetch command"),
        }
    }

    #[test]
    fn validators() {
        assert!(threads_in_range("0").is_err());
        assert_eq!(threads_in_range("8"), Ok(8));
        assert!(check_accession("AB/0001").is_err());
        assert_eq!(check_accession(" NR_024570.1 "), Ok("NR_024570.1".to_string()));
        assert!(check_sequence_nonempty("  \n").is_err());
        assert!(check_prefix_path("/nonexistent/dir/out.tsv").is_err());
        assert!(check_prefix_path("-").is_ok());
        assert!(check_query_nonempty(" ").is_err());
    }
}
