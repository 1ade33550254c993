use std::io::{self, Write};
use colored::Colorize;
use const_format::str_repeat;
use crate::{
    err::{Error, validate_param},
    algo::parse_int,
    stats,
};

const PKG_NAME: &'static str = env!("CARGO_PKG_NAME");

struct Args {
    count: u32,
    length: u32,
    log_level: log::LevelFilter,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            count: stats::SEQUENCE_COUNT,
            length: stats::SEQUENCE_LENGTH,
            log_level: log::LevelFilter::Info,
        }
    }
}

impl Args {
    /// Validate arguments.
    fn validate(self) -> Result<Self, Error> {
        validate_param!(self.count > 0, "Number of sequences must be positive (see -n/--count)");
        validate_param!(self.length > 0, "Sequence length must be positive (see -l/--length)");
        Ok(self)
    }
}

/// Print tool version and authors.
fn print_version() {
    println!("{} {}", PKG_NAME.underline(), format!("v{}", env!("CARGO_PKG_VERSION")).green());
    let authors = env!("CARGO_PKG_AUTHORS").split(':').filter(|s| !s.is_empty()).collect::<Vec<_>>();
    if !authors.is_empty() {
        println!("Created by {}", authors.iter().map(|s| s.bright_blue().to_string()).collect::<Vec<_>>().join(", "));
    }
}

fn print_help() {
    const KEY: usize = 16;
    const VAL: usize = 4;
    const EMPTY: &'static str = str_repeat!(" ", KEY + VAL + 5);

    let defaults = Args::default();
    println!("{}", "Synthesize pseudo-random nucleotide sequences, \
        report average GC-content and GATTACA frequency.".yellow());

    println!("\n{} {} [arguments]", "Usage:".bold(), PKG_NAME);

    println!("\n{}", "Run parameters:".bold());
    println!("    {:KEY$} {:VAL$}  Number of sequences [{}].",
        "-n, --count".green(), "INT".yellow(), defaults.count);
    println!("    {:KEY$} {:VAL$}  Length of each sequence [{}].\n\
        {EMPTY}  Integers may contain separators and K/M/G suffixes (for example, 100k).",
        "-l, --length".green(), "INT".yellow(), defaults.length);

    println!("\n{}", "Other parameters:".bold());
    println!("    {:KEY$} {:VAL$}  Only print warnings and errors to stderr.", "-q, --quiet".green(), "");
    println!("    {:KEY$} {:VAL$}  Print debug messages to stderr.", "-v, --verbose".green(), "");
    println!("    {:KEY$} {:VAL$}  Show this help message.", "-h, --help".green(), "");
    println!("    {:KEY$} {:VAL$}  Show version.", "-V, --version".green(), "");
}

fn parse_args(argv: &[String]) -> Result<Args, lexopt::Error> {
    use lexopt::prelude::*;
    let mut args = Args::default();
    let mut parser = lexopt::Parser::from_args(argv);

    while let Some(arg) = parser.next()? {
        match arg {
            Short('n') | Long("count") => args.count = parser.value()?.parse_with(parse_int)?,
            Short('l') | Long("length") => args.length = parser.value()?.parse_with(parse_int)?,

            Short('q') | Long("quiet") => args.log_level = log::LevelFilter::Warn,
            Short('v') | Long("verbose") => args.log_level = log::LevelFilter::Debug,

            Short('V') | Long("version") => {
                print_version();
                std::process::exit(0);
            }
            Short('h') | Long("help") => {
                print_help();
                std::process::exit(0);
            }
            _ => Err(arg.unexpected())?,
        }
    }
    Ok(args)
}

/// Runs the tool with arguments `argv` (without the program name), prints the report to stdout.
pub fn run(argv: &[String]) -> Result<(), Error> {
    let args = parse_args(argv)?.validate()?;
    log::set_max_level(args.log_level);
    let report = stats::run(args.count, args.length)?;
    let mut out = io::stdout().lock();
    write!(out, "{}", report)?;
    out.flush()?;
    Ok(())
}
