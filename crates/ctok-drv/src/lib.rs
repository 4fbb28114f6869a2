//! ctok-drv - Scanner Driver
//!
//! Coordinates a tokenizer run: command-line parsing, file reading, token
//! rendering, and diagnostic printing. Tokens go to stdout as
//! `<lexeme, category>`, one per line; diagnostics go to stderr.
//!
//! The exit-status contract is asymmetric on purpose: a missing input
//! argument is fatal (exit 1), while a file that cannot be opened is only
//! reported - the run produces no tokens and still exits 0.

use std::env;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use ctok_lex::Scanner;
use ctok_util::Handler;
use thiserror::Error;

/// Configuration for a tokenizer run
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub input_file: Option<PathBuf>,
    pub verbose: bool,
    pub help: bool,
    pub version: bool,
}

/// Fatal command-line errors. Any of these terminates the run with a
/// non-zero exit status before any scanning happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("no input file provided")]
    NoInputFile,
    #[error("unknown option: {0}")]
    UnknownOption(String),
    #[error("unexpected extra argument: {0}")]
    ExtraArgument(String),
}

/// Parse command line arguments
pub fn parse_args<I>(args: I) -> Result<Config, UsageError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = Config::default();

    for arg in args {
        if arg == "--help" || arg == "-h" {
            config.help = true;
            return Ok(config);
        } else if arg == "--version" || arg == "-V" {
            config.version = true;
            return Ok(config);
        } else if arg == "--verbose" || arg == "-v" {
            config.verbose = true;
        } else if arg.starts_with('-') {
            return Err(UsageError::UnknownOption(arg));
        } else if config.input_file.is_none() {
            config.input_file = Some(PathBuf::from(arg));
        } else {
            return Err(UsageError::ExtraArgument(arg));
        }
    }

    Ok(config)
}

/// Print help message
pub fn print_help() {
    println!("ctok v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: ctok [OPTIONS] <input file>");
    println!();
    println!("Options:");
    println!("  -h, --help           Print this help message");
    println!("  -V, --version        Print version information");
    println!("  -v, --verbose        Enable verbose output");
    println!();
    println!("Examples:");
    println!("  ctok main.c             Tokenize main.c");
    println!("  ctok -v main.c          Tokenize with a scan summary on stderr");
}

/// Print version
pub fn print_version() {
    println!("ctok {}", env!("CARGO_PKG_VERSION"));
}

/// Totals for one scanned input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScanSummary {
    /// Physical lines read
    pub lines: u32,
    /// Tokens emitted
    pub tokens: usize,
}

/// A tokenizer run over one source file.
pub struct Session {
    pub config: Config,
    pub diagnostics: Handler,
}

impl Session {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            diagnostics: Handler::new(),
        }
    }

    /// Scans `path`, rendering tokens to stdout and diagnostics to stderr.
    ///
    /// A file that cannot be opened (or fails mid-read) is reported and
    /// skipped; the run still counts as successful.
    pub fn scan_file(&self, path: &Path) {
        if self.config.verbose {
            eprintln!("[verbose] Scanning: {}", path.display());
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                eprintln!("error opening file {}: {}", path.display(), e);
                return;
            },
        };

        let stdout = io::stdout();
        match self.scan_reader(BufReader::new(file), &mut stdout.lock()) {
            Ok(summary) => {
                if self.config.verbose {
                    eprintln!(
                        "[verbose] Scanned {} lines, {} tokens, {} diagnostics",
                        summary.lines,
                        summary.tokens,
                        self.diagnostics.diagnostics().len()
                    );
                }
            },
            Err(e) => {
                eprintln!("error reading file {}: {}", path.display(), e);
            },
        }
    }

    /// Scans every line supplied by `reader`, writing rendered tokens to
    /// `out`. Diagnostics accumulate in the session handler and are printed
    /// to stderr as each line completes.
    ///
    /// End of input is the reader running dry, not an error.
    pub fn scan_reader<R: BufRead, W: Write>(
        &self,
        reader: R,
        out: &mut W,
    ) -> io::Result<ScanSummary> {
        let mut scanner = Scanner::new(&self.diagnostics);
        let mut summary = ScanSummary::default();
        let mut reported = 0;

        for line in reader.lines() {
            let line = line?;
            let tokens = scanner.scan_line(&line);
            for token in &tokens {
                writeln!(out, "{}", token)?;
            }
            summary.lines = scanner.line();
            summary.tokens += tokens.len();
            reported = self.report_new_diagnostics(reported);
        }

        Ok(summary)
    }

    /// Prints diagnostics recorded since the last call; returns the new
    /// watermark.
    fn report_new_diagnostics(&self, from: usize) -> usize {
        let diags = self.diagnostics.diagnostics();
        for diag in &diags[from..] {
            eprintln!("{}", diag);
        }
        diags.len()
    }
}

/// Driver entry point: parse arguments, then scan the input file.
pub fn main() -> anyhow::Result<()> {
    let config = parse_args(env::args().skip(1))?;

    if config.help {
        print_help();
        return Ok(());
    }

    if config.version {
        print_version();
        return Ok(());
    }

    let Some(path) = config.input_file.clone() else {
        return Err(UsageError::NoInputFile.into());
    };

    let session = Session::new(config);
    session.scan_file(&path);
    Ok(())
}
