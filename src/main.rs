use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process,
    time::Instant,
};

use clap::{Parser, ValueEnum};
use ocl_lexer::{
    errors::errors::{Error, ErrorTip},
    format::{format_json, format_located, format_raw, format_summary},
    lexer::lexer::Lexer,
    Token,
};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// One `Kind<TAB>"text"` line per token.
    Raw,
    /// JSON array of tokens.
    Json,
    /// Token counts per kind.
    Summary,
}

/// Tokenize OCL (Object Constraint Language) source and print the tokens.
#[derive(Parser)]
#[command(name = "ocl-lex", version, about)]
struct Cli {
    /// Input file, or `-` to read standard input.
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Raw)]
    format: Format,

    /// Prefix raw output lines with the token's `line:column`.
    #[arg(short, long)]
    locate: bool,

    /// Enable debug logging (overridden by RUST_LOG).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "ocl_lexer=debug" } else { "ocl_lexer=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let source = match read_source(&cli.input) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: could not read '{}': {}", cli.input.display(), err);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let lexer = match Lexer::new() {
        Ok(lexer) => lexer,
        Err(err) => {
            display_error(&err);
            process::exit(2);
        }
    };
    debug!(rules = lexer.rules().len(), "lexer ready in {:?}", start.elapsed());

    let tokenize_start = Instant::now();
    let tokens: Vec<Token> = lexer.tokenize(&source).collect();
    info!(tokens = tokens.len(), bytes = source.len(), "tokenized in {:?}", tokenize_start.elapsed());

    let output = match cli.format {
        Format::Raw if cli.locate => format_located(tokens),
        Format::Raw => format_raw(tokens),
        Format::Summary => format_summary(tokens),
        Format::Json => match format_json(tokens) {
            Ok(json) => json + "\n",
            Err(err) => {
                display_error(&err);
                process::exit(2);
            }
        },
    };

    print!("{}", output);
}

fn read_source(input: &Path) -> io::Result<String> {
    if input.as_os_str() == "-" {
        let mut source = String::new();
        io::stdin().read_to_string(&mut source)?;
        Ok(source)
    } else {
        fs::read_to_string(input)
    }
}

fn display_error(error: &Error) {
    /*
        error: CyclicInclude (Rule-set `name` includes itself through ...)
        -> name[12]
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", error.get_location());
    eprintln!("   {}", error.get_kind());
}
