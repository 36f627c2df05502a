use std::{
    fs::{self, File},
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use coolex::{
    config::{LexerOptions, DEFAULT_MAX_STRING_LENGTH},
    errors::errors::{Error, ErrorImpl, ErrorTip},
    lexer::{
        lexer::Lexer,
        registry::Registry,
        sink::{LineSink, TokenSink},
        tokens::Token,
    },
    render_diagnostic,
};
use tracing::{debug, error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Tokenize COOL source into one line per token", long_about = None)]
struct Cli {
    /// Source file to tokenize
    #[arg(default_value = "ioFiles/inputFile.txt")]
    input: PathBuf,

    /// Where to write the tokens, `-` for stdout
    #[arg(short, long, default_value = "ioFiles/outputFile.txt")]
    output: PathBuf,

    /// Longest accepted string literal, in characters
    #[arg(long, default_value_t = DEFAULT_MAX_STRING_LENGTH)]
    max_string_length: usize,

    /// Consume comments without emitting them
    #[arg(long)]
    skip_comments: bool,

    /// Print every token definition and its patterns before scanning
    #[arg(long)]
    dump_registry: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(io::stderr)
        .init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            display_error(&error);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let options = LexerOptions::default()
        .with_max_string_length(cli.max_string_length)
        .with_comments(!cli.skip_comments);
    let registry = Registry::cool(&options)?;

    if cli.dump_registry {
        write_registry_dump(&registry, io::stderr().lock())?;
    }

    let source = fs::read_to_string(&cli.input).map_err(|source| ErrorImpl::Io {
        path: cli.input.clone(),
        source,
    })?;

    debug!(input = %cli.input.display(), bytes = source.len(), "source loaded");

    let start = Instant::now();
    let file_name = cli.input.to_string_lossy();

    let emitted = if cli.output == Path::new("-") {
        let stdout = io::stdout();
        scan_into(&registry, &source, &file_name, stdout.lock())?
    } else {
        let file = File::create(&cli.output).map_err(|source| ErrorImpl::Io {
            path: cli.output.clone(),
            source,
        })?;
        scan_into(&registry, &source, &file_name, BufWriter::new(file))?
    };

    info!(emitted, elapsed = ?start.elapsed(), "tokenized");
    Ok(())
}

/// The dump goes straight to `writer`, whatever the log filter says.
fn write_registry_dump<W: Write>(registry: &Registry, mut writer: W) -> Result<(), Error> {
    writeln!(writer, "token definitions:")?;
    write!(writer, "{}", registry.dump())?;
    writer.flush()?;
    Ok(())
}

fn scan_into<W: Write>(
    registry: &Registry,
    source: &str,
    file_name: &str,
    writer: W,
) -> Result<usize, Error> {
    let mut sink = ReportingSink {
        inner: LineSink::new(writer),
        source,
        file_name,
    };

    let emitted = Lexer::new(registry, source).drain_into(&mut sink)?;
    sink.inner.into_inner()?;
    Ok(emitted)
}

/// Writes tokens through, warning about every diagnostic on the way.
struct ReportingSink<'a, W: Write> {
    inner: LineSink<W>,
    source: &'a str,
    file_name: &'a str,
}

impl<W: Write> TokenSink for ReportingSink<'_, W> {
    fn emit(&mut self, token: Token) -> Result<(), Error> {
        if token.is_error() {
            warn!(
                "{}",
                render_diagnostic(&token, self.source, self.file_name).trim_end()
            );
        }
        self.inner.emit(token)
    }
}

fn display_error(error: &Error) {
    match error.get_tip() {
        ErrorTip::None => error!("{}: {}", error.get_error_name(), error),
        tip => error!("{}: {} ({})", error.get_error_name(), error, tip),
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use coolex::{config::LexerOptions, lexer::registry::Registry};

    use super::{write_registry_dump, Cli};

    #[test]
    fn test_registry_dump_ignores_log_level() {
        let cli = Cli::parse_from(["coolex", "--dump-registry", "-o", "-"]);
        assert!(cli.dump_registry);
        assert!(!cli.verbose);

        let registry = Registry::cool(&LexerOptions::default()).unwrap();
        let mut out = Vec::new();
        write_registry_dump(&registry, &mut out).unwrap();

        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("token definitions:\nKEYWORD\t"));
        assert!(out.ends_with(&registry.dump()));
    }
}
