use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};

use uniq::{CollapseEngine, UniqConfig, UniqError};

/// Operand naming the standard streams
const STDIO_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "uniq")]
#[command(about = "Collapse consecutive duplicate lines from a text stream")]
#[command(version)]
struct Cli {
    /// Precede each output line with the number of times it occurred
    #[arg(short = 'c')]
    count: bool,

    /// Only output lines that were repeated
    #[arg(short = 'd')]
    repeated: bool,

    /// Only output lines that were not repeated
    #[arg(short = 'u')]
    unique: bool,

    /// Skip the first N whitespace-delimited fields when comparing
    #[arg(short = 'f', value_name = "N", default_value_t = 0)]
    skip_fields: usize,

    /// Skip the first N characters (after any skipped fields) when comparing
    #[arg(short = 's', value_name = "N", default_value_t = 0)]
    skip_chars: usize,

    /// Debug mode - show processing details
    #[arg(long)]
    debug: bool,

    /// Maximum line length
    #[arg(long, default_value = "1048576")] // 1MB
    max_line_length: usize,

    /// Buffer size for I/O
    #[arg(long, default_value = "65536")] // 64KB
    buffer_size: usize,

    /// Input path and output path ("-" or omitted: standard streams)
    #[arg(value_name = "FILE")]
    operands: Vec<String>,
}

impl Cli {
    /// Resolve the positional operands to (input, output), rejecting
    /// surplus operands and the "-"/"-" self-clobber configuration
    /// before any I/O happens. Two equal non-"-" paths are not checked.
    fn resolve_paths(&self) -> Result<(String, String), UniqError> {
        if self.operands.len() > 2 {
            return Err(UniqError::TooManyOperands);
        }

        let input = self
            .operands
            .first()
            .cloned()
            .unwrap_or_else(|| STDIO_PATH.to_string());
        let output = self
            .operands
            .get(1)
            .cloned()
            .unwrap_or_else(|| STDIO_PATH.to_string());

        if input == STDIO_PATH && output == STDIO_PATH {
            return Err(UniqError::OutputClobbersInput);
        }

        Ok((input, output))
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("uniq: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), UniqError> {
    let (input_path, output_path) = cli.resolve_paths()?;

    let config = UniqConfig {
        skip_fields: cli.skip_fields,
        skip_chars: cli.skip_chars,
        count: cli.count,
        repeated_only: cli.repeated,
        unique_only: cli.unique,
        debug: cli.debug,
        buffer_size: cli.buffer_size,
        max_line_length: cli.max_line_length,
    };

    // Set up input
    let input: Box<dyn BufRead> = if input_path != STDIO_PATH {
        let file = File::open(&input_path).map_err(|e| UniqError::OpenInput {
            path: input_path.clone(),
            source: e,
        })?;
        Box::new(BufReader::with_capacity(config.buffer_size, file))
    } else {
        if config.debug {
            eprintln!("uniq: reading from stdin");
        }
        Box::new(BufReader::with_capacity(config.buffer_size, io::stdin()))
    };

    // Set up output
    let mut output: Box<dyn Write> = if output_path != STDIO_PATH {
        let file = File::create(&output_path).map_err(|e| UniqError::OpenOutput {
            path: output_path.clone(),
            source: e,
        })?;
        Box::new(BufWriter::with_capacity(config.buffer_size, file))
    } else {
        Box::new(BufWriter::with_capacity(config.buffer_size, io::stdout()))
    };

    let mut engine = CollapseEngine::new(config);
    let stats = engine.process_stream(input, &mut output)?;

    // Ensure output is flushed; a closed pipe here is not a failure
    if let Err(e) = output.flush() {
        if e.kind() != io::ErrorKind::BrokenPipe {
            return Err(UniqError::IoError(e));
        }
    }

    if cli.debug {
        eprintln!("Final statistics:");
        eprintln!("  Lines read: {}", stats.lines_read);
        eprintln!("  Lines output: {}", stats.lines_output);
        eprintln!("  Lines suppressed: {}", stats.lines_suppressed);
        eprintln!("  Processing time: {:?}", stats.processing_time);
    }

    Ok(())
}
