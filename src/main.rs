use bridge_contracts::Validated;
use bridge_contracts::application::{schema_for, validate_request, validate_response};
use bridge_contracts::domain::endpoints::Operation;
use bridge_contracts::interfaces::csv::balance_writer::BalanceWriter;
use bridge_contracts::interfaces::json::document_reader::DocumentReader;
use bridge_contracts::logging::init_logging;
use clap::{Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use serde_json::Value;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the Bridge endpoint paths
    Endpoints {
        /// Prefix every path with this base URL
        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate JSON documents against an operation's contract
    Validate(ValidateArgs),
}

#[derive(Parser)]
struct ValidateArgs {
    /// Operation whose contract applies
    #[arg(value_enum)]
    operation: OperationArg,

    /// Input JSON file. Reads stdin when omitted or "-".
    input: Option<PathBuf>,

    /// Validate the operation's response instead of its request body
    #[arg(long)]
    response: bool,

    /// Treat the input as newline-delimited JSON, one document per line
    #[arg(long)]
    lines: bool,

    /// Output format for accepted documents
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OperationArg {
    PrefundedAccountBalance,
    PrefundedAccountTransfer,
    Webhook,
}

impl From<OperationArg> for Operation {
    fn from(arg: OperationArg) -> Self {
        match arg {
            OperationArg::PrefundedAccountBalance => Operation::GetPrefundedAccountBalance,
            OperationArg::PrefundedAccountTransfer => Operation::CreatePrefundedAccountTransfer,
            OperationArg::Webhook => Operation::ProcessWebhook,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    /// CSV for balance listings; JSON for everything else
    Csv,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    match cli.command {
        Command::Endpoints { base_url } => print_endpoints(base_url.as_deref()),
        Command::Validate(args) => validate(args),
    }
}

fn print_endpoints(base_url: Option<&str>) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for operation in Operation::ALL {
        let target = match base_url {
            Some(base) => operation.url(base),
            None => operation.path().to_string(),
        };
        writeln!(out, "{}\t{}", operation, target).into_diagnostic()?;
    }
    Ok(())
}

fn validate(args: ValidateArgs) -> Result<()> {
    let operation = Operation::from(args.operation);
    let source: Box<dyn Read> = match &args.input {
        Some(path) if path.as_os_str() != "-" => Box::new(File::open(path).into_diagnostic()?),
        _ => Box::new(io::stdin()),
    };
    let reader = DocumentReader::new(BufReader::new(source));

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.lines {
        let raw = reader.document().into_diagnostic()?;
        let validated = check(operation, args.response, &raw).into_diagnostic()?;
        return emit(&mut out, &validated, args.format, true);
    }

    // Keep going past bad lines, like a batch import would
    let mut rejected = 0usize;
    for (line, document) in reader.lines() {
        match document.and_then(|raw| check(operation, args.response, &raw)) {
            Ok(validated) => emit(&mut out, &validated, args.format, false)?,
            Err(e) => {
                eprintln!("Rejected line {}: {}", line, e);
                rejected += 1;
            }
        }
    }
    if rejected > 0 {
        return Err(miette!("{} document(s) rejected", rejected));
    }
    Ok(())
}

fn check(
    operation: Operation,
    response: bool,
    raw: &Value,
) -> bridge_contracts::Result<Validated> {
    if response || schema_for(operation).body.is_none() {
        Ok(validate_response(operation, raw)?)
    } else {
        validate_request(operation, raw)
    }
}

fn emit<W: Write>(
    out: &mut W,
    validated: &Validated,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    if let (OutputFormat::Csv, Validated::Balances(entries)) = (format, validated) {
        return BalanceWriter::new(out).write_entries(entries).into_diagnostic();
    }
    if pretty {
        serde_json::to_writer_pretty(&mut *out, validated).into_diagnostic()?;
    } else {
        serde_json::to_writer(&mut *out, validated).into_diagnostic()?;
    }
    writeln!(out).into_diagnostic()?;
    Ok(())
}
