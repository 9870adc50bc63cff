use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use vending::config::MachineSeed;
use vending::domain::denomination::to_major_units;
use vending::infrastructure::shared::SharedMachine;
use vending::interfaces::csv::operation_reader::OperationReader;
use vending::interfaces::csv::outcome_writer::{OutcomeRecord, OutcomeWriter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input operations CSV file
    input: PathBuf,

    /// Machine seed JSON file (products and coins). Uses the built-in seed if omitted.
    #[arg(long)]
    seed: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(path) => MachineSeed::from_path(path).into_diagnostic()?,
        None => MachineSeed::default(),
    };
    let machine = SharedMachine::new(seed.build().into_diagnostic()?);

    let file = File::open(cli.input).into_diagnostic()?;
    let reader = OperationReader::new(file);
    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());

    for command in reader.commands() {
        match command {
            Ok(command) => {
                let result = machine.execute(command.clone()).await;
                if let Err(e) = &result {
                    info!(operation = command.name(), "Operation rejected: {}", e);
                }
                writer
                    .write(&OutcomeRecord::new(&command, &result))
                    .into_diagnostic()?;
            }
            Err(e) => {
                error!("Error reading operation: {}", e);
            }
        }
    }
    writer.flush().into_diagnostic()?;

    let machine = machine.into_inner().await;
    info!(
        products = machine.catalog().len(),
        cash = %to_major_units(machine.cash_total()),
        "Final machine state"
    );

    Ok(())
}
