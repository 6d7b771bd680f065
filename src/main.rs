use bankacct::application::teller::Teller;
use bankacct::interfaces::console::session::Session;
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use rust_decimal::Decimal;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Initial balance. When omitted it is read from standard input.
    #[arg(long, allow_negative_numbers = true)]
    initial_balance: Option<Decimal>,

    /// Identifier assigned to the account.
    #[arg(long, default_value = "123456")]
    account_id: String,

    /// Print the final account state as JSON when the session ends.
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), io::stderr());

    let account = session
        .open_account(&cli.account_id, cli.initial_balance)
        .into_diagnostic()?;
    let account = session.run(Teller::new(account)).into_diagnostic()?;

    if cli.summary {
        session.write_summary(&account).into_diagnostic()?;
    }

    Ok(())
}
