use clap::{Args, Parser, Subcommand};

use super::server;
use crate::cases::CaseError;
use crate::error::AppError;
use crate::scoring;

#[derive(Parser, Debug)]
#[command(
    name = "SmartDCA Case Service",
    about = "Run the debt-collection case service or score a case from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a hypothetical case without touching the store
    Assess(AssessArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Overdue amount
    #[arg(long)]
    amount: f64,
    /// Days the amount has been overdue
    #[arg(long)]
    days_overdue: u32,
}

pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
    }
}

fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    if args.amount.is_sign_negative() || !args.amount.is_finite() {
        return Err(CaseError::InvalidAmount {
            amount: args.amount,
        }
        .into());
    }

    let assessment = scoring::assess(args.amount, args.days_overdue);
    println!(
        "Case assessment for ${:.2}, {} days overdue",
        args.amount, args.days_overdue
    );
    println!("- Priority: {}", assessment.priority.label());
    println!("- Recovery probability: {}%", assessment.recovery_probability);
    println!("- Risk score: {}/10", assessment.risk_score);
    Ok(())
}
