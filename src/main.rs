use clap::{Parser, Subcommand};
use inscription::{
    domain::OrchestratorMode,
    service::{mock::generator, orchestrator::Orchestrator},
};

#[derive(Parser, Debug)]
#[command(name = "inscription", version, about = "An event inscription staging CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Path to the participant batch CSV file to stage and commit
    #[arg(value_name = "FILE")]
    file: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate dummy batch data to a file
    Generate {
        /// Output file path
        #[arg(short, long, default_value = "batch.csv", value_name = "FILE")]
        output: String,

        /// Number of participant rows to generate
        #[arg(short, long, default_value = "10", value_name = "COUNT")]
        count: usize,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Cli::parse();

    match args.command {
        Some(Commands::Generate { output, count }) => {
            generator(&output, count)?;
        }
        None => {
            let file = args
                .file
                .ok_or("Please provide a batch CSV file path or use 'generate'")?;

            let orchestrator = Orchestrator::new(OrchestratorMode::Csv { file_path: file }).await;
            let outcome = orchestrator.process().await?;
            Orchestrator::output_csv(&outcome)?;
        }
    }

    Ok(())
}
