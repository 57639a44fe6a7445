use crate::demo::{
    run_demo, run_questions, run_results, run_score, DemoArgs, QuestionsArgs, ScoreArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use prism_persona::config::AppConfig;
use prism_persona::error::AppError;
use prism_persona::telemetry;

#[derive(Parser, Debug)]
#[command(
    name = "Prism Persona",
    about = "Score Big Five personality assessments from the command line or over HTTP",
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
    /// List the questionnaire items
    Questions(QuestionsArgs),
    /// Score an answers file (JSON map, saved progress, or question_id,answer CSV)
    Score(ScoreArgs),
    /// Answer every question automatically and print the resulting profile
    Demo(DemoArgs),
    /// Print the last saved result
    Results,
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

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;

    match command {
        Command::Serve(args) => server::run(config, args).await,
        Command::Questions(args) => {
            run_questions(args);
            Ok(())
        }
        Command::Score(args) => run_score(&config, args),
        Command::Demo(args) => run_demo(&config, args),
        Command::Results => {
            run_results(&config);
            Ok(())
        }
    }
}
