use std::path::PathBuf;
use std::time::Duration;

use brain_quest::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
use brain_quest::{logging, Config, LogConfig, QuestionSource, Quiz};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// URL the question set is fetched from
    #[arg(long, env = "BRAIN_QUEST_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// JSON file to load the questions from instead of the endpoint
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// Request timeout in milliseconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT.as_millis() as u64)]
    timeout_ms: u64,

    /// File to write diagnostics to
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let source = match args.questions {
            Some(path) => QuestionSource::File(path),
            None => QuestionSource::Remote {
                endpoint: args.endpoint,
            },
        };

        Self {
            source,
            timeout: Duration::from_millis(args.timeout_ms),
            log: LogConfig {
                file: args.log_file,
                level: args.log_level,
            },
        }
    }
}

#[tokio::main]
async fn main() {
    let config = Config::from(Args::parse());

    if let Err(e) = logging::init(&config.log) {
        eprintln!("Error setting up logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = Quiz::new(config).run().await {
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
