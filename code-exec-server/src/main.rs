use clap::{Args as ClapArgs, Parser, Subcommand};
use code_exec::{CodeExecutor, ExecutionRequest, ExecutorConfig};
use code_exec_server::{create_app, run_server};
use std::{net::SocketAddr, path::PathBuf, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    remote: RemoteArgs,

    #[command(subcommand)]
    command: Command,
}

#[derive(ClapArgs, Debug)]
struct RemoteArgs {
    /// Remote execute endpoint
    #[arg(long, env = "SNIPSHARE_EXEC_ENDPOINT", default_value = code_exec::DEFAULT_ENDPOINT)]
    endpoint: String,

    /// User-Agent sent to the remote service
    #[arg(long, env = "SNIPSHARE_EXEC_USER_AGENT", default_value = code_exec::DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Local bound on each remote call, in seconds
    #[arg(long, env = "SNIPSHARE_EXEC_REQUEST_TIMEOUT", default_value = "20")]
    request_timeout: u64,

    /// Compile-phase limit enforced remotely, in milliseconds
    #[arg(long, env = "SNIPSHARE_EXEC_COMPILE_TIMEOUT", default_value = "10000")]
    compile_timeout: u64,

    /// Run-phase limit enforced remotely, in milliseconds
    #[arg(long, env = "SNIPSHARE_EXEC_RUN_TIMEOUT", default_value = "5000")]
    run_timeout: u64,
}

impl From<RemoteArgs> for ExecutorConfig {
    fn from(args: RemoteArgs) -> Self {
        ExecutorConfig::default()
            .with_endpoint(args.endpoint)
            .with_user_agent(args.user_agent)
            .with_request_timeout(Duration::from_secs(args.request_timeout))
            .with_phase_timeouts(args.compile_timeout, args.run_timeout)
    }
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the execution API over HTTP
    Serve {
        /// Server address to listen on
        #[arg(short, long, env = "SNIPSHARE_EXEC_ADDR", default_value = "0.0.0.0:3000")]
        addr: SocketAddr,
    },
    /// Run a single source file and print the outcome
    Run {
        /// Canonical language id
        #[arg(short, long)]
        language: String,

        /// Source file to submit
        file: PathBuf,

        /// File whose contents are fed to stdin
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// List supported languages
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let executor = CodeExecutor::new(args.remote.into())?;

    match args.command {
        Command::Serve { addr } => {
            let app = create_app(executor);
            run_server(app, addr).await?;
        }
        Command::Run {
            language,
            file,
            input,
        } => {
            let code = tokio::fs::read_to_string(&file).await?;
            let input = match input {
                Some(path) => tokio::fs::read_to_string(path).await?,
                None => String::new(),
            };

            let request = ExecutionRequest::new(language, code).with_input(input);
            let result = executor.execute(&request).await;
            println!("{}", result);
            if !result.success {
                std::process::exit(1);
            }
        }
        Command::Languages => {
            for descriptor in code_exec::LANGUAGES {
                println!(
                    "{:<12}{:<10}.{}",
                    descriptor.canonical_id,
                    descriptor.version_or_latest(),
                    descriptor.file_extension
                );
            }
        }
    }

    Ok(())
}
