use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use tokio::main;

use musicbox::config::Config;
use musicbox::{app, DatabaseState};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, short, default_value_t = 3)]
    verbosity: usize,
    #[arg(long, short, default_value_t = false)]
    quiet: bool,
    #[arg(long, short)]
    config: String,
}

#[main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(err) = stderrlog::new()
        .verbosity(args.verbosity)
        .quiet(args.quiet)
        .timestamp(stderrlog::Timestamp::Millisecond)
        .init()
    {
        eprintln!("Could not initialise logging: {}", err);
        return ExitCode::FAILURE;
    }

    info!("Configuration path: {}", args.config);
    let config = match Config::load(&args.config) {
        Ok(config) => config,
        Err(err) => {
            error!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    let mut options = ConnectOptions::new(config.database.to_owned());
    options
        .max_connections(config.max_connections)
        .sqlx_logging(false);
    let connection = match Database::connect(options).await {
        Ok(connection) => connection,
        Err(err) => {
            error!("Error connecting to database: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = Migrator::up(&connection, None).await {
        error!("Error applying migrations: {}", err);
        return ExitCode::FAILURE;
    }

    let state = DatabaseState {
        connection,
        pagination: config.pagination,
    };
    let router = app(state);

    let address = config.address();
    let listener = match tokio::net::TcpListener::bind(&address).await {
        Ok(listener) => listener,
        Err(err) => {
            error!("Could not bind {}: {}", address, err);
            return ExitCode::FAILURE;
        }
    };
    info!("Listening on {}", address);
    info!(
        "Default page size {}, at most {} musics per page",
        config.pagination.default_page_size, config.pagination.max_page_size
    );

    if let Err(err) = axum::serve(listener, router).await {
        error!("Server stopped: {}", err);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
