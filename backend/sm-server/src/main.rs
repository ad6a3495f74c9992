use sm_server::cli::{Cli, Command, create_superuser};
use sm_server::{AppState, build_router, logger};

use std::error::Error;

use clap::Parser;
use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    // .env is optional
    if let Err(e) = dotenvy::dotenv()
        && !e.not_found()
    {
        return Err(e.into());
    }

    // Load and validate configuration
    let config = sm_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting sm-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = sm_db::connect(&database_path).await?;

    info!("Running database migrations...");
    sm_db::migrate(&pool).await?;
    info!("Migrations complete");

    match cli.into_command() {
        Command::CreateSuperuser {
            email,
            password,
            username,
        } => {
            let user = create_superuser(&pool, &email, &password, username.as_deref()).await?;
            info!("Superuser {} ready", user.id);
            return Ok(());
        }
        Command::Serve => {}
    }

    let app_state = AppState::from_config(pool, &config)?;
    let app = build_router(app_state);

    let bind_addr = config.bind_addr();
    let listener = TcpListener::bind(&bind_addr).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), initiating graceful shutdown"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Graceful shutdown complete");
    Ok(())
}
