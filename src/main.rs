use clap::{Parser, Subcommand};
use diesel_migrations::MigrationHarness;
use dotenvy::dotenv;
use tracing::info;

use pizzeria_service::handlers::{app, AppState};
use pizzeria_service::{establish_pool, seed, DbPool, MIGRATIONS};

#[derive(Parser)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,
    /// Load the demo dataset into the store
    Seed,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let database_url =
        std::env::var("DATABASE_URL").unwrap_or_else(|_| "pizzeria.db".to_string());
    let pool = establish_pool(&database_url)?;
    {
        let mut conn = pool.get()?;
        conn.run_pending_migrations(MIGRATIONS)?;
    }

    match &cli.command {
        Commands::Serve => serve(pool).await,
        Commands::Seed => {
            let mut conn = pool.get()?;
            seed::run(&mut conn)?;
            Ok(())
        }
    }
}

async fn serve(pool: DbPool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let state = AppState { pool };
    let app = app(state);

    let addr = std::env::var("LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:5555".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("pizzeria service listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
