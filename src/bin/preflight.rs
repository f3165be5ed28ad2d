use anyhow::Context;
use books_api::config::{self, DbConfig};
use books_api::transport::http::ApiDoc;
use books_api::DatabaseService;
use utoipa::OpenApi;

fn usage_and_exit() -> ! {
    eprintln!(
        "Usage: cargo run --bin preflight -- [--openapi]\n\
         \n\
         Without flags: loads .env, connects to Postgres, ensures the books table\n\
         and reports the row count.\n\
         \n\
         --openapi   print the OpenAPI document for the HTTP API and exit\n\
         \n\
         Requires env vars (usually from .env):\n\
           DB_HOST, DB_PORT, DB_USER, DB_PASSWORD, DB_NAME, DB_SSL_MODE\n"
    );
    std::process::exit(2);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "-h" || a == "--help") {
        usage_and_exit();
    }

    if args.iter().any(|a| a == "--openapi") {
        println!("{}", ApiDoc::openapi().to_pretty_json()?);
        return Ok(());
    }

    config::load_env_file().context("could not load .env")?;
    let db_config = DbConfig::from_env();

    println!("> Preflight:");
    println!("  DB_HOST={}", db_config.host);
    println!("  DB_PORT={}", db_config.port);
    println!("  DB_USER={}", db_config.user);
    println!("  DB_NAME={}", db_config.dbname);
    println!("  DB_SSL_MODE={}", db_config.sslmode);

    let db_service = DatabaseService::connect(&db_config)
        .await
        .context("could not connect to database")?;
    println!("  Database reachable.");

    db_service
        .ensure_schema()
        .await
        .context("could not create books table")?;
    println!("  books table present.");

    let count = db_service.count_books().await?;
    println!("  books rows: {}", count);

    println!("> Preflight OK.");
    Ok(())
}
