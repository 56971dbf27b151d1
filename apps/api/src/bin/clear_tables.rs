//! `clear-tables` — truncates the five talent tables child-first.
//!
//! Referential-integrity checks are suspended for the duration so the fixed
//! truncation order never trips a foreign key, then re-enabled. Everything
//! runs on one connection; `session_replication_role` is per-session.

use anyhow::Result;
use sqlx::Connection;

use talent_api::config::Config;

const TABLES: &[&str] = &[
    "addresses",
    "skills",
    "work_history",
    "talent_resumes",
    "talents",
];

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    let config = Config::from_env()?;

    let mut conn = sqlx::PgConnection::connect(&config.database_url).await?;
    println!("Connected to database successfully.");

    sqlx::query("SET session_replication_role = 'replica'")
        .execute(&mut conn)
        .await?;
    println!("Referential integrity checks disabled.");

    for table in TABLES {
        sqlx::query(&format!("TRUNCATE TABLE {table}"))
            .execute(&mut conn)
            .await?;
        println!("Truncated table: {table}");
    }

    sqlx::query("SET session_replication_role = 'origin'")
        .execute(&mut conn)
        .await?;
    println!("Referential integrity checks re-enabled.");

    println!("All tables cleared successfully!");
    Ok(())
}
