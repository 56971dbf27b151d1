//! `seed-talents` — synthesizes fake talent aggregates via the generation API
//! and inserts each one atomically.
//!
//! Talents are processed strictly sequentially with a small delay between
//! iterations to stay under the API's rate limits. The first generation,
//! validation, or write failure ends the whole run; completed aggregates stay
//! inserted.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::Parser;
use rand_core::{OsRng, RngCore};
use sqlx::PgPool;

use talent_api::config::Config;
use talent_api::db::create_pool;
use talent_api::errors::AppError;
use talent_api::generator::GeneratorClient;
use talent_api::talent::aggregate::{NewResume, TalentAggregate};
use talent_api::talent::writer::insert_talent;

#[derive(Parser, Debug)]
#[command(name = "seed-talents", about = "Generate and insert sample talent records")]
struct Args {
    /// Number of talents to generate.
    #[arg(long, default_value_t = 1)]
    count: u32,

    /// Natural-language description every generated talent should match.
    #[arg(long)]
    profile: Option<String>,

    /// JSON file holding an array of profile descriptions; one is picked at
    /// random per talent. Ignored when --profile is set.
    #[arg(long, value_name = "FILE")]
    profiles_file: Option<PathBuf>,

    /// Print the full generated payload for each talent.
    #[arg(long)]
    verbose: bool,

    /// Suppress everything except per-talent result lines and errors.
    #[arg(long)]
    quiet: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Err(e) = run(args).await {
        println!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<()> {
    if args.count < 1 {
        bail!("Count must be a positive number");
    }

    let profiles = load_profiles(args.profiles_file.as_deref(), args.quiet)?;

    if !args.quiet {
        let source = if args.profile.is_some() {
            format!(" with profile: {}", args.profile.as_deref().unwrap_or(""))
        } else if !profiles.is_empty() {
            " using random profiles from file".to_string()
        } else {
            String::new()
        };
        println!("Will generate {} talent(s){source}...", args.count);
    }

    let config = Config::from_env()?;
    let pool = create_pool(&config.database_url).await?;
    let client = GeneratorClient::new(config.openai_api_key.clone());

    if !args.quiet {
        println!("Starting to generate {} sample talent(s)...", args.count);
    }

    let mut generated = 0u32;
    for _ in 0..args.count {
        generate_one(&client, &pool, &args, &profiles, generated + 1).await?;
        generated += 1;
        // Throttle to avoid external rate limiting — not a concurrency primitive.
        tokio::time::sleep(Duration::from_millis(100)).await;
    }

    if !args.quiet {
        println!("Successfully generated and inserted {generated} talent(s)!");
    }
    Ok(())
}

async fn generate_one(
    client: &GeneratorClient,
    pool: &PgPool,
    args: &Args,
    profiles: &[String],
    seq: u32,
) -> Result<i32> {
    let picked;
    let hint = match args.profile.as_deref() {
        Some(p) => Some(p),
        None if !profiles.is_empty() => {
            picked = profiles[(OsRng.next_u32() as usize) % profiles.len()].clone();
            if args.verbose {
                println!("Using profile: {picked}");
            }
            Some(picked.as_str())
        }
        None => None,
    };

    let profile = client
        .generate_profile(hint)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    if args.verbose {
        println!(
            "Generated talent data: {}",
            serde_json::to_string_pretty(&profile)?
        );
    }

    let resume_text = client
        .generate_resume(&profile)
        .await
        .map_err(|e| AppError::Generation(e.to_string()))?;

    let resume = NewResume {
        resume_filename: format!(
            "{}_{}_resume.txt",
            profile.talent.first_name.to_lowercase(),
            profile.talent.last_name.to_lowercase()
        ),
        resume_contents: resume_text.clone().into_bytes(),
        resume_text,
    };

    let aggregate = TalentAggregate::new(
        profile.talent,
        profile.addresses,
        profile.skills,
        profile.work_history,
        Some(resume),
    )?;

    let talent_id = insert_talent(pool, &aggregate).await?;

    // Guaranteed non-empty by aggregate validation.
    let home = &aggregate.addresses[0];
    println!(
        "Generated talent #{seq} (ID: {talent_id}) - {} {} - {}, {}",
        aggregate.talent.first_name, aggregate.talent.last_name, home.city, home.state_province
    );

    Ok(talent_id)
}

fn load_profiles(path: Option<&std::path::Path>, quiet: bool) -> Result<Vec<String>> {
    let Some(path) = path else {
        return Ok(vec![]);
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Profiles file '{}' not found", path.display()))?;
    let profiles: Vec<String> =
        serde_json::from_str(&raw).context("Invalid JSON in profiles file")?;
    if profiles.is_empty() {
        bail!("Profiles file must contain a non-empty array of profile descriptions");
    }
    if !quiet {
        println!("Loaded {} profiles from file", profiles.len());
    }
    Ok(profiles)
}
