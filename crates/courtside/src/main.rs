// courtside entry point.
//
// Startup sequence:
// 1. Load config (the log directory comes from it)
// 2. Initialize tracing (log to file, stdout carries the report), then
//    record where the config came from
// 3. Load the league tables, print load progress
// 4. Optionally clean, then parse
// 5. Print the per-season offensive rankings

use courtside::config::{self, LoggingConfig};
use courtside::report;
use courtside_core::clean::clean_all;
use courtside_core::{load_tables, parse_all};

use anyhow::Context;
use std::path::Path;
use tracing::{info, warn};

fn main() -> anyhow::Result<()> {
    // 1. Load config
    let config = config::load_config().context("failed to load configuration")?;

    // 2. Initialize tracing
    init_tracing(&config.logging)?;
    info!("courtside starting up");
    match &config.source {
        Some(path) => info!("Config read from {}", path.display()),
        None => info!("No config/courtside.toml found, using defaults"),
    }
    info!(
        "Config loaded: data={}, seasons {}..={}",
        config.data.base_path, config.report.first_year, config.report.last_year
    );

    // 3. Load tables
    let base = Path::new(&config.data.base_path);
    let raw = load_tables(base)
        .with_context(|| format!("failed to load league tables from {}", base.display()))?;
    print!("{}", report::render_load_summary(base, &raw));
    println!();

    // 4. Clean and parse
    let raw = if config.data.clean {
        info!("cleaning raw tables");
        clean_all(&raw).context("failed to clean league tables")?
    } else {
        raw
    };
    let league = parse_all(&raw).context("failed to parse league tables")?;

    // 5. Rankings
    let Some(teams) = league.teams.as_ref() else {
        warn!("teams table absent, no rankings to print");
        println!("No teams table loaded; nothing to rank.");
        return Ok(());
    };
    for year in config.report.first_year..=config.report.last_year {
        let rankings = report::rank_by_offense(teams, year);
        print!("{}", report::render_rankings(year, &rankings, config.report.top));
    }

    info!("courtside finished");
    Ok(())
}

/// Initialize tracing to log to a file, keeping stdout for the report.
fn init_tracing(logging: &LoggingConfig) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join(&logging.directory);
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("courtside.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter)),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
