//! Fetch the current fixtures and print the fantasy league table as JSON.
//!
//! Logs go to stderr; stdout carries only the JSON document.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use scoreboard_core::constants::DEFAULT_FIXTURES_URL;
use scoreboard_core::{
    compute_standings, parse_fixtures, Competition, Fixture, FixtureClient, Result, Roster,
    SourceConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum, Eq, PartialEq)]
enum Report {
    /// Contestant table plus per-team details
    Standings,
    /// Breakdown for every team in the competition
    Teams,
}

#[derive(Debug, Parser)]
#[command(name = "standings", about = "Fantasy league standings from tournament fixtures")]
struct Cli {
    /// League roster (TOML)
    #[arg(long, env = "ROSTER_FILE", default_value = "rosters/worldcup2018.toml")]
    roster: PathBuf,

    #[arg(long, env = "FIXTURES_URL", default_value = DEFAULT_FIXTURES_URL)]
    fixtures_url: String,

    /// football-data.org API token
    #[arg(long, env = "FOOTBALL_DATA_TOKEN")]
    api_token: Option<String>,

    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Read fixtures from a local JSON payload instead of fetching
    #[arg(long)]
    fixtures_file: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Report::Standings)]
    report: Report,

    #[arg(long)]
    pretty: bool,
}

async fn load_fixtures(cli: &Cli) -> Result<Vec<Fixture>> {
    if let Some(path) = &cli.fixtures_file {
        info!(path = %path.display(), "reading fixtures from file");
        let raw = std::fs::read_to_string(path)?;
        return parse_fixtures(&raw);
    }

    let client = FixtureClient::new(SourceConfig {
        url: cli.fixtures_url.clone(),
        api_token: cli.api_token.clone(),
        timeout: Duration::from_secs(cli.timeout_secs),
    })?;
    client.fetch_fixtures().await
}

async fn run(cli: Cli) -> Result<()> {
    let fixtures = load_fixtures(&cli).await?;

    let output = match cli.report {
        Report::Standings => {
            let roster = Roster::read_from_file(&cli.roster)?;
            roster.unknown_teams(&fixtures);
            let standings = compute_standings(&fixtures, &roster);
            if let Some(leader) = standings.standings.first() {
                info!(leader = %leader.name, points = leader.points, "standings computed");
            }
            serde_json::to_value(standings)?
        }
        Report::Teams => serde_json::to_value(Competition::new(fixtures).team_scores())?,
    };

    let rendered = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scoreboard_core=info,standings=info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
