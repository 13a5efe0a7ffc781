use clap::{Parser, Subcommand};
use slotforge::error::SfResult;
use slotforge::scorer::Heuristic;
use slotforge::season::{loader, Season, SeasonSpec};
use std::process;
use std::sync::Arc;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Matchup list: CSV with a `home,away` header
    #[arg(global = true, short, long, default_value = "data/demo/matchups.csv")]
    matchups: String,

    /// Season description (JSON), or `nfl-2018` for the built-in 2018 NFL
    /// season, which needs the full 256-matchup list
    #[arg(global = true, short, long, default_value = "data/demo/season.json")]
    season: String,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Search(cmd::search::SearchArgs),
    Validate(cmd::validate::ValidateArgs),
    Show(cmd::show::ShowArgs),
}

const NFL_2018: &str = "nfl-2018";

fn main() {
    let cli = Cli::parse();

    let level = if cli.debug { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    info!("🚀 Initializing SlotForge...");

    let heuristics = match &cli.command {
        Commands::Search(args) => args.params.heuristics.clone(),
        Commands::Validate(args) => args.heuristics.clone(),
        Commands::Show(args) => args.heuristics.clone(),
    };

    let season = load_season(&cli, &heuristics).unwrap_or_else(|e| {
        error!("❌ FATAL ERROR LOADING SEASON:");
        error!("   {}", e);
        process::exit(1);
    });

    let result = match cli.command {
        Commands::Search(args) => cmd::search::run(args, season),
        Commands::Validate(args) => cmd::validate::run(args, season),
        Commands::Show(args) => cmd::show::run(args, season),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}

fn load_season(cli: &Cli, heuristics: &[Heuristic]) -> SfResult<Arc<Season>> {
    let league = loader::load_matchups_from_path(&cli.matchups)?;

    let spec = match cli.season.as_str() {
        NFL_2018 => {
            info!("📅 Using built-in 2018 NFL season");
            SeasonSpec::nfl_2018()
        }
        path => SeasonSpec::load_from_file(path)?,
    };

    let season = Season::from_spec(league, &spec)?.with_heuristics(heuristics);
    info!(
        "🏈 {} teams | {} matchups | {} weeks | heuristics: {:?}",
        season.num_teams(),
        season.num_matchups(),
        season.num_weeks(),
        season.heuristics()
    );
    Ok(Arc::new(season))
}
