use crate::analysis::{StatCategory, calculate_stats, interpolated_median, season_summaries};
use crate::cli::Args;
use crate::config::Config;
use crate::data_fetcher::aggregate::{GameLogOutcome, GameQuery};
use crate::data_fetcher::api::{SiteClient, current_season, recent_seasons, season_label};
use crate::data_fetcher::models::{GameRecord, Venue};
use crate::data_fetcher::player_id::PlayerLookup;
use crate::data_fetcher::roster::Roster;
use crate::error::AppError;
use crate::server;
use std::fmt::Write;
use tracing::info;

/// Validates command line argument combinations.
///
/// Returns an error if incompatible arguments are used together.
pub fn validate_args(args: &Args) -> Result<(), AppError> {
    if args.serve && args.search.is_some() {
        return Err(AppError::config_error(
            "Cannot use --serve and --search together",
        ));
    }
    if args.games == 0 {
        return Err(AppError::config_error("--games must be at least 1"));
    }
    if args.seasons == 0 && !args.current_only {
        return Err(AppError::config_error("--seasons must be at least 1"));
    }
    if let Some(location) = &args.location {
        parse_location(location)?;
    }
    Ok(())
}

fn parse_location(code: &str) -> Result<Venue, AppError> {
    Venue::from_code(code).ok_or_else(|| {
        AppError::config_error(format!("Invalid location '{code}': expected H, A or N"))
    })
}

/// Handles the --list-config command.
pub async fn handle_list_config_command() -> Result<(), AppError> {
    Config::display().await
}

/// Handles configuration update commands (--set-base-url, --set-log-file, --clear-log-file).
///
/// Updates configuration based on the provided arguments and saves changes.
pub async fn handle_config_update_command(args: &Args) -> Result<(), AppError> {
    let mut config = Config::load().await.unwrap_or_default();

    if let Some(new_base_url) = &args.new_base_url {
        config.base_url = new_base_url.clone();
    }

    if let Some(new_log_path) = &args.new_log_file_path {
        config.log_file_path = Some(new_log_path.clone());
    } else if args.clear_log_file_path {
        config.log_file_path = None;
        println!("Custom log file path cleared. Using default location.");
    }

    config.validate()?;
    config.save().await?;
    println!("Config updated successfully!");

    Ok(())
}

/// Handles the --search command.
pub async fn handle_search_command(config: &Config, query: &str) -> Result<(), AppError> {
    let client = SiteClient::new(config)?;
    let players = client.search_players(query, Roster::builtin()).await;

    if players.is_empty() {
        println!("No players found for '{}'.", query.trim());
        return Ok(());
    }

    println!("{:<12} {:<28} {:<26} POS", "ID", "NAME", "TEAM");
    for player in &players {
        println!(
            "{:<12} {:<28} {:<26} {}",
            player.id, player.full_name, player.team, player.position
        );
    }

    Ok(())
}

/// Handles the --serve command.
pub async fn handle_serve_command(config: &Config, bind: Option<&str>) -> Result<(), AppError> {
    server::serve(config, bind).await
}

/// Handles the default analysis command.
///
/// Fetches the requested seasons, prints the game table, the statistical
/// summary and a per-season breakdown.
pub async fn handle_analyze_command(config: &Config, args: &Args) -> Result<(), AppError> {
    let player_name = args
        .player_name
        .as_deref()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .ok_or_else(|| {
            AppError::config_error("A player name is required, e.g. prop_scout \"Trae Young\"")
        })?;

    let seasons = if args.current_only {
        vec![current_season()]
    } else {
        recent_seasons(args.seasons)
    };
    let seasons_str = seasons
        .iter()
        .map(|&season| season_label(season))
        .collect::<Vec<_>>()
        .join(", ");

    let opponent = args
        .opponent
        .as_deref()
        .map(|opponent| opponent.trim().to_ascii_uppercase())
        .filter(|opponent| !opponent.is_empty());
    let venue = args.location.as_deref().map(parse_location).transpose()?;

    match &opponent {
        Some(opponent) => println!(
            "Fetching data for {player_name} against {opponent} for seasons: {seasons_str}..."
        ),
        None => println!("Fetching recent games for {player_name} for seasons: {seasons_str}..."),
    }

    let query = GameQuery::new(seasons)
        .with_opponent(opponent.clone())
        .with_venue(venue)
        .with_count(args.games);
    let lookup = PlayerLookup::from_parts(player_name, args.player_id.as_deref());

    let client = SiteClient::new(config)?;
    let outcome = client.fetch_games(&lookup, &query).await?;
    info!("Analysis for {player_name} finished: {} games", outcome.games().len());

    match outcome {
        GameLogOutcome::Games(games) => {
            print!("{}", format_report(player_name, opponent.as_deref(), &games));
        }
        GameLogOutcome::NoData => {
            println!("No game data found for {player_name} in the specified seasons.");
        }
        GameLogOutcome::NoOpponentGames { opponent } => {
            println!("No games found for {player_name} against {opponent} in the specified seasons.");
        }
        GameLogOutcome::NoMatchingGames => {
            println!("No valid game data found for {player_name} with the specified filters.");
        }
    }

    Ok(())
}

/// Renders the game table and statistics of the selected games.
pub fn format_report(player_name: &str, opponent: Option<&str>, games: &[GameRecord]) -> String {
    let mut out = String::new();

    match opponent {
        Some(opponent) => {
            let _ = writeln!(
                out,
                "\n{player_name}'s last {} games with complete stats against {opponent}:",
                games.len()
            );
        }
        None => {
            let _ = writeln!(
                out,
                "\n{player_name}'s last {} games with complete stats:",
                games.len()
            );
        }
    }

    let _ = writeln!(
        out,
        "{:<10}  {:<9}  {:<3}  {:<3}  {:>6}  {:>3}  {:>3}  {:>3}",
        "DATE", "SEASON", "OPP", "LOC", "MIN", "PTS", "AST", "TRB"
    );
    for game in games {
        let _ = writeln!(
            out,
            "{:<10}  {:<9}  {:<3}  {:<3}  {:>6}  {:>3}  {:>3}  {:>3}",
            game.date.format("%Y-%m-%d"),
            game.season,
            game.opponent.as_deref().unwrap_or("-"),
            game.venue().map_or("-", |venue| venue.code()),
            game.minutes_played.as_deref().unwrap_or("-"),
            game.points().unwrap_or_default(),
            game.assists().unwrap_or_default(),
            game.rebounds().unwrap_or_default(),
        );
    }

    if games.is_empty() {
        return out;
    }

    let _ = writeln!(out, "\nStatistical Summary:");
    for category in StatCategory::ALL {
        let values = category.values(games);
        let summary = calculate_stats(&values, 0.0);
        let _ = writeln!(
            out,
            "{category}: Avg={:.1}, Median={:.1}, Min={}, Max={}",
            summary.average,
            interpolated_median(&values),
            summary.min,
            summary.max
        );
    }

    let seasons = season_summaries(games);
    if seasons.len() > 1 {
        let _ = writeln!(out, "\nStatistics by Season:");
        for season in seasons {
            let _ = writeln!(out, "\n{} Season ({} games):", season.season, season.games);
            for category in &season.categories {
                let _ = writeln!(
                    out,
                    "  {}: Avg={:.1}, Median={:.1}",
                    category.category, category.average, category.median
                );
            }
        }
    }

    out
}
