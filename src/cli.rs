use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// Returns true when the command only touches the configuration.
pub fn is_config_operation(args: &Args) -> bool {
    args.new_base_url.is_some()
        || args.new_log_file_path.is_some()
        || args.clear_log_file_path
        || args.list_config
}

/// NBA prop bet analyzer
///
/// Fetches a player's recent game logs and summarizes points, assists and
/// rebounds, optionally only against one opponent or at one location.
///
/// Examples:
///   prop_scout "Trae Young" BOS
///   prop_scout "LeBron James" --games 5 --current-only
///   prop_scout --search curry
///   prop_scout --serve
#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// Full name of the player, e.g. "Trae Young"
    pub player_name: Option<String>,

    /// Opponent team abbreviation, e.g. "BOS". Shows all recent games if omitted.
    pub opponent: Option<String>,

    /// Site identifier of the player, e.g. "davisan02".
    /// Use when the identifier derived from the name points at the wrong player.
    #[arg(long = "player-id", help_heading = "Analysis")]
    pub player_id: Option<String>,

    /// Number of seasons to analyze, counting back from the current one
    #[arg(long, default_value_t = 2, help_heading = "Analysis")]
    pub seasons: u32,

    /// Number of most recent games to analyze
    #[arg(long, default_value_t = 10, help_heading = "Analysis")]
    pub games: usize,

    /// Only analyze the current season
    #[arg(long = "current-only", help_heading = "Analysis")]
    pub current_only: bool,

    /// Only include home (H), away (A) or neutral site (N) games
    #[arg(long, value_name = "H|A|N", help_heading = "Analysis")]
    pub location: Option<String>,

    /// Search players by name and exit
    #[arg(long, value_name = "QUERY", help_heading = "Modes")]
    pub search: Option<String>,

    /// Run the HTTP API for the web frontend
    #[arg(long, help_heading = "Modes")]
    pub serve: bool,

    /// Address the HTTP API listens on, overrides the configured one
    #[arg(long, value_name = "ADDR", requires = "serve", help_heading = "Modes")]
    pub bind: Option<String>,

    /// Update the statistics site root URL in config
    #[arg(long = "set-base-url", value_name = "URL", help_heading = "Configuration")]
    pub new_base_url: Option<String>,

    /// Update log file path in config. This sets a persistent custom log file location.
    #[arg(long = "set-log-file", help_heading = "Configuration")]
    pub new_log_file_path: Option<String>,

    /// Clear the custom log file path from config. This reverts to using the default log location.
    #[arg(long = "clear-log-file", help_heading = "Configuration")]
    pub clear_log_file_path: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Logging")]
    pub log_file: Option<String>,

    /// Log only to the log file, not to the terminal
    #[arg(short, long, help_heading = "Logging")]
    pub quiet: bool,

    /// Enable debug level logging
    #[arg(long = "debug", help_heading = "Logging")]
    pub debug: bool,
}
