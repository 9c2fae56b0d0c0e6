// src/main.rs
use clap::Parser;
use prop_scout::cli::{Args, is_config_operation};
use prop_scout::commands::{
    handle_analyze_command, handle_config_update_command, handle_list_config_command,
    handle_search_command, handle_serve_command, validate_args,
};
use prop_scout::config::Config;
use prop_scout::error::AppError;
use prop_scout::logging::setup_logging;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    validate_args(&args)?;

    // The guard must be kept alive for the duration of the program
    // to ensure logs are flushed properly
    let (log_file_path, _guard) = setup_logging(&args).await?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Handle configuration operations first, they never touch the network
    if args.list_config {
        return handle_list_config_command().await;
    }

    if is_config_operation(&args) {
        return handle_config_update_command(&args).await;
    }

    // Load config first to fail early if there's an issue
    let config = Config::load().await?;

    if let Some(query) = &args.search {
        return handle_search_command(&config, query).await;
    }

    if args.serve {
        return handle_serve_command(&config, args.bind.as_deref()).await;
    }

    handle_analyze_command(&config, &args).await
}
