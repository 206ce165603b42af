mod args;

use anyhow::{Context, Result};
use args::{ArgumentError, Cli};
use chrono::Datelike;
use clap::Parser;
use colored::Colorize;
use data_loader::{read_csv, MovieRow};
use movie_filter::RowFilter;
use report::{
    export_path, render_movies, render_top, save_filtered, sort_by_rating, write_summary_log,
};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{info, warn};

/// Exit status for invalid flags.
const EXIT_ARGUMENT_ERROR: u8 = 2;

fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the tables
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(code) => code,
        Err(err) => match err.downcast_ref::<ArgumentError>() {
            Some(arg_err) => {
                eprintln!("{} {}", "Argument Error:".red().bold(), arg_err);
                ExitCode::from(EXIT_ARGUMENT_ERROR)
            }
            None => {
                eprintln!("{} {:#}", "Error:".red().bold(), err);
                ExitCode::FAILURE
            }
        },
    }
}

fn run(cli: &Cli) -> Result<ExitCode> {
    // Validate every flag before the dataset is opened
    let criteria = cli.criteria(chrono::Local::now().year())?;
    let ranking = cli.ranking()?;

    let start = Instant::now();
    let table = read_csv(&cli.input)
        .with_context(|| format!("Failed to load movie dataset from {}", cli.input.display()))?;
    info!("Loaded {} movies in {:?}", table.len(), start.elapsed());

    let row_filter = RowFilter::new(&criteria)?;
    row_filter.check_columns(table.headers.iter().map(String::as_str))?;
    let mut movies = row_filter
        .apply(table.into_rows())
        .context("Failed to filter movies")?;

    if movies.is_empty() {
        println!("{}", "No films found for current filter".yellow());
        return Ok(ExitCode::FAILURE);
    }

    sort_by_rating(&mut movies);
    println!("{}", render_movies(&movies));

    export(cli, &movies)?;

    if let Some(path) = &cli.export_log {
        write_summary_log(&movies, path)
            .with_context(|| format!("Failed to write summary log to {}", path.display()))?;
        println!("{} Summary log saved to {}", "✓".green(), path.display());
    }

    if let Some(ranking) = ranking {
        println!();
        println!("{}", render_top(&movies, ranking, cli.top_limit));
    }

    Ok(ExitCode::SUCCESS)
}

/// Save the filtered movies if an export was requested.
fn export(cli: &Cli, movies: &[MovieRow]) -> Result<()> {
    let Some(request) = cli.export_request() else {
        return Ok(());
    };

    if let Some(raw) = &request.unsupported {
        warn!("Unsupported file type: {}. Defaulting to CSV.", raw);
    }

    let path = export_path(request.name.as_deref(), request.format);
    save_filtered(movies, &path, request.format)
        .with_context(|| format!("Failed to export movies to {}", path.display()))?;
    println!(
        "{} Saved {} movies to {}",
        "✓".green(),
        movies.len(),
        path.display()
    );
    Ok(())
}
