mod config;
mod output;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use config::Config;
use data_loader::Dataset;
use output::OutputWriter;
use pipeline::generate_recommendations;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info};

const DEFAULT_USER_FILE: &str = "samples/users.txt";
const DEFAULT_MOVIE_FILE: &str = "samples/movies.txt";

/// movie-recs - genre-overlap movie recommendations
#[derive(Parser, Debug)]
#[command(name = "movie-recs", version)]
#[command(about = "Recommend unwatched movies that share a genre with each user's history", long_about = None)]
struct Cli {
    /// Users catalog (defaults to samples/users.txt together with MOVIE_FILE)
    #[arg(requires = "movie_file")]
    user_file: Option<PathBuf>,

    /// Movies catalog
    movie_file: Option<PathBuf>,
}

impl Cli {
    /// Resolve the (users, movies) pair, falling back to the bundled samples.
    fn input_paths(self) -> (PathBuf, PathBuf) {
        match (self.user_file, self.movie_file) {
            (Some(users), Some(movies)) => (users, movies),
            _ => {
                info!("No arguments, using default sample files");
                (PathBuf::from(DEFAULT_USER_FILE), PathBuf::from(DEFAULT_MOVIE_FILE))
            }
        }
    }
}

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match Config::from_env().and_then(|config| run(cli, config)) {
        Ok(code) => code,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    let writer = OutputWriter::new(&config);
    let (user_file, movie_file) = cli.input_paths();

    info!(
        "Loading movies from {} and users from {}",
        movie_file.display(),
        user_file.display()
    );
    let start = Instant::now();

    let dataset = match Dataset::load_from_files(&movie_file, &user_file) {
        Ok(dataset) => dataset,
        Err(e) => {
            match e.line() {
                Some(line) => error!(line = line, "{}", e),
                None => error!("{}", e),
            }
            writer.write_error(&e.message())?;
            println!(
                "{} {} (see {})",
                "✗".red(),
                e.message(),
                writer.error_path().display()
            );
            return Ok(ExitCode::FAILURE);
        }
    };

    let (movie_count, user_count) = dataset.counts();
    info!("Loaded {} movies and {} users", movie_count, user_count);

    let recommendations = generate_recommendations(&dataset.users, &dataset.movies);
    writer.write_recommendations(&recommendations)?;
    info!(
        "Generated {} recommendations into {}",
        recommendations.len(),
        writer.output_path().display()
    );

    println!(
        "{} Recommended movies for {} users in {:?} ({})",
        "✓".green(),
        recommendations.len(),
        start.elapsed(),
        writer.output_path().display()
    );

    Ok(ExitCode::SUCCESS)
}
