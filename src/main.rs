use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

mod board;
mod browse;
mod models;
mod pagination;
mod ranking;
mod render;
mod report;
mod roster;

use board::{BoardState, Leaderboard};
use models::Record;

#[derive(Parser)]
#[command(name = "culture-leaderboard")]
#[command(about = "Ranked culture leaderboard with search and paging", long_about = None)]
struct Cli {
    /// CSV roster to load instead of the built-in one
    #[arg(long, global = true, env = "LEADERBOARD_ROSTER")]
    roster: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one page of the leaderboard
    Show {
        #[arg(long, default_value = "")]
        query: String,
        #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
        page: i64,
        #[arg(long, default_value_t = pagination::DEFAULT_PAGE_SIZE)]
        page_size: usize,
        #[arg(long)]
        json: bool,
    },
    /// Page through the leaderboard interactively
    Browse {
        #[arg(long, default_value_t = pagination::DEFAULT_PAGE_SIZE)]
        page_size: usize,
    },
    /// Generate a markdown report
    Report {
        #[arg(long)]
        query: Option<String>,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Write the built-in roster as CSV
    Export {
        #[arg(long, default_value = "roster.csv")]
        out: PathBuf,
    },
}

fn load_roster(path: Option<&PathBuf>) -> anyhow::Result<Vec<Record>> {
    match path {
        Some(path) => roster::load_csv(path),
        None => {
            log::debug!("using built-in roster");
            Ok(roster::builtin())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Show {
            query,
            page,
            page_size,
            json,
        } => {
            if page_size == 0 {
                anyhow::bail!("--page-size must be at least 1");
            }
            let board = Leaderboard::new(load_roster(cli.roster.as_ref())?, page_size);
            let view = board.view(&BoardState::new(query, page));

            if json {
                println!("{}", render::render_json(&view)?);
            } else {
                print!("{}", render::render_table(&view));
            }
        }
        Commands::Browse { page_size } => {
            if page_size == 0 {
                anyhow::bail!("--page-size must be at least 1");
            }
            let board = Leaderboard::new(load_roster(cli.roster.as_ref())?, page_size);
            let stdin = std::io::stdin();
            browse::run(&board, stdin.lock(), std::io::stdout().lock())?;
        }
        Commands::Report { query, out } => {
            let board = Leaderboard::new(
                load_roster(cli.roster.as_ref())?,
                pagination::DEFAULT_PAGE_SIZE,
            );
            let generated_on = chrono::Local::now().date_naive();
            let report = report::build_report(&board, query.as_deref(), generated_on);
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { out } => {
            let records = roster::builtin();
            roster::write_csv(&records, &out)?;
            log::info!("exported {} records", records.len());
            println!("Roster written to {}.", out.display());
        }
    }

    Ok(())
}
