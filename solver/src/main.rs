use std::sync::atomic::AtomicBool;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use log::{info, LevelFilter};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use hippogonal::builder::{Builder, GridBoardBuilder};
use hippogonal::{cache, Location, Puzzle};

// the colored 6×6 board, topmost row first
const BOARD_ROWS: [&str; 6] = [
    "AAABBC",
    "AAABBC",
    "AABBCC",
    "AABBCC",
    "ABBCCC",
    "ABBCCC",
];

const START: Location = Location(0, 0);
const END: Location = Location(5, 5);
const TARGET: i64 = 2024;

fn init_logging() -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} - {m}\n")))
        .build(format!("log/solver-{}.log", Utc::now().format("%Y-%m-%dT%H-%M-%S")))
        .context("creating log file")?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Debug))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    let board = GridBoardBuilder::from_rows(&BOARD_ROWS)
        .build()
        .map_err(|reasons| anyhow!("invalid board: {:?}", reasons))?;
    info!("board:\n{}", board);

    let puzzle = Puzzle::new(board, START, END, 5..=7, TARGET, 1..=49)?;

    let stop = AtomicBool::new(false);
    let report = puzzle.run(&stop)?;

    cache::save_paths("paths.json", &report.paths).context("writing path artifact")?;
    cache::save_score_classes("scores.json", &report.classes.0).context("writing score artifact")?;

    info!(
        "{} paths, {}/{} score classes, {} satisfying assignments",
        report.paths.len(),
        report.classes.0.len(),
        report.classes.1.len(),
        report.solutions.len()
    );

    match report.best {
        Some(solution) => {
            info!("optimal solution: {}", solution);
            println!("{}", solution);
        }
        None => println!("no satisfying weights in range"),
    }

    Ok(())
}
