use anyhow::{Context, Result};
use chrono::Utc;
use log::{info, LevelFilter};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use estimator::estimate;

const WORKERS: u64 = 10;

fn init_logging() -> Result<()> {
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{d} {l} - {m}\n")))
        .build(format!("log/estimator-{}.log", Utc::now().format("%Y-%m-%dT%H-%M-%S")))
        .context("creating log file")?;

    let config = Config::builder()
        .appender(Appender::builder().build("logfile", Box::new(logfile)))
        .build(Root::builder().appender("logfile").build(LevelFilter::Info))?;

    log4rs::init_config(config)?;
    Ok(())
}

fn main() -> Result<()> {
    init_logging()?;

    // trial count is given as a power of ten
    let exponent: u32 = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "7".to_string())
        .parse()
        .context("the trial exponent must be a small integer")?;
    let total = 10_u64
        .checked_pow(exponent)
        .context("the trial exponent is too large")?;

    info!("running {} trials across {} workers", total, WORKERS);
    let estimate = estimate(total, WORKERS);
    info!("{} successes over {} trials", estimate.successes, estimate.trials);

    println!("{}", estimate.ratio());
    Ok(())
}
