//! Assistant Bot - Main entry point
//!
//! Reads commands from stdin one line at a time and prints replies to stdout.
//! Logs go to stderr so they never interleave with replies.

use anyhow::{Context, Result};
use assistant_bot::{Assistant, Config, Outcome};
use std::io::{self, BufRead, Write};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // RUST_LOG wins over LOG_LEVEL; config is loaded first so .env can set either
    let config = Config::from_env();
    let default_level = config
        .as_ref()
        .map(|cfg| cfg.log_level.clone())
        .unwrap_or_else(|_| "error".to_string());
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = match config {
        Ok(cfg) => {
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!(
        window_days = config.birthday_window_days,
        wrap_year = config.birthday_wrap_year,
        "Starting assistant bot"
    );

    let mut assistant = Assistant::from_config(&config);
    run_repl(&mut assistant, io::stdin().lock(), io::stdout().lock())?;

    info!(contacts = assistant.book().len(), "Assistant bot shutdown complete");
    Ok(())
}

/// Read-eval-print loop. Ends on `exit`/`close` or end of input.
fn run_repl<R: BufRead, W: Write>(assistant: &mut Assistant, input: R, mut output: W) -> Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    let mut lines = input.lines();
    loop {
        write!(output, "Enter a command: ")?;
        output.flush()?;

        let Some(line) = lines.next() else {
            // End of input behaves like an interrupt: say goodbye and stop
            writeln!(output, "\nGood bye!")?;
            break;
        };
        let line = line.context("Failed to read command from stdin")?;

        match assistant.execute(&line) {
            Outcome::Reply(reply) => writeln!(output, "{}", reply)?,
            Outcome::Silent => {}
            Outcome::Exit(farewell) => {
                writeln!(output, "{}", farewell)?;
                break;
            }
        }
    }

    Ok(())
}
