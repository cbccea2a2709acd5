//! Keypad
//!
//! A terminal front end for the calculator engine.
//!
//! Key concepts:
//! - Keyboard names and button actions translated into commands
//! - A display sink that prints both display lines after every command
//! - History persisted to a JSON file and restored on the next run
//! - Optional JSON configuration read from `DENTAKU_CONFIG`
//!
//! Input is read from stdin as whitespace separated tokens, for example
//! `1 2 * 3 Enter`. Besides keyboard keys (`0`-`9`, `.`, `+ - * / %`,
//! `Enter`, `=`, `Escape`, `Backspace`) the button actions `clear`,
//! `backspace`, `equals` and `clear-history` work, and `history` prints
//! the history list.
//!
//! Run with: cargo run --example keypad -- [history-file]

use chrono::Local;
use dentaku::builder::CalculatorBuilder;
use dentaku::config::CalculatorConfig;
use dentaku::core::Command;
use dentaku::render::{history_text, Display};
use dentaku::storage::FileStore;
use std::error::Error;
use std::io::{self, BufRead};
use std::path::PathBuf;

const CONFIG_VAR: &str = "DENTAKU_CONFIG";

fn load_config() -> Result<CalculatorConfig, Box<dyn Error>> {
    match std::env::var(CONFIG_VAR) {
        Ok(path) => {
            let raw = std::fs::read_to_string(&path)?;
            Ok(CalculatorConfig::from_json(&raw)?)
        }
        Err(_) => Ok(CalculatorConfig::default()),
    }
}

fn print_display(display: &Display) {
    if display.operation.is_empty() {
        println!("{:>24}", display.current);
    } else {
        println!("{:>24}\n{:>24}", display.operation, display.current);
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = load_config()?;
    let path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("dentaku-history.json"));
    println!("History file: {}", path.display());

    let empty_message = config.empty_history_message.clone();
    let mut calculator = CalculatorBuilder::new()
        .config(config)
        .backend(FileStore::new(path))
        .display(print_display)
        .build()?;

    for line in io::stdin().lock().lines() {
        for token in line?.split_whitespace() {
            if token == "history" {
                println!("{}", history_text(calculator.history(), &Local, &empty_message));
                continue;
            }

            match Command::from_key(token).or_else(|| Command::from_button(token)) {
                Some(command) => calculator.handle(command),
                None => eprintln!("unknown key: {token}"),
            }
        }
    }

    println!("\n{}", history_text(calculator.history(), &Local, &empty_message));
    Ok(())
}
