mod handlers;

use std::io::{self, BufRead, Write};

use tracing_subscriber::EnvFilter;
use ucli_config::{INPUT_MAX_LEN, PROMPT};
use ucli_core::DispatchError;
use ucli_macros::define_commands;

define_commands! {
    mod commands;
    path = "src/commands.cfg"
}

/// Diagnostics go to stderr; `RUST_LOG=ucli_core=debug` shows the matcher at work.
fn init_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let result = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init();

    if let Err(e) = result {
        eprintln!("Log system initialization failed: {e}");
    }
}

fn main() {
    init_logging();

    tracing::info!(commands = commands::NUM_COMMANDS, "command table loaded");

    println!("Shell started ({} commands, `exit` to quit)", commands::NUM_COMMANDS);
    let table = commands::get_commands();
    for (schema, command) in commands::SCHEMAS.iter().zip(table.iter()) {
        let placeholders = command
            .tokens()
            .iter()
            .filter(|token| token.kind().is_placeholder())
            .count();
        println!("  {schema:<12} ({placeholders} args)");
    }

    let stdin = io::stdin();
    let mut line = String::with_capacity(INPUT_MAX_LEN);

    loop {
        print!("{PROMPT}");
        if io::stdout().flush().is_err() {
            break;
        }

        line.clear();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            }
        }

        let input = line.trim_end_matches(['\r', '\n']);
        if input.trim() == "exit" {
            break;
        }
        if input.len() > INPUT_MAX_LEN {
            println!("Error: line longer than {INPUT_MAX_LEN} bytes");
            continue;
        }

        exec(input);
    }

    println!("Shell exited...");
}

fn exec(input: &str) {
    match commands::dispatch(input) {
        Ok(_) => println!("Success: {}", input),
        Err(DispatchError::Empty) => {}
        Err(e) => {
            tracing::debug!(error = %e, line = input, "dispatch failed");
            println!("Error: {} for line '{}'", e, input);
        }
    }
}
