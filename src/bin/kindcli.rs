use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use kindreg::config::CliConfig;
use kindreg::debugger::{Component, set_debug_level};
use kindreg::types::describe;
use kindreg::{kind_error, kind_info, kind_warn};

fn print_lookup(name: &str) -> bool {
    match describe(name) {
        Ok(line) => {
            println!("{line}");
            true
        }
        Err(error) => {
            kind_warn!(Component::Cli, "lookup failed for '{}'", name);
            println!("{error}");
            false
        }
    }
}

fn repl() -> Result<()> {
    let mut rl = DefaultEditor::new()?;

    println!("Kind inspector");
    println!("Type a metastore type name and press enter. Ctrl+D to exit");

    loop {
        match rl.readline("kind> ") {
            Ok(line) => {
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(line.as_str())?;
                print_lookup(&line);
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(error) => {
                kind_error!(Component::Cli, "readline failed: {}", error);
                return Err(error.into());
            }
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let config = CliConfig::from_args(std::env::args().skip(1));
    set_debug_level(config.debug_level);
    kind_info!(Component::Cli, "debug level {:?}", config.debug_level);

    if config.is_interactive() {
        return repl();
    }

    let mut all_found = true;
    for name in &config.names {
        all_found &= print_lookup(name);
    }

    if !all_found {
        std::process::exit(1);
    }

    Ok(())
}
