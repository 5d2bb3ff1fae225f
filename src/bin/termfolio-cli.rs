//! termfolio CLI - the portfolio terminal in a real one
//!
//! Usage: termfolio-cli [--config <path>] [--theme dark|light]
//!
//! Same commands and filesystem as the browser widget, without the typing
//! animation. `exit`, `quit` or EOF leaves.

use std::io::{self, BufRead, Write};
use termfolio::config::TerminalConfig;
use termfolio::platform::native::{FileStore, STATE_FILE};
use termfolio::platform::{KeyValueStore, MemoryStore};
use termfolio::settings::Theme;
use termfolio::shell::{Executor, terminal::WELCOME};

/// ANSI colours for each theme: (prompt, error)
fn palette(theme: Theme) -> (&'static str, &'static str) {
    match theme {
        Theme::Dark => ("\x1b[1;32m", "\x1b[1;31m"),
        Theme::Light => ("\x1b[1;34m", "\x1b[31m"),
    }
}

const RESET: &str = "\x1b[0m";
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

struct Args {
    config: Option<String>,
    theme: Option<Theme>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        config: None,
        theme: None,
    };
    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--config" => {
                args.config = Some(iter.next().ok_or("--config needs a path")?);
            }
            "--theme" => {
                let value = iter.next().ok_or("--theme needs dark or light")?;
                args.theme =
                    Some(Theme::parse(&value).ok_or_else(|| format!("unknown theme: {}", value))?);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }
    Ok(args)
}

/// Stored theme, updated first if one was given on the command line
fn resolve_theme(requested: Option<Theme>) -> Theme {
    match FileStore::open(STATE_FILE) {
        Ok(mut store) => choose_theme(&mut store, requested),
        Err(e) => {
            eprintln!("settings: {}", e);
            choose_theme(&mut MemoryStore::new(), requested)
        }
    }
}

fn choose_theme(store: &mut impl KeyValueStore, requested: Option<Theme>) -> Theme {
    match requested {
        Some(theme) => {
            if let Err(e) = theme.save(store) {
                eprintln!("settings: {}", e);
            }
            theme
        }
        None => Theme::load(&*store),
    }
}

fn main() {
    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("termfolio-cli: {}", e);
            eprintln!("usage: termfolio-cli [--config <path>] [--theme dark|light]");
            std::process::exit(2);
        }
    };

    let config = match args.config.as_deref() {
        Some(path) => TerminalConfig::from_file(path).unwrap_or_else(|e| {
            eprintln!("{}, using defaults", e);
            TerminalConfig::default()
        }),
        None => TerminalConfig::default(),
    };

    let (prompt_colour, error_colour) = palette(resolve_theme(args.theme));
    let prompt = config.prompt.clone();
    let mut executor = Executor::new(&config);

    println!("{}", WELCOME);
    println!("Type 'help' for available commands, 'exit' to leave.\n");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}{}{}", prompt_colour, prompt, RESET);
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => {
                // EOF
                println!();
                break;
            }
            Ok(_) => {}
            Err(e) => {
                eprintln!("read error: {}", e);
                break;
            }
        }

        let line = line.trim();
        if matches!(line, "exit" | "quit") {
            println!("Goodbye!");
            break;
        }

        let result = executor.execute_line(line);
        if result.clear {
            print!("{}", CLEAR_SCREEN);
            continue;
        }
        if !result.output.is_empty() {
            println!("{}", result.output);
        }
        if let Some(url) = &result.open_url {
            println!("-> {}", url);
        }
        if result.is_error() {
            println!("{}{}{}", error_colour, result.error, RESET);
        }
    }
}
