//! JHelp CLI Client
//!
//! Command-line front end for the JHelp dictionary server.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use jhelp::dictionary::NOT_FOUND_MESSAGE;
use jhelp::session::{ADD_CONFIRMATION, DELETE_CONFIRMATION};
use jhelp::{Config, JHelpError, Lookup, Session};
use tracing_subscriber::{fmt, EnvFilter};

/// JHelp CLI
#[derive(Parser, Debug)]
#[command(name = "jhelp-cli")]
#[command(about = "Look up, add and delete dictionary definitions")]
#[command(version)]
struct Args {
    /// Server address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:16105")]
    server: String,

    /// Connect/read/write timeout in milliseconds (0 disables)
    #[arg(short, long, default_value = "5000")]
    timeout_ms: u64,

    /// Maximum definitions accepted for one term
    #[arg(long, default_value = "1024")]
    max_definitions: usize,

    /// Forget cached definitions of a term after adding to or deleting it
    #[arg(long)]
    invalidate_on_write: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Look up a term
    Find {
        /// The term to look up
        term: String,

        /// Print every definition instead of the first one
        #[arg(short, long)]
        all: bool,
    },

    /// Add a definition to a term
    Add {
        /// The term to extend
        term: String,

        /// The new definition
        definition: String,
    },

    /// Delete a term
    Delete {
        /// The term to delete
        term: String,
    },

    /// Interactive shell with paging through definitions
    Shell,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,jhelp=info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = Config::builder()
        .server_addr(&args.server)
        .timeouts_ms(args.timeout_ms)
        .max_definitions(args.max_definitions)
        .invalidate_on_write(args.invalidate_on_write)
        .build();

    let mut session = match Session::open(config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Failed to start session: {}", e);
            std::process::exit(2);
        }
    };

    let result = match args.command {
        Commands::Find { term, all } => run_find(&mut session, &term, all),
        Commands::Add { term, definition } => session
            .add(&term, &definition)
            .map(|()| println!("{}", ADD_CONFIRMATION)),
        Commands::Delete { term } => session
            .delete(&term)
            .map(|()| println!("{}", DELETE_CONFIRMATION)),
        Commands::Shell => run_shell(&mut session),
    };

    if let Err(e) = result {
        report(&e);
        std::process::exit(1);
    }
}

fn run_find(session: &mut Session, term: &str, all: bool) -> jhelp::Result<()> {
    match session.find(term)? {
        Lookup::NotFound => println!("{}", NOT_FOUND_MESSAGE),
        Lookup::Found(sequence) if all => {
            for (i, definition) in sequence.iter().enumerate() {
                println!("{}. {}", i + 1, definition);
            }
        }
        Lookup::Found(_) => print_current(session),
    }
    Ok(())
}

fn print_current(session: &Session) {
    let cursor = session.cursor();
    if let (Some(definition), Some(index)) = (cursor.current(), cursor.index()) {
        println!("[{}/{}] {}", index + 1, cursor.len(), definition);
    }
}

const SHELL_HELP: &str = "\
commands:
  find <term>               look up a term
  next | n                  show the next definition
  prev | p                  show the previous definition
  add <term> <definition>   add a definition
  delete <term>             delete a term
  help                      show this help
  quit | exit               leave the shell";

fn run_shell(session: &mut Session) -> jhelp::Result<()> {
    println!("JHelp v{} (type 'help' for commands)", jhelp::VERSION);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("jhelp> ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(()),
        };

        let line = line.trim();
        let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

        // Request errors are reported and the shell keeps going
        let outcome = match word {
            "" => Ok(()),
            "quit" | "exit" => return Ok(()),
            "help" => {
                println!("{}", SHELL_HELP);
                Ok(())
            }
            "find" => run_find(session, rest.trim(), false),
            "next" | "n" => {
                if session.cursor().has_next() {
                    session.cursor_mut().advance();
                    print_current(session);
                } else {
                    println!("No next definition");
                }
                Ok(())
            }
            "prev" | "p" => {
                if session.cursor().has_previous() {
                    session.cursor_mut().retreat();
                    print_current(session);
                } else {
                    println!("No previous definition");
                }
                Ok(())
            }
            "add" => {
                let (term, definition) = rest.trim().split_once(' ').unwrap_or((rest.trim(), ""));
                session
                    .add(term, definition.trim())
                    .map(|()| println!("{}", ADD_CONFIRMATION))
            }
            "delete" => session
                .delete(rest.trim())
                .map(|()| println!("{}", DELETE_CONFIRMATION)),
            other => {
                println!("Unknown command '{}' (type 'help')", other);
                Ok(())
            }
        };

        if let Err(e) = outcome {
            report(&e);
        }
    }
}

fn report(e: &JHelpError) {
    if e.is_caller_error() {
        eprintln!("{}", e);
    } else {
        tracing::error!("{}", e);
        eprintln!("Request failed: {}", e);
    }
}
