use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use clap::Subcommand;
use env_logger::Builder;
use log::{debug, info};

use pyc_interpreter as pyc;

use pyc::interpreter::{Evaluator, RunResult};
use pyc::parser::Parser;
use pyc::scanner::Scanner;
use pyc::token::Token;

#[derive(ClapParser, Debug)]
#[command(version, about = "PyC language interpreter", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    commands: Commands,

    /// Enable logging to app.log
    #[arg(long, global = true)]
    log: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenizes input from a file, printing each token
    Tokenize { filename: Option<PathBuf> },

    /// Parses input from a file as a single expression and prints its AST
    Parse { filename: Option<PathBuf> },

    /// Runs input from a file as a PyC program
    Run {
        filename: Option<PathBuf>,

        /// Print the final symbol-table snapshot as JSON
        #[arg(long)]
        dump_state: bool,
    },
}

/// Reads the contents of a file into a Vec<u8>
fn read_file(filename: PathBuf) -> Result<Vec<u8>> {
    info!("Reading file: {:?}", filename);
    let file = File::open(&filename).context(format!("Failed to open file {:?}", filename))?;
    let mut reader = BufReader::new(file);
    let mut buf = Vec::new();

    let bytes = reader
        .read_to_end(&mut buf)
        .context(format!("Failed to read file {:?}", filename))?;

    info!("Read {} bytes from {:?}", bytes, filename);

    Ok(buf)
}

fn init_logger() -> Result<()> {
    // Create or open the log file
    let log_file = File::create("app.log").context("Failed to create app.log")?;

    // Configure env_logger to write to file with statement number and source line
    Builder::new()
        .format(|buf, record| {
            // Strip 'pyc_interpreter::' from module path
            let module = record
                .module_path()
                .unwrap_or("<unnamed>")
                .strip_prefix("pyc_interpreter::")
                .unwrap_or(record.module_path().unwrap_or("<unnamed>"));
            writeln!(
                buf,
                "[{}:{}] - {}",
                module,
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .filter(None, log::LevelFilter::Debug) // Default to Debug, override with RUST_LOG
        .init();

    info!("Logger initialized, writing to app.log");
    Ok(())
}

/// Scans the whole buffer into a token vector, exiting with code 65 if any
/// lexeme is malformed.
fn scan_all(buf: &[u8]) -> Vec<Token<'_>> {
    let scanner = Scanner::new(buf);
    let mut tokens = Vec::new();
    let mut scanned = true;

    for result in scanner {
        match result {
            Ok(token) => {
                debug!("Scanned token: {}", token);
                tokens.push(token);
            }

            Err(e) => {
                scanned = false;

                debug!("Tokenization debug: {}", e);

                eprintln!("{}", e);
            }
        }
    }

    if !scanned {
        debug!("Tokenization failed, exiting with code 65");

        std::process::exit(65);
    }

    tokens
}

fn main() -> Result<()> {
    // Initialize logger before parsing CLI args
    let args: Cli = Cli::parse();

    // Initialize logger only if --log flag is provided
    if args.log {
        init_logger()?;
    } else {
        // Initialize a minimal logger to avoid "no logger" errors
        env_logger::Builder::new()
            .filter_level(log::LevelFilter::Off)
            .init();
    }

    info!("CLI arguments: {:?}", args);

    match args.commands {
        Commands::Tokenize { filename } => match filename {
            Some(filename) => {
                info!("Running Tokenize subcommand");
                let buf = read_file(filename)?;
                let scanner = Scanner::new(&buf);
                let mut tokenized = true;

                for token in scanner {
                    match token {
                        Ok(token) => {
                            debug!("Scanned token: {}", token);

                            println!("{}", token);
                        }

                        Err(e) => {
                            tokenized = false;

                            debug!("Tokenization debug: {}", e);

                            eprintln!("{}", e);
                        }
                    }
                }

                if !tokenized {
                    debug!("Tokenization failed, exiting with code 65");

                    std::process::exit(65);
                }

                info!("Tokenization completed successfully");
            }
            None => {
                info!("No filepath provided for Tokenize");

                println!("No input filepath was provided. Exiting...");

                std::process::exit(0);
            }
        },

        Commands::Parse { filename } => match filename {
            Some(filename) => {
                info!("Running Parse subcommand");
                let buf = read_file(filename)?;
                let tokens = scan_all(&buf);
                let mut parser = Parser::new(&tokens);

                match parser.parse_expression() {
                    Ok(expr) => {
                        info!("Expression parsed successfully");
                        let ast_str = expr.pretty();

                        debug!("AST: {}", ast_str);
                        println!("{}", ast_str);
                    }

                    Err(e) => {
                        debug!("Parse debug: {}", e);
                        eprintln!("{}", e);
                        std::process::exit(65);
                    }
                }

                info!("Parse subcommand completed");
            }
            None => {
                info!("No filepath provided for Parse");
                println!("No input filepath was provided. Exiting...");
                std::process::exit(0);
            }
        },

        Commands::Run {
            filename,
            dump_state,
        } => match filename {
            Some(filename) => {
                info!("Running Run subcommand");
                let buf = read_file(filename)?;
                let tokens = scan_all(&buf);
                let mut parser = Parser::new(&tokens);

                let statements = match parser.parse() {
                    Ok(statements) => statements,

                    Err(e) => {
                        debug!("Parse debug: {}", e);
                        eprintln!("{}", e);
                        std::process::exit(65);
                    }
                };

                info!("Parsed {} statements", statements.len());

                let evaluator = Evaluator::new();

                match evaluator.run(&statements) {
                    Ok(RunResult {
                        log,
                        diagnostics,
                        final_state,
                    }) => {
                        info!("Program executed successfully");

                        for line in &log {
                            println!("{}", line);
                        }

                        for diagnostic in &diagnostics {
                            eprintln!("{}", diagnostic);
                        }

                        if dump_state {
                            let snapshot = serde_json::to_string_pretty(&final_state)
                                .context("Failed to serialize final state")?;

                            println!("{}", snapshot);
                        }
                    }

                    Err(e) => {
                        debug!("Runtime debug: {}", e);
                        eprintln!("Runtime error: {}", e);
                        std::process::exit(70);
                    }
                }
            }

            None => {
                info!("No filepath provided for Run");
                println!("No input filepath was provided. Exiting...");
                std::process::exit(0);
            }
        },
    }

    Ok(())
}
