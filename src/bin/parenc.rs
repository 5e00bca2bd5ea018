//! Command-line interface for parenc
//! Compiles parenthesized call expressions into comma-call text, and exposes every pipeline stage for inspection.
//!
//! Usage:
//!   parenc compile [`<path>`] [--strict]                  - Compile a file (or stdin) to call syntax
//!   parenc inspect [`<path>`] [--format `<format>`]       - Print one pipeline stage in the given format
//!   parenc list-formats                                  - List all available inspection formats
//!
//! Global options: `--config <file>` layers a TOML file over the defaults,
//! `--verbose` raises log output to debug. `PARENC_LOG` overrides both.

use clap::{Arg, ArgAction, ArgMatches, Command};
use parenc::config::Loader;
use parenc::processor::{available_formats, process_source, ProcessingSpec};
use parenc::Compiler;
use std::io::Read;
use tracing_subscriber::EnvFilter;

const LOCAL_CONFIG: &str = "parenc.toml";

fn main() {
    let matches = Command::new("parenc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A compiler from parenthesized call expressions to comma-call syntax")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults")
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log pipeline progress to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("compile")
                .about("Compile source to call syntax")
                .arg(path_arg())
                .arg(
                    Arg::new("strict")
                        .long("strict")
                        .help("Reject characters the lexer does not recognize")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print the output of a single pipeline stage")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (e.g., 'token-simple', 'ast-json', 'target-treeviz')")
                        .default_value("target-treeviz"),
                ),
        )
        .subcommand(Command::new("list-formats").about("List available inspection formats"))
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("compile", compile_matches)) => handle_compile_command(compile_matches),
        Some(("inspect", inspect_matches)) => handle_inspect_command(inspect_matches),
        Some(("list-formats", _)) => handle_list_formats_command(),
        _ => unreachable!(),
    }
}

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the source file, or '-' for stdin (default)")
        .index(1)
}

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_env("PARENC_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose { "parenc=debug" } else { "warn" })
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn fail(context: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("{}: {}", context, error);
    std::process::exit(1);
}

/// Build a compiler from the default, local and `--config` layers
fn build_compiler(matches: &ArgMatches, strict: bool) -> Compiler {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if strict {
        loader = loader
            .set_override("lexer.unknown_characters", "reject")
            .unwrap_or_else(|e| fail("Configuration error", e));
    }
    let config = loader
        .build()
        .unwrap_or_else(|e| fail("Configuration error", e));
    Compiler::new(config)
}

fn read_source(matches: &ArgMatches) -> String {
    match matches.get_one::<String>("path").map(String::as_str) {
        None | Some("-") => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .unwrap_or_else(|e| fail("Error reading stdin", e));
            source
        }
        Some(path) => {
            std::fs::read_to_string(path).unwrap_or_else(|e| fail("Error reading file", e))
        }
    }
}

/// Handle the compile command
fn handle_compile_command(matches: &ArgMatches) {
    let compiler = build_compiler(matches, matches.get_flag("strict"));
    let source = read_source(matches);
    let output = compiler
        .compile(&source)
        .unwrap_or_else(|e| fail("Compile error", e));
    println!("{}", output);
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) {
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("target-treeviz");
    let spec = ProcessingSpec::from_string(format).unwrap_or_else(|e| fail("Format error", e));
    let compiler = build_compiler(matches, false);
    let source = read_source(matches);
    let output =
        process_source(&source, &spec, &compiler).unwrap_or_else(|e| fail("Processing error", e));

    print!("{}", output);
    if !output.is_empty() && !output.ends_with('\n') {
        println!();
    }
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    println!("Available formats:\n");
    for format in available_formats() {
        println!("  {}", format);
    }
}
