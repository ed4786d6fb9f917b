//! Command-line interface for pt-law-parser
//!
//! Usage:
//!   pt-law tokens `<path>`                      - Print the annotated token sequence
//!   pt-law tree `<path>` [--format `<format>`]  - Print the document tree
//!   pt-law json `<path>`                        - Print the document tree as JSON
//!   pt-law formats                            - List the output formats
//!
//! Every command accepts `--config <file>` to layer a TOML file over the defaults, and
//! `--no-normalize` for input that is already normalized text. Set `RUST_LOG=debug` to see
//! the observers at work.

use clap::{Arg, ArgAction, ArgMatches, Command};
use pt_law_parser::law::config::{LawConfig, Loader};
use pt_law_parser::law::error::LawError;
use pt_law_parser::law::processor::{format_tokens, read_source, Processor};

fn path_arg() -> Arg {
    Arg::new("path")
        .help("Path to the act (HTML or normalized text)")
        .required(true)
        .index(1)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = Command::new("pt-law")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Turns Portuguese legal acts into structured document trees")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the default configuration"),
        )
        .arg(
            Arg::new("no-normalize")
                .long("no-normalize")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Parse the input as is, without normalizing it"),
        )
        .subcommand(
            Command::new("tokens")
                .about("Print the annotated token sequence")
                .arg(path_arg()),
        )
        .subcommand(
            Command::new("tree")
                .about("Print the document tree")
                .arg(path_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Output format (see `pt-law formats`); defaults to output.format"),
                ),
        )
        .subcommand(
            Command::new("json")
                .about("Print the document tree as JSON")
                .arg(path_arg()),
        )
        .subcommand(Command::new("formats").about("List the available output formats"))
        .get_matches();

    if let Err(e) = run(&matches) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_config(matches: &ArgMatches) -> Result<LawConfig, LawError> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("no-normalize") {
        loader = loader.set_override("input.normalize", false)?;
    }
    Ok(loader.build()?)
}

fn run(matches: &ArgMatches) -> Result<(), LawError> {
    let Some((command, sub)) = matches.subcommand() else {
        unreachable!("clap requires a subcommand")
    };
    // global arguments are propagated to the subcommand's matches
    let config = load_config(sub)?;
    let processor = Processor::from_config(&config);

    match command {
        "tokens" => {
            let raw = read_source(required(sub, "path"))?;
            let tokens = format_tokens(&processor.tokens(&raw));
            print!("{tokens}");
        }
        "tree" => {
            let format = sub
                .get_one::<String>("format")
                .unwrap_or(&config.output.format);
            let output = processor.process_file(required(sub, "path"), format)?;
            print!("{output}");
        }
        "json" => {
            let output = processor.process_file(required(sub, "path"), "json")?;
            println!("{output}");
        }
        "formats" => {
            println!("Available formats:\n");
            for (name, description) in processor.registry().describe() {
                println!("  {name:<10} {description}");
            }
        }
        _ => unreachable!(),
    }

    Ok(())
}

fn required<'a>(matches: &'a ArgMatches, id: &str) -> &'a str {
    // clap enforces required arguments before we get here
    matches
        .get_one::<String>(id)
        .map(String::as_str)
        .unwrap_or_default()
}
