//! Command-line host for a glossary file.
//!
//! Owns argument parsing, path resolution, logger setup and exit codes.
//! Every subcommand opens the glossary, applies one operation and saves.

mod commands;

use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;

use crate::error::GlossaryError;
use crate::{logging, paths};

use commands::execute;

/// Build the complete CLI command tree
pub fn build_cli() -> Command {
    Command::new("glossary")
        .about("Keyword-indexed glossary stored in a single JSON file")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .env(paths::FILE_ENV_VAR)
                .help("Glossary file (default: <data dir>/glossary/glossary.json)")
                .global(true),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("JSON output mode")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Also print log events to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("new")
                .about("Create an empty glossary")
                .arg(Arg::new("title").long("title").default_value(""))
                .arg(Arg::new("author").long("author").default_value(""))
                .arg(Arg::new("description").long("description").default_value("")),
        )
        .subcommand(
            Command::new("add")
                .about("Add a definition and/or reference to a keyword")
                .arg(Arg::new("keyword").required(true))
                .arg(Arg::new("definition").long("definition").short('d').default_value(""))
                .arg(Arg::new("reference").long("reference").short('r').default_value(""))
                .arg(
                    Arg::new("case-sensitive")
                        .long("case-sensitive")
                        .help("Record the keyword as case-sensitive")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("remove")
                .about("Remove a definition, a reference, or the whole keyword")
                .arg(Arg::new("keyword").required(true))
                .arg(Arg::new("definition").long("definition").short('d').default_value(""))
                .arg(Arg::new("reference").long("reference").short('r').default_value("")),
        )
        .subcommand(
            Command::new("show")
                .about("Show the definitions and references of a keyword")
                .arg(Arg::new("keyword").required(true)),
        )
        .subcommand(
            Command::new("search")
                .about("Search keywords")
                .arg(Arg::new("query").required(true))
                .arg(
                    Arg::new("mode")
                        .long("mode")
                        .short('m')
                        .value_parser(["exact", "substr", "approx", "pattern"])
                        .default_value("approx"),
                )
                .arg(
                    Arg::new("case-sensitive")
                        .long("case-sensitive")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("max")
                        .long("max")
                        .short('n')
                        .help("Maximum number of results (default: 5)")
                        .value_parser(clap::value_parser!(usize)),
                ),
        )
        .subcommand(
            Command::new("meta")
                .about("Edit the title, author or description")
                .arg(
                    Arg::new("field")
                        .required(true)
                        .value_parser(["title", "author", "description"]),
                )
                .arg(Arg::new("value").required(true)),
        )
        .subcommand(Command::new("info").about("Show glossary metadata"))
}

fn resolve_path(matches: &ArgMatches) -> Result<PathBuf, GlossaryError> {
    match matches.get_one::<String>("file") {
        Some(file) => Ok(PathBuf::from(file)),
        None => paths::default_glossary_path(),
    }
}

/// Parse the process arguments, run one command and return the exit code
pub fn run() -> i32 {
    let matches = build_cli().get_matches();
    let json = matches.get_flag("json");

    let path = match resolve_path(&matches) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    if let Err(e) = logging::init(&path, matches.get_flag("verbose")) {
        eprintln!("Warning: failed to set up logging: {}", e);
    }

    match execute(&matches, &path) {
        Ok(output) => {
            println!("{}", output.render(json));
            0
        }
        Err(e) => {
            crate::debug!("Command failed for {:?}: {}", path, e);
            eprintln!("Error: {}", e);
            1
        }
    }
}
