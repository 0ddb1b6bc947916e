//! Command line definition

use clap::{value_parser, Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the `protoforge` command
pub(crate) fn command() -> Command {
    Command::new("protoforge")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Author prototype records and append them to YAML documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .value_parser(value_parser!(PathBuf))
                .help("Config file (default: ./protoforge.toml if present)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Debug logging unless RUST_LOG is set"),
        )
        .subcommand(
            Command::new("import")
                .about("Import every bundle in a folder and append the records to a document")
                .arg(folder_arg())
                .arg(into_arg())
                .arg(styleguide_arg()),
        )
        .subcommand(
            Command::new("append")
                .about("Import the given bundles and append the records to a document")
                .arg(
                    Arg::new("bundles")
                        .required(true)
                        .num_args(1..)
                        .value_parser(value_parser!(PathBuf))
                        .help("Bundle folders, e.g. big_door.rsi"),
                )
                .arg(into_arg())
                .arg(styleguide_arg()),
        )
        .subcommand(
            Command::new("format")
                .about("Separate top-level records in a document with blank lines")
                .arg(
                    Arg::new("document")
                        .required(true)
                        .value_parser(value_parser!(PathBuf))
                        .help("Document to format (.yml or .yaml)"),
                ),
        )
        .subcommand(
            Command::new("show")
                .about("Print the records a folder import would produce")
                .arg(folder_arg())
                .arg(styleguide_arg()),
        )
}

fn folder_arg() -> Arg {
    Arg::new("folder")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Folder holding one bundle folder per prototype")
}

fn into_arg() -> Arg {
    Arg::new("into")
        .long("into")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Existing document to append to; its comments and formatting are lost")
}

fn styleguide_arg() -> Arg {
    Arg::new("styleguide-order")
        .long("styleguide-order")
        .action(ArgAction::SetTrue)
        .help("Reorder components by styleguide rank before writing")
}
