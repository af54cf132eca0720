use std::path::PathBuf;

use clap::{Arg, ArgAction, Command as ClapCommand, value_parser};

pub(crate) fn clap_command(program_name: &'static str) -> ClapCommand {
    ClapCommand::new(program_name)
        .version(env!("CARGO_PKG_VERSION"))
        .about("Classify paths against exclusion and inclusion rule files.")
        .arg(
            Arg::new("rules")
                .long("rules")
                .short('r')
                .value_name("FILE")
                .help("Rule file to load; may be supplied multiple times.")
                .value_parser(value_parser!(PathBuf))
                .action(ArgAction::Append)
                .required_unless_present("rule"),
        )
        .arg(
            Arg::new("rule")
                .long("rule")
                .short('e')
                .value_name("RULE")
                .help("Inline rule applied after every rule file; may be supplied multiple times.")
                .allow_hyphen_values(true)
                .action(ArgAction::Append),
        )
        .arg(
            Arg::new("inherited")
                .long("inherited")
                .short('i')
                .help("Apply only rules inherited by subdirectories.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("explain")
                .long("explain")
                .help("Print the rule that decided each match.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("check")
                .long("check")
                .help("Validate the rules and print how many were loaded.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase verbosity; may be supplied multiple times.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("paths")
                .value_name("PATH")
                .help("Relative paths to classify.")
                .num_args(1..)
                .action(ArgAction::Append)
                .required_unless_present("check"),
        )
}
