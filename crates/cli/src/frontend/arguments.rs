use std::ffi::OsString;
use std::path::PathBuf;

use super::PROGRAM_NAME;
use super::command_builder::clap_command;

/// Command-line options after clap validation.
#[derive(Debug, Default)]
pub(crate) struct ParsedArgs {
    pub(crate) rule_files: Vec<PathBuf>,
    pub(crate) inline_rules: Vec<String>,
    pub(crate) paths: Vec<String>,
    pub(crate) inherited: bool,
    pub(crate) explain: bool,
    pub(crate) check: bool,
    pub(crate) verbose: u8,
}

pub(crate) fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();
    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command(PROGRAM_NAME).try_get_matches_from(args)?;

    Ok(ParsedArgs {
        rule_files: matches
            .remove_many::<PathBuf>("rules")
            .map(Iterator::collect)
            .unwrap_or_default(),
        inline_rules: matches
            .remove_many::<String>("rule")
            .map(Iterator::collect)
            .unwrap_or_default(),
        paths: matches
            .remove_many::<String>("paths")
            .map(Iterator::collect)
            .unwrap_or_default(),
        inherited: matches.get_flag("inherited"),
        explain: matches.get_flag("explain"),
        check: matches.get_flag("check"),
        verbose: matches.get_count("verbose"),
    })
}
