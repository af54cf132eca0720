mod arguments;
mod command_builder;
mod rules;

use std::ffi::OsString;
use std::io::{self, Write};

use clap::error::ErrorKind;
use filters::debug_filter::FilterTracer;
use filters::{Candidate, FilterAction, FilterChain, Verdict};
use logging::VerbosityConfig;
use tracing::debug;

use arguments::{ParsedArgs, parse_args};
use rules::{load_chain, normalize_path};

/// Name used in usage text and diagnostics.
const PROGRAM_NAME: &str = "syncfilter";

const EXIT_SUCCESS: i32 = 0;
const EXIT_FAILURE: i32 = 1;
const EXIT_USAGE: i32 = 2;

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Runs the CLI using the provided argument iterator and output handles.
///
/// Returns the process exit status: `0` on success, `1` when the rules could
/// not be loaded or the output could not be written, and `2` for usage
/// errors.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => {
            // An embedding process may already own the global subscriber.
            let _ = logging::init_tracing(VerbosityConfig::from_verbose_level(parsed.verbose));
            execute(&parsed, stdout, stderr)
        }
        Err(error) => report_usage_error(&error, stdout, stderr),
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}

fn report_usage_error<Out, Err>(error: &clap::Error, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = write!(stdout, "{}", error.render());
            EXIT_SUCCESS
        }
        _ => {
            let _ = write!(stderr, "{}", error.render());
            EXIT_USAGE
        }
    }
}

fn execute<Out, Err>(parsed: &ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let chain = match load_chain(&parsed.rule_files, &parsed.inline_rules) {
        Ok(chain) => chain,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: {error}");
            return EXIT_FAILURE;
        }
    };

    let written = if parsed.check {
        write_rule_count(&chain, stdout)
    } else {
        classify_paths(&chain, parsed, stdout)
    };

    match written.and_then(|()| stdout.flush()) {
        Ok(()) => EXIT_SUCCESS,
        Err(error) if error.kind() == io::ErrorKind::BrokenPipe => EXIT_SUCCESS,
        Err(error) => {
            let _ = writeln!(stderr, "{PROGRAM_NAME}: failed to write output: {error}");
            EXIT_FAILURE
        }
    }
}

fn write_rule_count<W: Write>(chain: &FilterChain, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "rules: {} (exclusions: {}, inclusions: {})",
        chain.len(),
        chain.exclusions().len(),
        chain.inclusions().len()
    )
}

fn classify_paths<W: Write>(
    chain: &FilterChain,
    parsed: &ParsedArgs,
    out: &mut W,
) -> io::Result<()> {
    let mut tracer = FilterTracer::new();

    for path in &parsed.paths {
        let candidate = Candidate::from_path(normalize_path(path));
        let verdict = chain.explain(&candidate, parsed.inherited);
        tracer.record_evaluation(verdict.excluded(), verdict.included());
        debug!(path = %path, status = verdict.status(), "classified");

        write!(out, "{}\t{path}", verdict.status())?;
        if parsed.explain {
            write_deciding_rules(&verdict, out)?;
        }
        writeln!(out)?;
    }

    tracer.summary();
    Ok(())
}

fn write_deciding_rules<W: Write>(verdict: &Verdict<'_>, out: &mut W) -> io::Result<()> {
    if let Some(rule) = verdict.exclusion() {
        write!(out, "\t{}{rule}", FilterAction::Exclude.sign())?;
    }
    if let Some(rule) = verdict.inclusion() {
        write!(out, "\t{}{rule}", FilterAction::Include.sign())?;
    }
    Ok(())
}
