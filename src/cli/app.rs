//! Main CLI application

use crate::cli::logging::{get_verbosity, init_logging};
use crate::config::{
    validate_args, Invocation, RawArgs, FILE_NAME_FLAG, FLAG_NAMES, ID_FLAG, ITEM_FLAG,
    OPERATION_FLAG,
};
use crate::error::Result;
use crate::store::{encode_collection, UserStore};
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::ffi::OsString;
use std::io::{self, Write};
use tracing::debug;

/// CLI application
pub struct App {
    /// The clap command
    command: Command,
}

impl App {
    pub fn new() -> Self {
        App {
            command: build_command(),
        }
    }

    /// Run with the given command line, writing results to `out`
    pub fn run_from<I, T, W>(self, args: I, out: &mut W) -> Result<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
        W: Write,
    {
        let matches = self.command.get_matches_from(normalize_args(args));
        init_logging(get_verbosity(&matches));

        let invocation = validate_args(raw_args(&matches))?;
        debug!(
            operation = %invocation.operation(),
            file = %invocation.file().display(),
            "dispatching"
        );

        perform(&invocation, out)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Execute one validated invocation and write its result to `out`.
///
/// Nothing is written when the operation has nothing to report.
pub fn perform<W: Write>(invocation: &Invocation, out: &mut W) -> Result<()> {
    let store = UserStore::new(invocation.file());

    let output = match invocation {
        Invocation::Add { item, .. } => store.add_json(item)?.to_string(),
        Invocation::List { .. } => encode_collection(&store.list()?)?,
        Invocation::FindById { id, .. } => match store.find_by_id(id)? {
            Some(user) => user.to_json()?,
            None => String::new(),
        },
        Invocation::Remove { id, .. } => store.remove_by_id(id)?.to_string(),
    };

    if !output.is_empty() {
        out.write_all(output.as_bytes())?;
        out.flush()?;
    }

    Ok(())
}

/// Build the clap command
fn build_command() -> Command {
    Command::new("userstore")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage user records kept in a JSON file")
        .arg(
            value_arg(OPERATION_FLAG, "OPERATION")
                .help("Operation to run: add, list, findById or remove"),
        )
        .arg(value_arg(FILE_NAME_FLAG, "FILE").help("Path to the JSON file holding the users"))
        .arg(value_arg(ITEM_FLAG, "JSON").help("User to add, as a JSON object"))
        .arg(value_arg(ID_FLAG, "ID").help("Id of the user to find or remove"))
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Only print errors")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("silent")
                .short('s')
                .long("silent")
                .help("Print no diagnostics")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Print debug diagnostics")
                .action(ArgAction::SetTrue),
        )
}

/// A long flag taking a single value. Requiredness is checked per
/// operation after parsing.
fn value_arg(name: &'static str, value_name: &'static str) -> Arg {
    Arg::new(name)
        .long(name)
        .value_name(value_name)
        .num_args(1)
        .allow_hyphen_values(true)
}

/// Collect flag values for validation
fn raw_args(matches: &ArgMatches) -> RawArgs {
    let get = |name: &str| matches.get_one::<String>(name).cloned();
    RawArgs {
        operation: get(OPERATION_FLAG),
        file_name: get(FILE_NAME_FLAG),
        item: get(ITEM_FLAG),
        id: get(ID_FLAG),
    }
}

/// Rewrite single-dash long flags (`-fileName x`, `-id=1`) to the
/// double-dash form clap parses. Values following a flag are left alone.
fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut normalized = Vec::new();
    let mut expecting_value = false;

    for arg in args.into_iter().map(Into::into) {
        if expecting_value {
            expecting_value = false;
            normalized.push(arg);
            continue;
        }

        let Some(text) = arg.to_str() else {
            normalized.push(arg);
            continue;
        };

        let (dashes, rest) = if let Some(rest) = text.strip_prefix("--") {
            (2, rest)
        } else if let Some(rest) = text.strip_prefix('-') {
            (1, rest)
        } else {
            normalized.push(arg);
            continue;
        };

        let (name, has_inline_value) = match rest.split_once('=') {
            Some((name, _)) => (name, true),
            None => (rest, false),
        };

        if !FLAG_NAMES.contains(&name) {
            normalized.push(arg);
            continue;
        }

        expecting_value = !has_inline_value;
        if dashes == 1 {
            normalized.push(OsString::from(format!("-{}", text)));
        } else {
            normalized.push(arg);
        }
    }

    normalized
}

/// Run the CLI application against the process arguments
pub fn run() -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    App::new().run_from(std::env::args_os(), &mut out)
}
