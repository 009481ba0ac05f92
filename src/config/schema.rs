//! Argument validation
//!
//! Turns the loosely collected flag values into an [`Invocation`].

use crate::config::types::{
    Invocation, Operation, RawArgs, FILE_NAME_FLAG, ID_FLAG, ITEM_FLAG, OPERATION_FLAG,
};
use crate::error::{Result, UserStoreError};
use std::path::PathBuf;

/// Validate raw flags for the selected operation.
///
/// Checks run in a fixed order: `-operation` present, `-fileName`
/// present, operation name known, then the operation's own flag.
pub fn validate_args(args: RawArgs) -> Result<Invocation> {
    let operation = require(args.operation, OPERATION_FLAG)?;
    let file = PathBuf::from(require(args.file_name, FILE_NAME_FLAG)?);

    let invocation = match operation.parse::<Operation>()? {
        Operation::Add => Invocation::Add {
            file,
            item: require(args.item, ITEM_FLAG)?,
        },
        Operation::List => Invocation::List { file },
        Operation::FindById => Invocation::FindById {
            file,
            id: require(args.id, ID_FLAG)?,
        },
        Operation::Remove => Invocation::Remove {
            file,
            id: require(args.id, ID_FLAG)?,
        },
    };

    Ok(invocation)
}

/// An absent flag and an empty one are both missing
fn require(value: Option<String>, flag: &'static str) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(UserStoreError::MissingArgument(flag)),
    }
}
