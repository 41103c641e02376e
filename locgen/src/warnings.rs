//! Structured warnings for silent-merge events.
//!
//! Overwrites and identifier collisions resolve last-write-wins by design, but
//! the pipeline records each one so callers can surface them instead of losing
//! data silently. Warnings are never fatal.

use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// A fully-qualified key was written more than once; the later value won.
    ValueOverwritten {
        key: String,
        previous: String,
        replacement: String,
    },

    /// Two distinct key names cased to the same identifier; the later key
    /// name won.
    IdentifierCollision {
        identifier: String,
        previous: String,
        replacement: String,
    },

    /// Two distinct raw prefixes cased to the same list group; their members
    /// were merged into one accessor.
    ListGroupMerged {
        group: String,
        previous_prefix: String,
        merged_prefix: String,
    },

    /// A key name cased to an identifier starting with a digit, which is not
    /// a legal constant name in the generated module.
    IdentifierStartsWithDigit { identifier: String, key_name: String },
}

impl Display for Warning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::ValueOverwritten {
                key,
                previous,
                replacement,
            } => write!(
                f,
                "value for `{key}` overwritten: `{previous}` -> `{replacement}`"
            ),
            Warning::IdentifierCollision {
                identifier,
                previous,
                replacement,
            } => write!(
                f,
                "identifier `{identifier}` collides: `{previous}` replaced by `{replacement}`"
            ),
            Warning::ListGroupMerged {
                group,
                previous_prefix,
                merged_prefix,
            } => write!(
                f,
                "list group `{group}` merges prefixes `{previous_prefix}` and `{merged_prefix}`"
            ),
            Warning::IdentifierStartsWithDigit {
                identifier,
                key_name,
            } => write!(
                f,
                "identifier `{identifier}` for key `{key_name}` starts with a digit"
            ),
        }
    }
}
