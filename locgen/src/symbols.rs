//! Identifier derivation and list grouping over the sorted key names.
//!
//! Every key name gets one generated identifier. Key names ending in a
//! numeric suffix (`field.0`, `field.1`, ...) are additionally collected into
//! ordered list groups so the emitter can generate one accessor per group.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use regex::Regex;

use crate::warnings::Warning;

lazy_static! {
    static ref LIST_KEY_REGEX: Regex = Regex::new(r"^(.+)\.(\d+)$").unwrap();
}

/// One member of a list group: the generated identifier and the numeric
/// suffix it was derived from. Members sort by `index`, not by identifier, so
/// `field.10` lands after `field.9`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListMember {
    pub identifier: String,
    pub index: u64,
}

/// Generated symbols for one run.
#[derive(Debug, Default)]
pub struct Symbols {
    /// Generated identifier → key name. A later key name that cases to an
    /// already-used identifier overwrites the earlier mapping.
    pub identifiers: BTreeMap<String, String>,
    /// Camel-cased prefix → members ordered by numeric suffix ascending.
    pub list_groups: BTreeMap<String, Vec<ListMember>>,
    /// Collisions and merges observed while grouping.
    pub warnings: Vec<Warning>,
}

/// Camel-cases a dotted key name into a code identifier.
///
/// Word-boundary rule: every non-alphanumeric character is a boundary and is
/// dropped; the first character of each word is uppercased via Unicode simple
/// case mapping (never locale-sensitive) and the rest of the word is kept
/// verbatim. `common.greeting` becomes `CommonGreeting`, `size.items.10`
/// becomes `SizeItems10`.
pub fn to_upper_camel(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut boundary = true;
    for ch in name.chars() {
        if ch.is_alphanumeric() {
            if boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            boundary = false;
        } else {
            boundary = true;
        }
    }
    out
}

/// Derives identifiers and list groups from key names in sorted order.
///
/// The numeric-suffix pattern is applied once per key name; `a.0.1` joins the
/// group for `a.0` and no recursive grouping is performed. Suffixes wider
/// than `u64` saturate to `u64::MAX`, so such members sort after every
/// in-range member and keep their sorted key-name order among themselves
/// (the member sort is stable).
pub fn group(sorted_key_names: &[String]) -> Symbols {
    let mut symbols = Symbols::default();
    // Raw prefix that first produced each group, for merge detection.
    let mut group_sources: BTreeMap<String, String> = BTreeMap::new();

    for key_name in sorted_key_names {
        let identifier = to_upper_camel(key_name);
        if identifier.starts_with(|c: char| c.is_ascii_digit()) {
            symbols.warnings.push(Warning::IdentifierStartsWithDigit {
                identifier: identifier.clone(),
                key_name: key_name.clone(),
            });
        }
        if let Some(previous) = symbols
            .identifiers
            .insert(identifier.clone(), key_name.clone())
        {
            if previous != *key_name {
                symbols.warnings.push(Warning::IdentifierCollision {
                    identifier: identifier.clone(),
                    previous,
                    replacement: key_name.clone(),
                });
            }
        }

        if let Some(captures) = LIST_KEY_REGEX.captures(key_name) {
            let prefix = &captures[1];
            let index = captures[2].parse::<u64>().unwrap_or(u64::MAX);
            let group_key = to_upper_camel(prefix);

            match group_sources.get(&group_key) {
                Some(source) if source != prefix => {
                    symbols.warnings.push(Warning::ListGroupMerged {
                        group: group_key.clone(),
                        previous_prefix: source.clone(),
                        merged_prefix: prefix.to_string(),
                    });
                }
                Some(_) => {}
                None => {
                    group_sources.insert(group_key.clone(), prefix.to_string());
                }
            }

            symbols
                .list_groups
                .entry(group_key)
                .or_default()
                .push(ListMember { identifier, index });
        }
    }

    for members in symbols.list_groups.values_mut() {
        members.sort_by_key(|member| member.index);
    }

    symbols
}
