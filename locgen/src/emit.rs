//! Rendering of the generated Rust module. Purely mechanical substitution:
//! every decision (ordering, grouping, naming) has already been made by the
//! aggregation and grouping stages.
//!
//! The generated code targets the external `i18n` runtime crate: `Key` is a
//! `Copy` newtype over `&'static str` with a public field, and `Localizer`
//! owns locale fallback policy. The module is wired with a process-wide
//! handle initialized once with the default language pair and the aggregated
//! value table.

use std::collections::BTreeMap;

use crate::symbols::Symbols;

/// File name of the generated module inside the output directory.
pub const GENERATED_MODULE_FILE: &str = "mod.rs";
/// File name of the companion list-accessor module, emitted only when at
/// least one list group exists.
pub const GENERATED_LISTS_FILE: &str = "lists.rs";

const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_FALLBACK_LANGUAGE: &str = "en";

/// Rendered source text for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedSource {
    pub module: String,
    pub lists: Option<String>,
}

fn header(timestamp: &str) -> String {
    format!("// Code generated by locgen. DO NOT EDIT.\n// Generated at {timestamp}\n\n")
}

/// Renders the generated module (and the list companion when applicable).
///
/// Output is byte-for-byte reproducible for a fixed `values`/`symbols` pair;
/// only the `timestamp` line varies between runs.
pub fn render(
    values: &BTreeMap<String, String>,
    symbols: &Symbols,
    timestamp: &str,
) -> GeneratedSource {
    let lists = render_lists(symbols, timestamp);
    let module = render_module(values, symbols, timestamp, lists.is_some());
    GeneratedSource { module, lists }
}

fn render_module(
    values: &BTreeMap<String, String>,
    symbols: &Symbols,
    timestamp: &str,
    has_lists: bool,
) -> String {
    let mut out = header(timestamp);
    out.push_str("#![allow(non_upper_case_globals)]\n\n");
    if has_lists {
        out.push_str("pub mod lists;\n\n");
    }
    out.push_str("use std::collections::HashMap;\n");
    out.push_str("use std::sync::LazyLock;\n\n");
    out.push_str("use i18n::{Key, Localizer, Replacements};\n\n");
    out.push_str(&format!(
        "static LOCALIZER: LazyLock<Localizer> =\n    LazyLock::new(|| Localizer::new({:?}, {:?}, localizations()));\n\n",
        DEFAULT_LANGUAGE, DEFAULT_FALLBACK_LANGUAGE
    ));
    out.push_str(
        "/// Looks up `key` for `locale`; locale fallback policy belongs to the runtime.\n\
         pub fn get_with_locale(locale: &str, key: Key, replacements: &[Replacements]) -> String {\n\
         \x20   LOCALIZER.get_with_locale(locale, key, replacements)\n\
         }\n\n",
    );

    for (identifier, key_name) in &symbols.identifiers {
        out.push_str(&format!(
            "pub const {identifier}: Key = Key({key_name:?});\n"
        ));
    }
    out.push('\n');

    out.push_str("pub(crate) fn localizations() -> HashMap<&'static str, &'static str> {\n");
    out.push_str("    HashMap::from([\n");
    for (key, value) in values {
        out.push_str(&format!("        ({key:?}, {value:?}),\n"));
    }
    out.push_str("    ])\n}\n");
    out
}

fn render_lists(symbols: &Symbols, timestamp: &str) -> Option<String> {
    if symbols.list_groups.is_empty() {
        return None;
    }

    let mut out = header(timestamp);
    out.push_str("#![allow(non_snake_case)]\n\n");
    out.push_str("use i18n::{Key, Replacements};\n\n");
    out.push_str("use super::*;\n\n");
    out.push_str(
        "/// Resolves each key for `locale` in order, skipping a key only when it is\n\
         /// absent for that locale and `fallback` is unset.\n\
         pub fn get_list_with_locale(\n\
         \x20   locale: &str,\n\
         \x20   keys: &[Key],\n\
         \x20   fallback: bool,\n\
         \x20   replacements: &[Replacements],\n\
         ) -> Vec<String> {\n\
         \x20   let table = localizations();\n\
         \x20   keys.iter()\n\
         \x20       .filter(|key| fallback || table.contains_key(format!(\"{locale}.{}\", key.0).as_str()))\n\
         \x20       .map(|key| get_with_locale(locale, *key, replacements))\n\
         \x20       .collect()\n\
         }\n",
    );

    for (group, members) in &symbols.list_groups {
        out.push_str(&format!(
            "\npub fn List{group}(locale: &str, fallback: bool, replacements: &[Replacements]) -> Vec<String> {{\n"
        ));
        out.push_str("    let keys = [\n");
        for member in members {
            out.push_str(&format!("        {},\n", member.identifier));
        }
        out.push_str("    ];\n");
        out.push_str("    get_list_with_locale(locale, &keys, fallback, replacements)\n}\n");
    }
    Some(out)
}
