//! Inline-lookup member bodies: each accessor calls the shared
//! per-combination helper with the neutral value and every sibling's value
//! for the key.

use std::collections::{HashMap, HashSet};

use crate::{
    error::Result,
    options::FileOptions,
    resx,
    types::{CancellationToken, CultureCombination, Diagnostic},
};

use super::{begin_member, combo::function_name_postfix, csharp_literal};

pub(crate) fn append_usings(builder: &mut String) {
    builder.push_str("using static ResXGen.Helpers;\n\n");
}

pub(crate) fn generate_members(
    options: &FileOptions,
    content: &str,
    indent: &str,
    container_class: &str,
    builder: &mut String,
    diagnostics: &mut Vec<Diagnostic>,
    token: &CancellationToken,
) -> Result<()> {
    let combo = CultureCombination::new(&options.grouped_file.sub_files);
    let defined = combo.defined_cultures();
    let postfix = function_name_postfix(&defined);
    let main_path = &options.grouped_file.main_file.path;

    let Ok(fallback) = resx::parse_resx(content) else {
        builder.push_str(&unreadable_comment(main_path));
        return Ok(());
    };

    // Sibling value maps in combination order; first occurrence wins on
    // duplicate keys within one sibling file.
    let mut sibling_maps: Vec<HashMap<String, String>> = Vec::with_capacity(defined.len());
    for culture in &defined {
        let Some(text) = culture.file.content.as_deref() else {
            builder.push_str(&unreadable_comment(main_path));
            return Ok(());
        };
        let Ok(entries) = resx::parse_resx(text) else {
            builder.push_str(&unreadable_comment(main_path));
            return Ok(());
        };
        sibling_maps.push(resx::entry_map(&entries));
    }

    let mut already_added = HashSet::new();
    for entry in &fallback {
        token.check()?;
        if begin_member(
            builder,
            indent,
            options,
            entry,
            &mut already_added,
            diagnostics,
            container_class,
        )
        .is_none()
        {
            continue;
        }

        builder.push_str(" => GetString_");
        builder.push_str(&postfix);
        builder.push('(');
        builder.push_str(&csharp_literal(&entry.value));
        for map in &sibling_maps {
            builder.push_str(", ");
            // A sibling missing this key falls back to the neutral value.
            let value = map.get(&entry.key).map(String::as_str).unwrap_or(&entry.value);
            builder.push_str(&csharp_literal(value));
        }
        builder.push_str(");\n");
    }

    Ok(())
}

fn unreadable_comment(path: &str) -> String {
    format!("// could not read {path} or one of its children\n")
}
