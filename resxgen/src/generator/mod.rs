//! Renders accessor classes and shared lookup helpers as C# text.
//!
//! Generation is deterministic: identical options and file contents always
//! produce byte-identical output, so the host can compare generated units
//! for change detection.

mod combo;
mod inline;
mod resource_manager;

pub use combo::generate_culture_helper;

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    error::Result,
    options::{FileOptions, InnerClassVisibility},
    types::{
        CancellationToken, Diagnostic, GeneratedUnit, ResourceEntry, Severity, SourceLocation,
    },
};

pub(crate) const INDENT: &str = "    ";
pub(crate) const HELPERS_NAMESPACE: &str = "ResXGen";
pub(crate) const CULTURE_INFO_PROPERTY: &str = "CultureInfo";

const AUTO_GENERATED_HEADER: &str = "\
// ------------------------------------------------------------------------------
// <auto-generated>
//     This code was generated by resxgen.
//     Changes to this file may cause incorrect behavior and will be lost if
//     the code is regenerated.
// </auto-generated>
// ------------------------------------------------------------------------------";

lazy_static! {
    static ref VALID_MEMBER_NAME: Regex = Regex::new(
        r"^[\p{L}\p{Nl}_][\p{Cf}\p{L}\p{Mc}\p{Mn}\p{Nd}\p{Nl}\p{Pc}]*$"
    )
    .unwrap();
    static ref INVALID_MEMBER_SYMBOLS: Regex =
        Regex::new(r"[^\p{Cf}\p{L}\p{Mc}\p{Mn}\p{Nd}\p{Nl}\p{Pc}]").unwrap();
}

fn duplicate_member_warning(location: SourceLocation, name: &str) -> Diagnostic {
    Diagnostic {
        code: "RESXGEN001",
        severity: Severity::Warning,
        message: format!("ignored added member '{name}'"),
        location,
    }
}

fn member_same_as_class_warning(location: SourceLocation, name: &str) -> Diagnostic {
    Diagnostic {
        code: "RESXGEN002",
        severity: Severity::Warning,
        message: format!("ignored member '{name}' has same name as class"),
        location,
    }
}

fn static_with_instance_error(location: SourceLocation) -> Diagnostic {
    Diagnostic {
        code: "RESXGEN003",
        severity: Severity::Error,
        message: "cannot have static members/class with a class instance".to_string(),
        location,
    }
}

/// The header, `#nullable enable`, and a file-scoped namespace declaration.
pub(crate) fn preamble(namespace: &str) -> String {
    format!("{AUTO_GENERATED_HEADER}\n#nullable enable\nnamespace {namespace};\n")
}

/// Generates the accessor class for one file group.
///
/// Unreadable main-file content yields a comment-only unit rather than an
/// error; all other recoverable problems surface as diagnostics on the
/// returned unit. Only cancellation aborts.
pub fn generate_accessor_class(
    options: &FileOptions,
    token: &CancellationToken,
) -> Result<GeneratedUnit> {
    let mut diagnostics = Vec::new();
    let unit_name = format!("{}.{}.g.cs", options.local_namespace, options.class_name);
    let main_path = &options.grouped_file.main_file.path;

    let Some(content) = options.grouped_file.main_file.content.as_deref() else {
        return Ok(GeneratedUnit {
            name: unit_name,
            source: format!("// ERROR reading file: {main_path}\n"),
            diagnostics,
        });
    };

    let namespace = options
        .custom_tool_namespace
        .as_deref()
        .unwrap_or(&options.local_namespace);
    let mut builder = preamble(namespace);

    if options.use_inline_lookup {
        inline::append_usings(&mut builder);
    } else {
        resource_manager::append_usings(&mut builder);
    }

    builder.push_str(if options.public_class { "public" } else { "internal" });
    if options.partial_class {
        builder.push_str(" partial");
    }
    builder.push_str(if options.static_class {
        " static class "
    } else {
        " class "
    });
    builder.push_str(&options.class_name);
    builder.push_str("\n{\n");

    let mut indent = String::from(INDENT);
    let mut container_class = options.class_name.clone();

    if options.inner_class_visibility != InnerClassVisibility::NotGenerated {
        container_class = if options.inner_class_name.is_empty() {
            "Resources".to_string()
        } else {
            options.inner_class_name.clone()
        };

        if !options.inner_class_instance_name.is_empty() {
            if options.static_class || options.static_members {
                diagnostics.push(static_with_instance_error(SourceLocation::file(main_path)));
            }
            builder.push_str(INDENT);
            builder.push_str("public ");
            builder.push_str(&container_class);
            builder.push(' ');
            builder.push_str(&options.inner_class_instance_name);
            builder.push_str(" { get; } = new();\n\n");
        }

        builder.push_str(INDENT);
        builder.push_str(match options.inner_class_visibility {
            InnerClassVisibility::SameAsOuter => {
                if options.public_class {
                    "public"
                } else {
                    "internal"
                }
            }
            other => other.keyword(),
        });
        if options.partial_class {
            builder.push_str(" partial");
        }
        builder.push_str(if options.static_class {
            " static class "
        } else {
            " class "
        });
        builder.push_str(&container_class);
        builder.push('\n');
        builder.push_str(INDENT);
        builder.push_str("{\n");

        indent.push_str(INDENT);
    }

    if options.use_inline_lookup {
        inline::generate_members(
            options,
            content,
            &indent,
            &container_class,
            &mut builder,
            &mut diagnostics,
            token,
        )?;
    } else {
        resource_manager::generate_members(
            options,
            content,
            &indent,
            &container_class,
            &mut builder,
            &mut diagnostics,
            token,
        )?;
    }

    if options.inner_class_visibility != InnerClassVisibility::NotGenerated {
        builder.push_str(INDENT);
        builder.push_str("}\n");
    }
    builder.push_str("}\n");

    Ok(GeneratedUnit {
        name: unit_name,
        source: builder,
        diagnostics,
    })
}

pub(crate) struct MemberStart {
    pub name: String,
    /// Whether the sanitized member name still equals the resource key, so
    /// the generated code may refer to the store entry via `nameof`.
    pub access_by_name: bool,
}

/// Emits the XML doc comment and the member declaration head
/// (`public static string? Name`), leaving the body to the caller.
///
/// Returns `None` when the member is skipped: duplicate names and names
/// colliding with the containing class produce a warning and no output.
pub(crate) fn begin_member(
    builder: &mut String,
    indent: &str,
    options: &FileOptions,
    entry: &ResourceEntry,
    already_added: &mut HashSet<String>,
    diagnostics: &mut Vec<Diagnostic>,
    container_class: &str,
) -> Option<MemberStart> {
    let (member_name, access_by_name) = if VALID_MEMBER_NAME.is_match(&entry.key) {
        (entry.key.clone(), true)
    } else {
        (
            INVALID_MEMBER_SYMBOLS.replace_all(&entry.key, "_").into_owned(),
            false,
        )
    };

    let location = SourceLocation {
        path: options.grouped_file.main_file.path.clone(),
        line: entry.line,
        column: entry.column,
        column_end: entry.column + member_name.chars().count() as u32,
    };

    if !already_added.insert(member_name.clone()) {
        diagnostics.push(duplicate_member_warning(location, &member_name));
        return None;
    }

    if member_name == container_class {
        diagnostics.push(member_same_as_class_warning(location, &member_name));
        return None;
    }

    builder.push('\n');
    builder.push_str(indent);
    builder.push_str("/// <summary>\n");
    builder.push_str(indent);
    builder.push_str("/// Looks up a localized string similar to ");
    builder.push_str(&doc_comment_text(&entry.value, indent));
    builder.push_str(".\n");
    builder.push_str(indent);
    builder.push_str("/// </summary>\n");

    builder.push_str(indent);
    builder.push_str("public ");
    if options.static_members {
        builder.push_str("static ");
    }
    builder.push_str("string");
    if !options.null_forgiving_operators {
        builder.push('?');
    }
    builder.push(' ');
    builder.push_str(&member_name);

    Some(MemberStart {
        name: member_name,
        access_by_name,
    })
}

/// HTML-escapes the neutral value and re-indents its lines as further
/// `///` comment lines.
fn doc_comment_text(value: &str, indent: &str) -> String {
    let normalized = value.trim().replace("\r\n", "\n").replace('\r', "\n");
    html_encode(&normalized).replace('\n', &format!("\n{indent}/// "))
}

pub(crate) fn html_encode(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders a C# string literal, quotes included.
pub(crate) fn csharp_literal(value: &str) -> String {
    let mut literal = String::with_capacity(value.len() + 2);
    literal.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => literal.push_str("\\\\"),
            '"' => literal.push_str("\\\""),
            '\n' => literal.push_str("\\n"),
            '\r' => literal.push_str("\\r"),
            '\t' => literal.push_str("\\t"),
            '\0' => literal.push_str("\\0"),
            c if (c as u32) < 0x20 => {
                literal.push_str(&format!("\\u{:04X}", c as u32));
            }
            c => literal.push(c),
        }
    }
    literal.push('"');
    literal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csharp_literal_escapes() {
        assert_eq!(csharp_literal("plain"), "\"plain\"");
        assert_eq!(csharp_literal("a\"b\\c"), "\"a\\\"b\\\\c\"");
        assert_eq!(csharp_literal("line1\nline2"), "\"line1\\nline2\"");
        assert_eq!(csharp_literal("bell\u{7}"), "\"bell\\u0007\"");
    }

    #[test]
    fn test_html_encode() {
        assert_eq!(html_encode("a < b & c > \"d\""), "a &lt; b &amp; c &gt; &quot;d&quot;");
    }

    #[test]
    fn test_member_name_sanitization() {
        assert!(VALID_MEMBER_NAME.is_match("CreateDate"));
        assert!(VALID_MEMBER_NAME.is_match("_private"));
        assert!(!VALID_MEMBER_NAME.is_match("1Leading"));
        assert!(!VALID_MEMBER_NAME.is_match("with space"));
        assert_eq!(
            INVALID_MEMBER_SYMBOLS.replace_all("with space!", "_"),
            "with_space_"
        );
    }
}
