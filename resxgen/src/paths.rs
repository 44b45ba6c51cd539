//! Path and namespace helpers.
//!
//! All functions here are total: path-resolution failures yield an empty
//! string (or the input unchanged) rather than an error, because the
//! callers treat a missing namespace as "fall back to the project name".

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;

use crate::cultures;

lazy_static! {
    static ref INVALID_NAMESPACE_CHARS: Regex = Regex::new(r"[^A-Za-z0-9_.]").unwrap();
    static ref REPEATED_DOTS: Regex = Regex::new(r"\.{2,}").unwrap();
}

fn file_stem(path: &str) -> &str {
    Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("")
}

/// The filename stripped of a trailing culture suffix, if it carries one:
/// `Strings.da-DK.resx` → `Strings`, `Strings.resx` → `Strings`, and
/// `Strings.v2.resx` → `Strings.v2` (`v2` is not a culture).
pub fn base_name(path: &str) -> String {
    let name = file_stem(path);
    let inner_extension = Path::new(name)
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or("");
    if cultures::is_culture_suffix(inner_extension) {
        file_stem(name).to_string()
    } else {
        name.to_string()
    }
}

/// The class name for a resource file: every dotted extension is stripped,
/// so `a/b/Page.aspx.resx` → `Page`.
pub fn class_name_from_path(path: &str) -> String {
    let mut class_name = Path::new(path)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("")
        .to_string();
    while class_name.contains('.') {
        class_name = file_stem(&class_name).to_string();
    }
    class_name
}

/// Rewrites `raw` into a valid namespace: every character outside
/// `[A-Za-z0-9_.]` becomes `_` and runs of dots collapse into one.
///
/// With `sanitize_first_char`, leading and trailing dots are trimmed and a
/// leading digit gets a `_` prefix. Callers pass `false` when a root
/// namespace prefix already guarantees a valid start.
pub fn sanitize_namespace(raw: &str, sanitize_first_char: bool) -> String {
    let sanitized = INVALID_NAMESPACE_CHARS.replace_all(raw, "_");
    let mut sanitized = REPEATED_DOTS.replace_all(&sanitized, ".").into_owned();
    if sanitize_first_char {
        sanitized = sanitized.trim_matches('.').to_string();
        if sanitized.starts_with(|c: char| c.is_ascii_digit()) {
            sanitized.insert(0, '_');
        }
    }
    sanitized
}

fn folder_to_namespace(folder: &str) -> String {
    folder.replace(['\\', '/'], ".").replace(' ', "")
}

fn starts_with_ignore_ascii_case(value: &str, prefix: &str) -> bool {
    value.len() >= prefix.len() && value.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

/// Derives the namespace for a resource file.
///
/// An explicit target path wins; otherwise, when the file lives under the
/// project folder, the relative folder path supplies the suffix. The
/// suffix is combined with `root_namespace` and sanitized, without
/// first-char rules when a root namespace is present, since the
/// concatenation already guarantees a valid start. Any failure to resolve
/// the involved folders yields an empty string.
pub fn local_namespace(
    resx_path: &str,
    target_path: Option<&str>,
    project_full_path: &str,
    root_namespace: &str,
) -> String {
    let Some(resx_folder) = Path::new(resx_path).parent().and_then(Path::to_str) else {
        return String::new();
    };
    let Some(project_folder) = Path::new(project_full_path).parent().and_then(Path::to_str)
    else {
        return String::new();
    };

    let suffix = match target_path.filter(|t| !t.trim().is_empty()) {
        Some(target) => {
            let target_folder = Path::new(target)
                .parent()
                .and_then(Path::to_str)
                .unwrap_or("");
            folder_to_namespace(target_folder)
        }
        None if starts_with_ignore_ascii_case(resx_folder, project_folder) => {
            folder_to_namespace(&resx_folder[project_folder.len()..])
        }
        None => String::new(),
    };

    let suffix = suffix.trim_matches('.');
    if root_namespace.is_empty() {
        sanitize_namespace(suffix, true)
    } else if suffix.is_empty() {
        root_namespace.to_string()
    } else {
        format!("{}.{}", root_namespace, sanitize_namespace(suffix, false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_name_strips_culture_suffix() {
        assert_eq!(base_name("proj/Strings.da-DK.resx"), "Strings");
        assert_eq!(base_name("proj/Strings.da.resx"), "Strings");
        assert_eq!(base_name("proj/Strings.resx"), "Strings");
        assert_eq!(base_name("proj/Strings.v2.resx"), "Strings.v2");
        assert_eq!(base_name("proj/Strings.qps-ploc.resx"), "Strings");
    }

    #[test]
    fn test_class_name_strips_all_extensions() {
        assert_eq!(class_name_from_path("a/b/Page.aspx.resx"), "Page");
        assert_eq!(class_name_from_path("a/b/a.b.c.resx"), "a");
        assert_eq!(class_name_from_path("Strings.resx"), "Strings");
    }

    #[test]
    fn test_sanitize_namespace() {
        assert_eq!(sanitize_namespace("Ns..Folder...Folder2", true), "Ns.Folder.Folder2");
        assert_eq!(sanitize_namespace("8Ns", true), "_8Ns");
        assert_eq!(sanitize_namespace(".Ns.Folder", true), "Ns.Folder");
        assert_eq!(sanitize_namespace(".Ns.Folder", false), ".Ns.Folder");
        assert_eq!(sanitize_namespace("My Ns-1", true), "My_Ns_1");
    }

    #[test]
    fn test_sanitize_namespace_is_idempotent() {
        for raw in [".Ns..Folder", "8Ns", "a b.c-d", "...", ""] {
            let once = sanitize_namespace(raw, true);
            assert_eq!(sanitize_namespace(&once, true), once);
        }
    }

    #[test]
    fn test_local_namespace_from_project_relative_folder() {
        assert_eq!(
            local_namespace("proj/Sub/Strings.resx", None, "proj/My.csproj", "Root"),
            "Root.Sub"
        );
        assert_eq!(
            local_namespace("proj/Strings.resx", None, "proj/My.csproj", "Root"),
            "Root"
        );
    }

    #[test]
    fn test_local_namespace_with_explicit_target() {
        assert_eq!(
            local_namespace(
                "elsewhere/Strings.resx",
                Some("Linked/Res/Strings.resx"),
                "proj/My.csproj",
                "Root"
            ),
            "Root.Linked.Res"
        );
    }

    #[test]
    fn test_local_namespace_outside_project_is_root_only() {
        assert_eq!(
            local_namespace("other/Strings.resx", None, "proj/My.csproj", "Root"),
            "Root"
        );
    }

    #[test]
    fn test_local_namespace_without_root() {
        assert_eq!(
            local_namespace("proj/Sub Dir/Strings.resx", None, "proj/My.csproj", ""),
            "SubDir"
        );
    }
}
