//! Core model types for resxgen.
//!
//! Everything here has structural (value) equality: the host environment
//! compares snapshots of these types to decide whether regeneration is
//! needed, so no identity semantics may leak in.

use std::{
    hash::{Hash, Hasher},
    path::Path,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
};

use serde::Serialize;

use crate::{
    cultures,
    error::{Error, Result},
};

/// A single candidate resource file as supplied by the host environment.
///
/// Identity is `(path, hash)`; the hash is an opaque change token chosen by
/// the host (never derived from content by this crate). `content` is the
/// already-decoded text, or `None` when the host could not read the file.
#[derive(Debug, Clone, Serialize)]
pub struct InputFile {
    pub path: String,
    pub hash: u64,
    #[serde(skip)]
    pub content: Option<String>,
}

impl InputFile {
    pub fn new(path: impl Into<String>, hash: u64, content: Option<String>) -> Self {
        InputFile {
            path: path.into(),
            hash,
            content,
        }
    }

    /// The filename without its final extension.
    pub fn file_stem(&self) -> &str {
        Path::new(&self.path)
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("")
    }

    /// The culture tag carried by this file's name, if any
    /// (`Strings.da-DK.resx` → `Some("da-DK")`).
    pub fn culture_tag(&self) -> Option<&str> {
        let stem = self.file_stem();
        match Path::new(stem).extension().and_then(|s| s.to_str()) {
            Some(tag) if !tag.is_empty() => Some(tag),
            _ => None,
        }
    }
}

impl PartialEq for InputFile {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path && self.hash == other.hash
    }
}

impl Eq for InputFile {}

impl Hash for InputFile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
        self.hash.hash(state);
    }
}

/// A main resource file together with its culture-suffixed siblings.
///
/// `sub_files` is sorted by path with ordinal comparison so that two
/// groupings built from differently-ordered inputs compare equal and emit
/// identical output.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GroupedFile {
    pub main_file: InputFile,
    pub sub_files: Vec<InputFile>,
}

impl GroupedFile {
    pub fn new(main_file: InputFile, mut sub_files: Vec<InputFile>) -> Self {
        sub_files.sort_by(|a, b| a.path.as_bytes().cmp(b.path.as_bytes()));
        GroupedFile {
            main_file,
            sub_files,
        }
    }
}

/// The distinct shape of culture siblings carried by a group.
///
/// Pairs are ordered by tag length descending, then lexicographically, so
/// that a more specific culture (`da-DK`) is always processed before its
/// general sibling (`da`). The fallback synthesis in [`crate::lookup`]
/// relies on this ordering.
///
/// Equality considers the tag sequence only: groups with the same culture
/// shape share one generated lookup helper regardless of which files
/// carried the tags.
#[derive(Debug, Clone, Serialize)]
pub struct CultureCombination {
    cultures: Vec<(String, InputFile)>,
}

impl CultureCombination {
    pub fn new(sub_files: &[InputFile]) -> Self {
        let mut cultures: Vec<(String, InputFile)> = sub_files
            .iter()
            .map(|f| (f.culture_tag().unwrap_or("").to_string(), f.clone()))
            .collect();
        cultures.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        CultureCombination { cultures }
    }

    /// The `(tag, file)` pairs in processing order.
    pub fn cultures(&self) -> &[(String, InputFile)] {
        &self.cultures
    }

    /// The culture tags in processing order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.cultures.iter().map(|(tag, _)| tag.as_str())
    }

    /// Resolves each tag against the culture table.
    ///
    /// Tags absent from the table are skipped; grouping only admits valid
    /// culture suffixes, so this can only drop unregistered `qps-*`
    /// pseudo-locales.
    pub fn defined_cultures(&self) -> Vec<DefinedCulture> {
        self.cultures
            .iter()
            .filter_map(|(tag, file)| {
                cultures::culture_by_tag(tag).map(|def| DefinedCulture {
                    name: def.tag.replace('-', "_"),
                    lcid: def.lcid,
                    file: file.clone(),
                })
            })
            .collect()
    }
}

impl PartialEq for CultureCombination {
    fn eq(&self, other: &Self) -> bool {
        self.tags().eq(other.tags())
    }
}

impl Eq for CultureCombination {}

impl Hash for CultureCombination {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for tag in self.tags() {
            tag.hash(state);
        }
    }
}

/// A culture sibling resolved against the culture table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinedCulture {
    /// The canonical tag with dashes replaced by underscores, usable as a
    /// C# identifier fragment (`da_DK`).
    pub name: String,
    pub lcid: u32,
    pub file: InputFile,
}

/// One key/value pair extracted from a resource file, with the position of
/// its name attribute in the source text (1-based line and column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    pub key: String,
    pub value: String,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A source location inside an original resource file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    pub path: String,
    pub line: u32,
    pub column: u32,
    pub column_end: u32,
}

impl SourceLocation {
    /// A location pointing at a file as a whole.
    pub fn file(path: impl Into<String>) -> Self {
        SourceLocation {
            path: path.into(),
            line: 1,
            column: 1,
            column_end: 1,
        }
    }
}

/// A generation-time warning or error, attributable to a resource key when
/// a location is available.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    pub location: SourceLocation,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{}): {} {}: {}",
            self.location.path,
            self.location.line,
            self.location.column,
            self.severity,
            self.code,
            self.message
        )
    }
}

/// One generated output: a stable slot name plus the full source text, with
/// any diagnostics produced along the way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedUnit {
    /// Stable output slot name, e.g. `MyApp.Resources.Strings.g.cs`.
    pub name: String,
    pub source: String,
    pub diagnostics: Vec<Diagnostic>,
}

/// Cooperative cancellation signal checked between independent units of
/// work (per group, per resource entry).
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }

    /// Returns `Err(Error::Cancelled)` once the token has been cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Cancelled)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(path: &str) -> InputFile {
        InputFile::new(path, 1, None)
    }

    #[test]
    fn test_input_file_equality_ignores_content() {
        let a = InputFile::new("x/Strings.resx", 7, Some("<root/>".into()));
        let b = InputFile::new("x/Strings.resx", 7, None);
        assert_eq!(a, b);
        assert_ne!(a, InputFile::new("x/Strings.resx", 8, None));
    }

    #[test]
    fn test_culture_tag_extraction() {
        assert_eq!(file("a/Strings.da-DK.resx").culture_tag(), Some("da-DK"));
        assert_eq!(file("a/Strings.resx").culture_tag(), None);
    }

    #[test]
    fn test_grouped_file_sorts_sub_files() {
        let a = GroupedFile::new(
            file("a/S.resx"),
            vec![file("a/S.vi.resx"), file("a/S.da.resx")],
        );
        let b = GroupedFile::new(
            file("a/S.resx"),
            vec![file("a/S.da.resx"), file("a/S.vi.resx")],
        );
        assert_eq!(a, b);
        assert_eq!(a.sub_files[0].path, "a/S.da.resx");
    }

    #[test]
    fn test_combination_orders_specific_before_general() {
        let combo =
            CultureCombination::new(&[file("a/S.da.resx"), file("a/S.da-DK.resx")]);
        let tags: Vec<_> = combo.tags().collect();
        assert_eq!(tags, vec!["da-DK", "da"]);
    }

    #[test]
    fn test_combination_equality_on_tags_only() {
        let a = CultureCombination::new(&[file("a/S.da.resx"), file("a/S.vi.resx")]);
        let b = CultureCombination::new(&[file("b/T.vi.resx"), file("b/T.da.resx")]);
        assert_eq!(a, b);

        let c = CultureCombination::new(&[file("b/T.fr.resx"), file("b/T.da.resx")]);
        assert_ne!(a, c);
    }

    #[test]
    fn test_cancellation_token() {
        let token = CancellationToken::new();
        assert!(token.check().is_ok());
        token.cancel();
        assert!(matches!(token.check(), Err(Error::Cancelled)));
    }
}
