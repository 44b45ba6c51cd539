#![forbid(unsafe_code)]
//! Build-time accessor code generator for `.resx` localization files.
//!
//! Given a flat set of resource files and a layered configuration, resxgen
//! groups the files into main-file/culture-sibling clusters, resolves one
//! effective option set per cluster, and emits C# accessor classes whose
//! members resolve the correct localized value at lookup time, either
//! through a `ResourceManager` store or through generated switch-based
//! dispatch with hierarchical culture fallback.
//!
//! # Quick Start
//!
//! ```rust
//! use resxgen::{
//!     CancellationToken, FileOptions, GlobalOptions, InputFile, Settings,
//!     generate_accessor_class, group_files,
//! };
//!
//! let files = vec![InputFile::new(
//!     "proj/Strings.resx",
//!     1,
//!     Some(r#"<root><data name="Hello"><value>Hello!</value></data></root>"#.into()),
//! )];
//!
//! let settings = Settings::from_iter([
//!     ("project_full_path", "proj/My.csproj"),
//!     ("project_name", "My"),
//!     ("root_namespace", "My"),
//! ]);
//! let global = GlobalOptions::resolve(&settings);
//!
//! let token = CancellationToken::new();
//! for group in group_files(&files) {
//!     let options = FileOptions::resolve(group, &Settings::new(), &global);
//!     let unit = generate_accessor_class(&options, &token)?;
//!     assert!(unit.source.contains("public static string? Hello"));
//! }
//! # Ok::<(), resxgen::Error>(())
//! ```
//!
//! # Design
//!
//! Every operation is a pure, synchronous function of its inputs: the host
//! owns file IO, caching and parallelism, and decides when to re-invoke.
//! The only process-wide state is the read-only culture table in
//! [`cultures`], built once on first use.

pub mod cultures;
pub mod error;
pub mod generator;
pub mod grouping;
pub mod lookup;
pub mod options;
pub mod paths;
pub mod resx;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    error::Error,
    generator::{generate_accessor_class, generate_culture_helper},
    grouping::{detect_culture_combinations, group_files},
    options::{FileOptions, GlobalOptions, InnerClassVisibility, Settings},
    types::{
        CancellationToken, CultureCombination, Diagnostic, GeneratedUnit, GroupedFile, InputFile,
        ResourceEntry, Severity, SourceLocation,
    },
};
