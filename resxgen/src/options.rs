//! Layered configuration resolution: project-wide defaults overridden per
//! file group.
//!
//! The host hands over flat string-keyed settings at two scopes. Keys and
//! the fields they populate:
//!
//! | Key | Scope | Field | Default |
//! |---|---|---|---|
//! | `project_full_path` | global | `GlobalOptions::project_full_path` | required |
//! | `project_name` | global | `GlobalOptions::project_name` | required |
//! | `root_namespace` | global | `GlobalOptions::root_namespace` | required |
//! | `public_class` | both | public vs internal class | `false` |
//! | `static_class` | both | static class modifier | `true` |
//! | `static_members` | both | static member modifier | `true` |
//! | `partial_class` | both | partial class modifier | `false` |
//! | `null_forgiving_operators` | global | drop `?`, add `!` | `false` |
//! | `inner_class_visibility` | both | nested class visibility | not generated |
//! | `inner_class_name` | both | nested class name | empty |
//! | `inner_class_instance_name` | both | outer instance property | empty |
//! | `class_name_postfix` | both | appended to the class name | empty |
//! | `use_inline_lookup` | both | inline switch vs ResourceManager | `false` |
//! | `custom_tool_namespace` | file | emitted namespace override | unset |
//! | `target_path` | file | explicit target folder for the namespace | unset |
//! | `link` | file | target folder for the embedded resource id | unset |
//!
//! Absent or empty per-file values inherit the global value, never a
//! hardcoded default.

use std::{collections::HashMap, str::FromStr};

use serde::Serialize;

use crate::{paths, types::GroupedFile};

/// A flat, string-keyed settings lookup. Missing keys are `None`, never an
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings(HashMap<String, String>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// The value under `key`, filtered to non-empty strings.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.is_empty())
    }

    /// Reads a boolean switch; non-empty values other than (case
    /// insensitive) `true` count as `false`.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get_non_empty(key).map(|v| v.eq_ignore_ascii_case("true"))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Settings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Settings(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Recognized setting keys.
pub mod keys {
    pub const PROJECT_FULL_PATH: &str = "project_full_path";
    pub const PROJECT_NAME: &str = "project_name";
    pub const ROOT_NAMESPACE: &str = "root_namespace";
    pub const PUBLIC_CLASS: &str = "public_class";
    pub const STATIC_CLASS: &str = "static_class";
    pub const STATIC_MEMBERS: &str = "static_members";
    pub const PARTIAL_CLASS: &str = "partial_class";
    pub const NULL_FORGIVING_OPERATORS: &str = "null_forgiving_operators";
    pub const INNER_CLASS_VISIBILITY: &str = "inner_class_visibility";
    pub const INNER_CLASS_NAME: &str = "inner_class_name";
    pub const INNER_CLASS_INSTANCE_NAME: &str = "inner_class_instance_name";
    pub const CLASS_NAME_POSTFIX: &str = "class_name_postfix";
    pub const USE_INLINE_LOOKUP: &str = "use_inline_lookup";
    pub const CUSTOM_TOOL_NAMESPACE: &str = "custom_tool_namespace";
    pub const TARGET_PATH: &str = "target_path";
    pub const LINK: &str = "link";
}

/// Visibility of the optional nested resource class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InnerClassVisibility {
    #[default]
    NotGenerated,
    Public,
    Internal,
    Protected,
    Private,
    ProtectedInternal,
    SameAsOuter,
}

impl FromStr for InnerClassVisibility {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "notgenerated" => Ok(Self::NotGenerated),
            "public" => Ok(Self::Public),
            "internal" => Ok(Self::Internal),
            "protected" => Ok(Self::Protected),
            "private" => Ok(Self::Private),
            "protectedinternal" => Ok(Self::ProtectedInternal),
            "sameasouter" => Ok(Self::SameAsOuter),
            _ => Err(()),
        }
    }
}

impl InnerClassVisibility {
    /// The C# modifier keyword(s), except for the two non-literal variants.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Internal => "internal",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::ProtectedInternal => "protected internal",
            Self::NotGenerated | Self::SameAsOuter => "",
        }
    }
}

/// Project-wide option defaults, resolved once per generation pass.
///
/// A missing required key leaves `valid = false`; the caller skips all
/// groups in that case (generator inactive, not a failure).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlobalOptions {
    pub project_full_path: String,
    pub project_name: String,
    pub root_namespace: String,
    pub public_class: bool,
    pub static_class: bool,
    pub static_members: bool,
    pub partial_class: bool,
    pub null_forgiving_operators: bool,
    pub inner_class_visibility: InnerClassVisibility,
    pub inner_class_name: String,
    pub inner_class_instance_name: String,
    pub class_name_postfix: String,
    pub use_inline_lookup: bool,
    pub valid: bool,
}

impl GlobalOptions {
    pub fn resolve(settings: &Settings) -> Self {
        let mut options = GlobalOptions {
            static_class: true,
            static_members: true,
            ..Default::default()
        };
        let Some(project_full_path) = settings.get(keys::PROJECT_FULL_PATH) else {
            return options;
        };
        options.project_full_path = project_full_path.to_string();
        let Some(project_name) = settings.get(keys::PROJECT_NAME) else {
            return options;
        };
        options.project_name = project_name.to_string();
        let Some(root_namespace) = settings.get(keys::ROOT_NAMESPACE) else {
            return options;
        };
        options.root_namespace = root_namespace.to_string();

        options.public_class = settings.get_bool(keys::PUBLIC_CLASS).unwrap_or(false);
        options.static_class = settings.get_bool(keys::STATIC_CLASS).unwrap_or(true);
        options.static_members = settings.get_bool(keys::STATIC_MEMBERS).unwrap_or(true);
        options.partial_class = settings.get_bool(keys::PARTIAL_CLASS).unwrap_or(false);
        options.null_forgiving_operators = settings
            .get_bool(keys::NULL_FORGIVING_OPERATORS)
            .unwrap_or(false);
        options.use_inline_lookup = settings.get_bool(keys::USE_INLINE_LOOKUP).unwrap_or(false);

        options.inner_class_visibility = settings
            .get_non_empty(keys::INNER_CLASS_VISIBILITY)
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();
        options.inner_class_name = settings
            .get_non_empty(keys::INNER_CLASS_NAME)
            .unwrap_or("")
            .to_string();
        options.inner_class_instance_name = settings
            .get_non_empty(keys::INNER_CLASS_INSTANCE_NAME)
            .unwrap_or("")
            .to_string();
        options.class_name_postfix = settings
            .get_non_empty(keys::CLASS_NAME_POSTFIX)
            .unwrap_or("")
            .to_string();

        options.valid = true;
        options
    }
}

/// The effective option set for one file group, immutable once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOptions {
    pub grouped_file: GroupedFile,
    pub class_name: String,
    pub local_namespace: String,
    pub custom_tool_namespace: Option<String>,
    /// Lookup-table name for the ResourceManager store, independent of the
    /// emitted namespace.
    pub embedded_filename: String,
    pub public_class: bool,
    pub static_class: bool,
    pub static_members: bool,
    pub partial_class: bool,
    pub null_forgiving_operators: bool,
    pub inner_class_visibility: InnerClassVisibility,
    pub inner_class_name: String,
    pub inner_class_instance_name: String,
    pub use_inline_lookup: bool,
    pub valid: bool,
}

impl FileOptions {
    pub fn resolve(
        grouped_file: GroupedFile,
        settings: &Settings,
        global: &GlobalOptions,
    ) -> Self {
        let resx_path = grouped_file.main_file.path.clone();
        let class_name_from_file = paths::class_name_from_path(&resx_path);

        let detected_namespace = paths::local_namespace(
            &resx_path,
            settings.get_non_empty(keys::LINK),
            &global.project_full_path,
            &global.root_namespace,
        );

        let embedded_filename = if detected_namespace.is_empty() {
            class_name_from_file.clone()
        } else {
            format!("{}.{}", detected_namespace, class_name_from_file)
        };

        let local_namespace = match settings.get_non_empty(keys::TARGET_PATH) {
            Some(target_path) => paths::local_namespace(
                &resx_path,
                Some(target_path),
                &global.project_full_path,
                &global.root_namespace,
            ),
            None if detected_namespace.is_empty() => {
                paths::sanitize_namespace(&global.project_name, true)
            }
            None => detected_namespace.clone(),
        };

        let postfix = settings
            .get_non_empty(keys::CLASS_NAME_POSTFIX)
            .unwrap_or(&global.class_name_postfix);
        let class_name = format!("{class_name_from_file}{postfix}");

        let inner_class_visibility = match settings
            .get_non_empty(keys::INNER_CLASS_VISIBILITY)
            .and_then(|v| v.parse::<InnerClassVisibility>().ok())
        {
            Some(v) if v != InnerClassVisibility::SameAsOuter => v,
            _ => global.inner_class_visibility,
        };

        FileOptions {
            class_name,
            local_namespace,
            custom_tool_namespace: settings
                .get_non_empty(keys::CUSTOM_TOOL_NAMESPACE)
                .map(str::to_string),
            embedded_filename,
            public_class: settings
                .get_bool(keys::PUBLIC_CLASS)
                .unwrap_or(global.public_class),
            static_class: settings
                .get_bool(keys::STATIC_CLASS)
                .unwrap_or(global.static_class),
            static_members: settings
                .get_bool(keys::STATIC_MEMBERS)
                .unwrap_or(global.static_members),
            partial_class: settings
                .get_bool(keys::PARTIAL_CLASS)
                .unwrap_or(global.partial_class),
            null_forgiving_operators: global.null_forgiving_operators,
            inner_class_visibility,
            inner_class_name: settings
                .get_non_empty(keys::INNER_CLASS_NAME)
                .unwrap_or(&global.inner_class_name)
                .to_string(),
            inner_class_instance_name: settings
                .get_non_empty(keys::INNER_CLASS_INSTANCE_NAME)
                .unwrap_or(&global.inner_class_instance_name)
                .to_string(),
            use_inline_lookup: settings
                .get_bool(keys::USE_INLINE_LOOKUP)
                .unwrap_or(global.use_inline_lookup),
            valid: global.valid,
            grouped_file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::InputFile;

    fn global_settings() -> Settings {
        Settings::from_iter([
            (keys::PROJECT_FULL_PATH, "proj/My.csproj"),
            (keys::PROJECT_NAME, "My"),
            (keys::ROOT_NAMESPACE, "My.Root"),
        ])
    }

    fn group(path: &str) -> GroupedFile {
        GroupedFile::new(InputFile::new(path, 1, None), Vec::new())
    }

    #[test]
    fn test_global_defaults() {
        let global = GlobalOptions::resolve(&global_settings());
        assert!(global.valid);
        assert!(!global.public_class);
        assert!(global.static_class);
        assert!(global.static_members);
        assert!(!global.partial_class);
        assert!(!global.null_forgiving_operators);
        assert_eq!(global.inner_class_visibility, InnerClassVisibility::NotGenerated);
        assert_eq!(global.inner_class_name, "");
        assert_eq!(global.class_name_postfix, "");
        assert!(!global.use_inline_lookup);
    }

    #[test]
    fn test_missing_required_key_is_invalid() {
        let settings = Settings::from_iter([
            (keys::PROJECT_FULL_PATH, "proj/My.csproj"),
            (keys::PROJECT_NAME, "My"),
        ]);
        let global = GlobalOptions::resolve(&settings);
        assert!(!global.valid);
    }

    #[test]
    fn test_file_options_inherit_globals() {
        let mut settings = global_settings();
        settings.insert(keys::PUBLIC_CLASS, "true");
        settings.insert(keys::CLASS_NAME_POSTFIX, "Names");
        let global = GlobalOptions::resolve(&settings);

        let options = FileOptions::resolve(group("proj/Strings.resx"), &Settings::new(), &global);
        assert!(options.valid);
        assert!(options.public_class);
        assert_eq!(options.class_name, "StringsNames");
        assert_eq!(options.local_namespace, "My.Root");
        assert_eq!(options.embedded_filename, "My.Root.Strings");
    }

    #[test]
    fn test_file_override_changes_only_that_field() {
        let global = GlobalOptions::resolve(&global_settings());
        let base = FileOptions::resolve(group("proj/Strings.resx"), &Settings::new(), &global);

        let mut overridden = Settings::new();
        overridden.insert(keys::STATIC_CLASS, "false");
        let options = FileOptions::resolve(group("proj/Strings.resx"), &overridden, &global);

        assert!(!options.static_class);
        assert_eq!(
            FileOptions {
                static_class: base.static_class,
                ..options
            },
            base
        );
    }

    #[test]
    fn test_empty_override_does_not_override() {
        let mut settings = global_settings();
        settings.insert(keys::CLASS_NAME_POSTFIX, "Names");
        let global = GlobalOptions::resolve(&settings);

        let mut file_settings = Settings::new();
        file_settings.insert(keys::CLASS_NAME_POSTFIX, "");
        let options = FileOptions::resolve(group("proj/Strings.resx"), &file_settings, &global);
        assert_eq!(options.class_name, "StringsNames");
    }

    #[test]
    fn test_target_path_overrides_namespace() {
        let global = GlobalOptions::resolve(&global_settings());
        let mut file_settings = Settings::new();
        file_settings.insert(keys::TARGET_PATH, "Linked/Res/Strings.resx");
        let options =
            FileOptions::resolve(group("proj/Sub/Strings.resx"), &file_settings, &global);
        assert_eq!(options.local_namespace, "My.Root.Linked.Res");
        // The embedded id still follows the physical folder.
        assert_eq!(options.embedded_filename, "My.Root.Sub.Strings");
    }

    #[test]
    fn test_same_as_outer_does_not_override_visibility() {
        let mut settings = global_settings();
        settings.insert(keys::INNER_CLASS_VISIBILITY, "private");
        let global = GlobalOptions::resolve(&settings);

        let mut file_settings = Settings::new();
        file_settings.insert(keys::INNER_CLASS_VISIBILITY, "sameasouter");
        let options =
            FileOptions::resolve(group("proj/Strings.resx"), &file_settings, &global);
        assert_eq!(options.inner_class_visibility, InnerClassVisibility::Private);
    }
}
