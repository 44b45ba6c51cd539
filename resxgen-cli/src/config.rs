//! TOML configuration for the CLI: a `[project]` section for global
//! settings and `[[file]]` sections with a glob pattern for per-file
//! overrides.
//!
//! ```toml
//! [project]
//! name = "MyApp"
//! root_namespace = "MyApp"
//! use_inline_lookup = true
//!
//! [[file]]
//! pattern = "Legacy/**/*.resx"
//! public_class = true
//! class_name_postfix = "Names"
//! ```

use std::{fs, path::Path};

use globset::{GlobBuilder, GlobMatcher};
use serde::Deserialize;

use resxgen::{Settings, options::keys};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectSection,
    #[serde(default, rename = "file")]
    pub files: Vec<FileSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectSection {
    pub name: Option<String>,
    pub root_namespace: Option<String>,
    pub public_class: Option<bool>,
    pub static_class: Option<bool>,
    pub static_members: Option<bool>,
    pub partial_class: Option<bool>,
    pub null_forgiving_operators: Option<bool>,
    pub inner_class_visibility: Option<String>,
    pub inner_class_name: Option<String>,
    pub inner_class_instance_name: Option<String>,
    pub class_name_postfix: Option<String>,
    pub use_inline_lookup: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSection {
    /// Glob matched against paths relative to the input directory.
    pub pattern: String,
    pub public_class: Option<bool>,
    pub static_class: Option<bool>,
    pub static_members: Option<bool>,
    pub partial_class: Option<bool>,
    pub inner_class_visibility: Option<String>,
    pub inner_class_name: Option<String>,
    pub inner_class_instance_name: Option<String>,
    pub class_name_postfix: Option<String>,
    pub use_inline_lookup: Option<bool>,
    pub custom_tool_namespace: Option<String>,
    pub target_path: Option<String>,
    pub link: Option<String>,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// The global settings map for the core resolver. The project file
    /// path is synthesized inside the input directory so namespace
    /// derivation sees the scanned tree as the project tree; name and
    /// root namespace default to the input directory's name.
    pub fn global_settings(&self, input_dir: &Path) -> Settings {
        let fallback_name = input_dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Resources")
            .to_string();
        let name = self.project.name.clone().unwrap_or(fallback_name);
        let root_namespace = self
            .project
            .root_namespace
            .clone()
            .unwrap_or_else(|| name.clone());
        let project_full_path = input_dir.join(format!("{name}.csproj"));

        let mut settings = Settings::new();
        settings.insert(
            keys::PROJECT_FULL_PATH,
            project_full_path.to_string_lossy().into_owned(),
        );
        settings.insert(keys::PROJECT_NAME, name);
        settings.insert(keys::ROOT_NAMESPACE, root_namespace);

        insert_bool(&mut settings, keys::PUBLIC_CLASS, self.project.public_class);
        insert_bool(&mut settings, keys::STATIC_CLASS, self.project.static_class);
        insert_bool(&mut settings, keys::STATIC_MEMBERS, self.project.static_members);
        insert_bool(&mut settings, keys::PARTIAL_CLASS, self.project.partial_class);
        insert_bool(
            &mut settings,
            keys::NULL_FORGIVING_OPERATORS,
            self.project.null_forgiving_operators,
        );
        insert_bool(&mut settings, keys::USE_INLINE_LOOKUP, self.project.use_inline_lookup);
        insert_str(
            &mut settings,
            keys::INNER_CLASS_VISIBILITY,
            self.project.inner_class_visibility.as_deref(),
        );
        insert_str(
            &mut settings,
            keys::INNER_CLASS_NAME,
            self.project.inner_class_name.as_deref(),
        );
        insert_str(
            &mut settings,
            keys::INNER_CLASS_INSTANCE_NAME,
            self.project.inner_class_instance_name.as_deref(),
        );
        insert_str(
            &mut settings,
            keys::CLASS_NAME_POSTFIX,
            self.project.class_name_postfix.as_deref(),
        );
        settings
    }

    /// Compiles the `[[file]]` patterns; order matters, first match wins.
    pub fn file_matchers(&self) -> Result<Vec<(GlobMatcher, &FileSection)>, Box<dyn std::error::Error>> {
        self.files
            .iter()
            .map(|section| {
                let matcher = GlobBuilder::new(&section.pattern)
                    .literal_separator(false)
                    .build()?
                    .compile_matcher();
                Ok((matcher, section))
            })
            .collect()
    }
}

/// The per-file settings map for one main file, from the first matching
/// `[[file]]` section.
pub fn file_settings(
    matchers: &[(GlobMatcher, &FileSection)],
    relative_path: &Path,
) -> Settings {
    let mut settings = Settings::new();
    let Some((_, section)) = matchers
        .iter()
        .find(|(matcher, _)| matcher.is_match(relative_path))
    else {
        return settings;
    };

    insert_bool(&mut settings, keys::PUBLIC_CLASS, section.public_class);
    insert_bool(&mut settings, keys::STATIC_CLASS, section.static_class);
    insert_bool(&mut settings, keys::STATIC_MEMBERS, section.static_members);
    insert_bool(&mut settings, keys::PARTIAL_CLASS, section.partial_class);
    insert_bool(&mut settings, keys::USE_INLINE_LOOKUP, section.use_inline_lookup);
    insert_str(
        &mut settings,
        keys::INNER_CLASS_VISIBILITY,
        section.inner_class_visibility.as_deref(),
    );
    insert_str(&mut settings, keys::INNER_CLASS_NAME, section.inner_class_name.as_deref());
    insert_str(
        &mut settings,
        keys::INNER_CLASS_INSTANCE_NAME,
        section.inner_class_instance_name.as_deref(),
    );
    insert_str(
        &mut settings,
        keys::CLASS_NAME_POSTFIX,
        section.class_name_postfix.as_deref(),
    );
    insert_str(
        &mut settings,
        keys::CUSTOM_TOOL_NAMESPACE,
        section.custom_tool_namespace.as_deref(),
    );
    insert_str(&mut settings, keys::TARGET_PATH, section.target_path.as_deref());
    insert_str(&mut settings, keys::LINK, section.link.as_deref());
    settings
}

fn insert_bool(settings: &mut Settings, key: &str, value: Option<bool>) {
    if let Some(value) = value {
        settings.insert(key, if value { "true" } else { "false" });
    }
}

fn insert_str(settings: &mut Settings, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        settings.insert(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let config: Config = toml::from_str(
            r#"
            [project]
            name = "MyApp"
            use_inline_lookup = true

            [[file]]
            pattern = "Legacy/**"
            public_class = true
            "#,
        )
        .unwrap();
        assert_eq!(config.project.name.as_deref(), Some("MyApp"));
        assert_eq!(config.files.len(), 1);
        assert_eq!(config.files[0].pattern, "Legacy/**");
    }

    #[test]
    fn test_global_settings_defaults_from_input_dir() {
        let config = Config::default();
        let settings = config.global_settings(Path::new("work/MyApp"));
        assert_eq!(settings.get(keys::PROJECT_NAME), Some("MyApp"));
        assert_eq!(settings.get(keys::ROOT_NAMESPACE), Some("MyApp"));
        assert!(
            settings
                .get(keys::PROJECT_FULL_PATH)
                .unwrap()
                .ends_with("MyApp.csproj")
        );
    }

    #[test]
    fn test_first_matching_file_section_wins() {
        let config: Config = toml::from_str(
            r#"
            [[file]]
            pattern = "Legacy/**"
            class_name_postfix = "Old"

            [[file]]
            pattern = "**"
            class_name_postfix = "New"
            "#,
        )
        .unwrap();
        let matchers = config.file_matchers().unwrap();
        let settings = file_settings(&matchers, Path::new("Legacy/Strings.resx"));
        assert_eq!(settings.get(keys::CLASS_NAME_POSTFIX), Some("Old"));
        let settings = file_settings(&matchers, Path::new("Other/Strings.resx"));
        assert_eq!(settings.get(keys::CLASS_NAME_POSTFIX), Some("New"));
    }
}
