//! Settings for JSON to declaration code generation.

use std::path::Path;

use crate::naming::capitalize;
use crate::target::TargetLanguage;

/// Root declaration name used when no output name is configured.
pub const DEFAULT_ROOT_NAME: &str = "JsonObject";

/// Settings that control code generation behavior.
///
/// Passed explicitly into every generation entry point; there is no global
/// configuration.
#[derive(Debug, Clone, Default)]
pub struct GenerateSettings {
    /// Language the declarations are emitted in.
    ///
    /// **Default: Go.**
    pub target_language: TargetLanguage,

    /// Output destination name (usually a file path). When set, the root
    /// declaration is named after its capitalized file stem, so
    /// `out/user_profile.java` yields `UserProfile`.
    pub output_name: Option<String>,

    /// Package clause override. When unset, the target language's default is
    /// used (`com.example` for Java, `main` for Go).
    pub package: Option<String>,
}

impl GenerateSettings {
    /// Settings for `target_language` with every other option at its default.
    #[must_use]
    pub fn for_language(target_language: TargetLanguage) -> Self {
        Self {
            target_language,
            ..Self::default()
        }
    }

    /// Name of the root declaration derived from [`Self::output_name`].
    #[must_use]
    pub fn root_declaration_name(&self) -> String {
        self.output_name
            .as_deref()
            .and_then(|name| Path::new(name).file_stem())
            .map(|stem| capitalize(&stem.to_string_lossy()))
            .unwrap_or_else(|| DEFAULT_ROOT_NAME.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn root_name(output_name: Option<&str>) -> String {
        let settings: GenerateSettings = GenerateSettings {
            output_name: output_name.map(String::from),
            ..GenerateSettings::default()
        };
        settings.root_declaration_name()
    }

    #[test]
    fn root_name_defaults_without_output() {
        assert_eq!(DEFAULT_ROOT_NAME, root_name(None));
    }

    #[test]
    fn root_name_strips_directory_and_extension() {
        assert_eq!("User", root_name(Some("out/model/user.java")));
    }

    #[test]
    fn root_name_is_capitalized() {
        assert_eq!("OrderLine", root_name(Some("order_line.go")));
    }

    #[test]
    fn root_name_falls_back_when_stem_is_empty() {
        assert_eq!(DEFAULT_ROOT_NAME, root_name(Some("")));
    }

    #[test]
    fn default_language_is_go() {
        let settings: GenerateSettings = GenerateSettings::default();
        assert_eq!(TargetLanguage::Go, settings.target_language);
    }
}
