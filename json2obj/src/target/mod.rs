//! Output languages.
//!
//! Each language is a static [`Target`] that spells out types, sanitizes
//! member identifiers and renders declarations. The shared pieces (member
//! planning, output ordering) live here so a new language only supplies its
//! own syntax.

mod go;
mod java;

pub use go::{GO, GoTarget};
pub use java::{JAVA, JavaTarget};

use std::fmt;
use std::str::FromStr;

use crate::builder::Declaration;
use crate::error::Json2ObjError;
use crate::naming::NameRegistry;
use crate::resolve::TypeName;

/// A code generation target language.
pub trait Target: Send + Sync {
    /// Selector accepted on the command line (e.g. "java", "go").
    fn name(&self) -> &'static str;

    /// File extension for generated code.
    fn extension(&self) -> &'static str;

    /// Package clause used when none is configured.
    fn default_package(&self) -> &'static str;

    /// Type names a generated declaration must not take, because the output
    /// already refers to a type of that name.
    fn reserved_type_names(&self) -> &'static [&'static str] {
        &[]
    }

    /// Spelling of `ty` in this language.
    fn type_name(&self, ty: &TypeName) -> String;

    /// Legal member identifier for a JSON key.
    fn field_ident(&self, key: &str) -> String;

    /// File header: package clause and imports needed by `root` and
    /// everything nested in it.
    ///
    /// # Errors
    ///
    /// Propagates errors from `out`.
    fn write_preamble(
        &self,
        out: &mut dyn fmt::Write,
        package: &str,
        root: &Declaration<'_>,
    ) -> fmt::Result;

    /// One declaration, from header to closing syntax, without its nested
    /// declarations.
    ///
    /// # Errors
    ///
    /// Propagates errors from `out`.
    fn write_declaration(
        &self,
        out: &mut dyn fmt::Write,
        declaration: &Declaration<'_>,
    ) -> fmt::Result;
}

/// Supported output languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetLanguage {
    Java,
    #[default]
    Go,
}

impl TargetLanguage {
    pub const ALL: [Self; 2] = [Self::Java, Self::Go];

    /// The static target that renders this language.
    #[must_use]
    pub fn target(self) -> &'static dyn Target {
        match self {
            Self::Java => &JAVA,
            Self::Go => &GO,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        self.target().name()
    }
}

impl fmt::Display for TargetLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TargetLanguage {
    type Err = Json2ObjError;

    /// Case-insensitive; accepts the language name or its file extension.
    fn from_str(selector: &str) -> Result<Self, Self::Err> {
        let wanted: String = selector.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| {
                let target: &dyn Target = language.target();
                wanted == target.name() || wanted == target.extension()
            })
            .or_else(|| (wanted == "golang").then_some(Self::Go))
            .ok_or_else(|| Json2ObjError::UnknownTargetLanguage(selector.to_string()))
    }
}

/// A field as it is rendered: sanitized identifier plus spelled-out type.
#[derive(Debug)]
pub struct Member<'d> {
    pub ident: String,
    pub json_key: &'d str,
    pub type_name: String,
}

impl Member<'_> {
    /// True if the identifier no longer matches the JSON key, so serializers
    /// need the key spelled out.
    #[must_use]
    pub fn is_renamed(&self) -> bool {
        self.ident != self.json_key
    }
}

/// Members of `declaration` with identifiers that are unique within it.
#[must_use]
pub fn members<'d>(target: &dyn Target, declaration: &'d Declaration<'_>) -> Vec<Member<'d>> {
    let mut idents = NameRegistry::default();
    declaration
        .fields
        .iter()
        .map(|field| Member {
            ident: idents.claim(&target.field_ident(&field.name)),
            json_key: &field.name,
            type_name: target.type_name(&field.resolved_type),
        })
        .collect()
}

/// Render `declaration` and every nested declaration after it, separated by
/// blank lines.
#[must_use]
pub fn render_declarations(target: &dyn Target, declaration: &Declaration<'_>) -> String {
    let write = |out: &mut dyn fmt::Write| write_declarations(target, out, declaration);
    Rendered(write).to_string()
}

/// Render a complete output unit: preamble, then every declaration.
#[must_use]
pub fn render_unit(target: &dyn Target, root: &Declaration<'_>, package: &str) -> String {
    Rendered(|out: &mut dyn fmt::Write| {
        target.write_preamble(out, package, root)?;
        write_declarations(target, out, root)
    })
    .to_string()
}

fn write_declarations(
    target: &dyn Target,
    out: &mut dyn fmt::Write,
    root: &Declaration<'_>,
) -> fmt::Result {
    for (index, declaration) in root.flatten().into_iter().enumerate() {
        if index > 0 {
            writeln!(out)?;
        }
        target.write_declaration(out, declaration)?;
    }
    Ok(())
}

struct Rendered<F>(F)
where
    F: Fn(&mut dyn fmt::Write) -> fmt::Result;

impl<F> fmt::Display for Rendered<F>
where
    F: Fn(&mut dyn fmt::Write) -> fmt::Result,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.0)(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(selector: &str) -> TargetLanguage {
        selector
            .parse()
            .unwrap_or_else(|e| panic!("{selector:?} should parse: {e}"))
    }

    #[test]
    fn parses_language_names() {
        assert_eq!(TargetLanguage::Java, parse("java"));
        assert_eq!(TargetLanguage::Go, parse("go"));
    }

    #[test]
    fn parses_case_insensitively_and_aliases() {
        assert_eq!(TargetLanguage::Java, parse(" JAVA "));
        assert_eq!(TargetLanguage::Go, parse("Golang"));
    }

    #[test]
    fn unknown_language_is_rejected() {
        let result: Result<TargetLanguage, Json2ObjError> = "cobol".parse();
        assert!(matches!(
            result,
            Err(Json2ObjError::UnknownTargetLanguage(ref s)) if s == "cobol"
        ));
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for language in TargetLanguage::ALL {
            assert_eq!(language, parse(&language.to_string()));
        }
    }

    #[test]
    fn member_identifiers_are_unique_within_declaration() {
        let first = serde_json::json!("a");
        let second = serde_json::json!("b");
        let declaration = Declaration {
            name: "Root".to_string(),
            is_nested_helper: false,
            fields: vec![
                crate::builder::FieldDeclaration {
                    name: "first-name".to_string(),
                    resolved_type: TypeName::Scalar(crate::resolve::ScalarType::String),
                    source_value: &first,
                },
                crate::builder::FieldDeclaration {
                    name: "first_name".to_string(),
                    resolved_type: TypeName::Scalar(crate::resolve::ScalarType::String),
                    source_value: &second,
                },
            ],
            nested: Vec::new(),
        };
        let idents: Vec<String> = members(&GO, &declaration)
            .into_iter()
            .map(|m| m.ident)
            .collect();
        assert_eq!(vec!["FirstName", "FirstName2"], idents);
    }
}
