//! Go: one exported struct per declaration, fields tagged with their JSON key.

use std::fmt;

use tracing::warn;

use super::{Member, Target, members};
use crate::builder::Declaration;
use crate::naming::capitalize;
use crate::resolve::{ScalarType, TypeName};

/// Punctuation `encoding/json` accepts in a tag name besides letters and
/// digits.
const TAG_NAME_PUNCTUATION: &str = "!#$%&()*+-./:;<=>?@[]^_{|}~ ";

/// Go struct generator.
#[derive(Debug)]
pub struct GoTarget;

pub static GO: GoTarget = GoTarget;

impl Target for GoTarget {
    fn name(&self) -> &'static str {
        "go"
    }

    fn extension(&self) -> &'static str {
        "go"
    }

    fn default_package(&self) -> &'static str {
        "main"
    }

    fn type_name(&self, ty: &TypeName) -> String {
        match ty {
            TypeName::Scalar(ScalarType::Boolean) => "bool".to_string(),
            TypeName::Scalar(ScalarType::Integer) => "int64".to_string(),
            TypeName::Scalar(ScalarType::Float) => "float64".to_string(),
            TypeName::Scalar(ScalarType::String) => "string".to_string(),
            TypeName::Dynamic => "any".to_string(),
            TypeName::List(element) => format!("[]{}", self.type_name(element)),
            TypeName::Declared(name) => name.clone(),
        }
    }

    fn field_ident(&self, key: &str) -> String {
        capitalize(key)
    }

    fn write_preamble(
        &self,
        out: &mut dyn fmt::Write,
        package: &str,
        _root: &Declaration<'_>,
    ) -> fmt::Result {
        writeln!(out, "package {package}")?;
        writeln!(out)
    }

    fn write_declaration(
        &self,
        out: &mut dyn fmt::Write,
        declaration: &Declaration<'_>,
    ) -> fmt::Result {
        writeln!(out, "type {} struct {{", declaration.name)?;
        let members: Vec<Member<'_>> = members(self, declaration);
        // gofmt aligns the name and type columns across the whole block.
        let ident_width: usize = members
            .iter()
            .map(|m| m.ident.chars().count())
            .max()
            .unwrap_or(0);
        let type_width: usize = members
            .iter()
            .map(|m| m.type_name.chars().count())
            .max()
            .unwrap_or(0);
        for member in &members {
            if !is_valid_tag_name(member.json_key) {
                warn!(
                    declaration = %declaration.name,
                    key = %member.json_key,
                    "key is not a valid json tag name; field will be skipped"
                );
            }
            writeln!(
                out,
                "\t{:<ident_width$} {:<type_width$} {}",
                member.ident,
                member.type_name,
                struct_tag(member.json_key)
            )?;
        }
        writeln!(out, "}}")
    }
}

/// The `json:"key"` tag for `key`.
///
/// `encoding/json` cuts a tag name at the first `,` and ignores a name holding
/// any other character it does not accept, matching the field by its Go name
/// instead. Keys like that are tagged `json:"-"`, which leaves the field out of
/// encoding and decoding. The key `-` itself is spelled `json:"-,"`.
fn struct_tag(key: &str) -> String {
    match key {
        "-" => "`json:\"-,\"`".to_string(),
        key if is_valid_tag_name(key) => format!("`json:\"{key}\"`"),
        _ => "`json:\"-\"`".to_string(),
    }
}

/// True if `encoding/json` reads `key` back as the tag name unchanged.
fn is_valid_tag_name(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || TAG_NAME_PUNCTUATION.contains(c))
}
