//! Java: one public class per file, package-private helper classes after it,
//! private fields with `get`/`set` accessors.

use std::fmt;

use super::{Member, Target, members};
use crate::builder::Declaration;
use crate::naming::{capitalize, lower_camel};
use crate::resolve::{ScalarType, TypeName};

const INDENT: &str = "    ";

const JSON_PROPERTY_IMPORT: &str = "com.fasterxml.jackson.annotation.JsonProperty";
const LIST_IMPORT: &str = "java.util.List";

/// Reserved words that cannot be used as field names.
const KEYWORDS: &[&str] = &[
    "abstract",
    "assert",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "return",
    "short",
    "static",
    "strictfp",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "void",
    "volatile",
    "while",
];

/// Type names the generated file already refers to.
const RESERVED_TYPE_NAMES: &[&str] = &[
    "Boolean",
    "Double",
    "JsonProperty",
    "List",
    "Long",
    "Object",
    "String",
];

/// Java class generator.
#[derive(Debug)]
pub struct JavaTarget;

pub static JAVA: JavaTarget = JavaTarget;

impl JavaTarget {
    /// Reference type used for list elements, since generics cannot take
    /// primitives.
    fn boxed_type_name(&self, ty: &TypeName) -> String {
        match ty {
            TypeName::Scalar(ScalarType::Boolean) => "Boolean".to_string(),
            TypeName::Scalar(ScalarType::Integer) => "Long".to_string(),
            TypeName::Scalar(ScalarType::Float) => "Double".to_string(),
            other => self.type_name(other),
        }
    }
}

impl Target for JavaTarget {
    fn name(&self) -> &'static str {
        "java"
    }

    fn extension(&self) -> &'static str {
        "java"
    }

    fn default_package(&self) -> &'static str {
        "com.example"
    }

    fn reserved_type_names(&self) -> &'static [&'static str] {
        RESERVED_TYPE_NAMES
    }

    fn type_name(&self, ty: &TypeName) -> String {
        match ty {
            TypeName::Scalar(ScalarType::Boolean) => "boolean".to_string(),
            TypeName::Scalar(ScalarType::Integer) => "long".to_string(),
            TypeName::Scalar(ScalarType::Float) => "double".to_string(),
            TypeName::Scalar(ScalarType::String) => "String".to_string(),
            TypeName::Dynamic => "Object".to_string(),
            TypeName::List(element) => format!("List<{}>", self.boxed_type_name(element)),
            TypeName::Declared(name) => name.clone(),
        }
    }

    fn field_ident(&self, key: &str) -> String {
        let ident: String = lower_camel(key);
        if KEYWORDS.contains(&ident.as_str()) {
            format!("{ident}_")
        } else {
            ident
        }
    }

    fn write_preamble(
        &self,
        out: &mut dyn fmt::Write,
        package: &str,
        root: &Declaration<'_>,
    ) -> fmt::Result {
        writeln!(out, "package {package};")?;
        writeln!(out)?;

        let declarations: Vec<&Declaration<'_>> = root.flatten();
        let needs_json_property: bool = declarations
            .iter()
            .any(|d| members(self, d).iter().any(Member::is_renamed));
        let needs_list: bool = declarations
            .iter()
            .any(|d| d.fields.iter().any(|f| f.resolved_type.is_list()));

        if needs_json_property {
            writeln!(out, "import {JSON_PROPERTY_IMPORT};")?;
        }
        if needs_list {
            writeln!(out, "import {LIST_IMPORT};")?;
        }
        if needs_json_property || needs_list {
            writeln!(out)?;
        }
        Ok(())
    }

    fn write_declaration(
        &self,
        out: &mut dyn fmt::Write,
        declaration: &Declaration<'_>,
    ) -> fmt::Result {
        // Only one top-level class per file may be public.
        let visibility: &str = if declaration.is_nested_helper {
            ""
        } else {
            "public "
        };
        writeln!(out, "{visibility}class {} {{", declaration.name)?;
        let members: Vec<Member<'_>> = members(self, declaration);
        for member in &members {
            write_field(out, member)?;
        }
        for member in &members {
            write_accessors(out, member)?;
        }
        writeln!(out, "}}")
    }
}

fn write_field(out: &mut dyn fmt::Write, member: &Member<'_>) -> fmt::Result {
    let Member {
        ident,
        json_key,
        type_name,
    } = member;
    writeln!(out)?;
    if member.is_renamed() {
        let key: String = escape_string(json_key);
        writeln!(out, "{INDENT}@JsonProperty(\"{key}\")")?;
    }
    writeln!(out, "{INDENT}private {type_name} {ident};")
}

fn write_accessors(out: &mut dyn fmt::Write, member: &Member<'_>) -> fmt::Result {
    let Member {
        ident, type_name, ..
    } = member;
    let mut suffix: String = capitalize(ident);
    // Object.getClass() is final.
    if suffix == "Class" {
        suffix.push('_');
    }
    writeln!(out)?;
    writeln!(out, "{INDENT}public {type_name} get{suffix}() {{")?;
    writeln!(out, "{INDENT}{INDENT}return this.{ident};")?;
    writeln!(out, "{INDENT}}}")?;
    writeln!(out)?;
    writeln!(
        out,
        "{INDENT}public void set{suffix}({type_name} {ident}) {{"
    )?;
    writeln!(out, "{INDENT}{INDENT}this.{ident} = {ident};")?;
    writeln!(out, "{INDENT}}}")
}

/// Escape `s` for use inside a Java string literal.
fn escape_string(s: &str) -> String {
    let mut escaped: String = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            other => escaped.push(other),
        }
    }
    escaped
}
