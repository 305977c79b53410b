//! Declaration construction: one declaration per JSON object, with nested
//! declarations for object-valued fields and arrays of objects.

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::error::Json2ObjError;
use crate::naming::NameRegistry;
use crate::resolve::{TypeName, TypeResolver};
use crate::target::{self, TargetLanguage};

/// One member of a declaration.
#[derive(Debug, Clone)]
pub struct FieldDeclaration<'a> {
    /// JSON key the member was inferred from.
    pub name: String,
    pub resolved_type: TypeName,
    pub source_value: &'a Value,
}

/// A generated class or struct and the declarations it owns.
#[derive(Debug, Clone)]
pub struct Declaration<'a> {
    pub name: String,
    /// False only for the root declaration of an output unit.
    pub is_nested_helper: bool,
    /// Fields in document order.
    pub fields: Vec<FieldDeclaration<'a>>,
    /// Nested declarations in the order their fields were processed.
    pub nested: Vec<Declaration<'a>>,
}

impl<'a> Declaration<'a> {
    /// This declaration followed by all nested declarations, depth-first in
    /// field order. This is the order declarations appear in the output.
    #[must_use]
    pub fn flatten(&self) -> Vec<&Declaration<'a>> {
        let mut out: Vec<&Declaration<'a>> = vec![self];
        for nested in &self.nested {
            out.extend(nested.flatten());
        }
        out
    }
}

/// Builds [`Declaration`] trees for one output unit.
///
/// Declaration names are unique within a builder: a name requested twice is
/// suffixed with `2`, `3`, ... on later requests.
#[derive(Debug)]
pub struct ClassBuilder {
    target_language: TargetLanguage,
    names: NameRegistry,
}

impl ClassBuilder {
    #[must_use]
    pub fn new(target_language: TargetLanguage) -> Self {
        let mut names = NameRegistry::default();
        for reserved in target_language.target().reserved_type_names() {
            names.reserve(reserved);
        }
        Self {
            target_language,
            names,
        }
    }

    #[must_use]
    pub fn target_language(&self) -> TargetLanguage {
        self.target_language
    }

    /// Build the declaration named `name` from `mapping`, resolving every field
    /// and building nested declarations along the way.
    ///
    /// # Errors
    ///
    /// Returns [`Json2ObjError::UnsupportedType`] if any field at any depth has
    /// no type mapping; no declaration is produced in that case.
    pub fn build_declaration<'a>(
        &mut self,
        name: &str,
        mapping: &'a Map<String, Value>,
        is_nested_helper: bool,
    ) -> Result<Declaration<'a>, Json2ObjError> {
        let claimed: String = self.names.claim(name);
        if claimed != name {
            warn!(requested = %name, assigned = %claimed, "declaration name already taken");
        }

        let mut fields: Vec<FieldDeclaration<'a>> = Vec::with_capacity(mapping.len());
        let mut nested: Vec<Declaration<'a>> = Vec::new();
        for (key, value) in mapping {
            let (resolved_type, declaration) =
                TypeResolver::new(self, &claimed).resolve(key, value)?;
            fields.push(FieldDeclaration {
                name: key.clone(),
                resolved_type,
                source_value: value,
            });
            nested.extend(declaration);
        }

        debug!(
            declaration = %claimed,
            fields = fields.len(),
            nested = nested.len(),
            "built declaration"
        );
        Ok(Declaration {
            name: claimed,
            is_nested_helper,
            fields,
            nested,
        })
    }

    /// Build the declaration named `name` and render it in the target
    /// language, followed by every nested declaration.
    ///
    /// # Errors
    ///
    /// Same as [`Self::build_declaration`]; no text is returned on failure.
    pub fn build(
        &mut self,
        name: &str,
        mapping: &Map<String, Value>,
        is_nested_helper: bool,
    ) -> Result<String, Json2ObjError> {
        let built: Declaration<'_> = self.build_declaration(name, mapping, is_nested_helper)?;
        Ok(target::render_declarations(self.target_language.target(), &built))
    }
}
