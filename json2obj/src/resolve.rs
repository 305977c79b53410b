//! Type inference for a single field value.

use serde_json::{Map, Number, Value};
use tracing::trace;

use crate::builder::{ClassBuilder, Declaration};
use crate::error::Json2ObjError;
use crate::naming::capitalize;

/// Appended to the name of a declaration derived from an array of objects, so
/// `"addr": [{...}]` and `"addr": {...}` never name the same type.
pub const ARRAY_ITEM_SUFFIX: &str = "Item";

/// Scalar kinds a JSON leaf value can be inferred as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScalarType {
    Boolean,
    Integer,
    Float,
    String,
}

/// Language-independent type of a field; each target spells it out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Scalar(ScalarType),
    /// Element of a collection whose element type could not be inferred.
    Dynamic,
    List(Box<TypeName>),
    /// Reference to a generated declaration.
    Declared(String),
}

impl TypeName {
    #[must_use]
    pub fn list(element: Self) -> Self {
        Self::List(Box::new(element))
    }

    /// True if this type is a collection.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Name of the generated declaration this type refers to, if any.
    #[must_use]
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            Self::Declared(name) => Some(name.as_str()),
            Self::List(element) => element.declared_name(),
            Self::Scalar(_) | Self::Dynamic => None,
        }
    }
}

/// Classify a number by its literal form: a fractional part or an exponent
/// means floating point, anything else means integer. So `3` is an integer and
/// `3.0`, `-0.0` and `1e5` are floats.
///
/// Magnitude plays no part: integers of any length stay integers, and floats
/// beyond the `f64` range stay floats.
#[must_use]
pub fn classify_number(number: &Number) -> ScalarType {
    if number.as_str().contains(['.', 'e', 'E']) {
        ScalarType::Float
    } else {
        ScalarType::Integer
    }
}

/// Resolves the fields of one declaration, delegating nested objects back to
/// the [`ClassBuilder`] that owns it.
pub struct TypeResolver<'b> {
    builder: &'b mut ClassBuilder,
    declaration: &'b str,
}

impl<'b> TypeResolver<'b> {
    /// Resolver for fields of the declaration named `declaration`.
    pub fn new(builder: &'b mut ClassBuilder, declaration: &'b str) -> Self {
        Self {
            builder,
            declaration,
        }
    }

    /// Determine the type of `field_name` from `value`, building the nested
    /// declaration for object values and arrays of objects.
    ///
    /// Arrays are typed by their first element only: later elements with a
    /// different shape are not reconciled.
    ///
    /// # Errors
    ///
    /// Returns [`Json2ObjError::UnsupportedType`] for `null`, or an array whose
    /// first element is `null`, anywhere in `value`.
    pub fn resolve<'a>(
        &mut self,
        field_name: &str,
        value: &'a Value,
    ) -> Result<(TypeName, Option<Declaration<'a>>), Json2ObjError> {
        let resolved: (TypeName, Option<Declaration<'a>>) = match value {
            Value::Null => return Err(self.unsupported(field_name, "null")),
            Value::Bool(_) => (TypeName::Scalar(ScalarType::Boolean), None),
            Value::Number(number) => (TypeName::Scalar(classify_number(number)), None),
            Value::String(_) => (TypeName::Scalar(ScalarType::String), None),
            Value::Array(elements) => self.resolve_array(field_name, elements)?,
            Value::Object(mapping) => {
                let nested: Declaration<'a> = self.nested(&capitalize(field_name), mapping)?;
                (TypeName::Declared(nested.name.clone()), Some(nested))
            }
        };
        trace!(
            declaration = %self.declaration,
            field = %field_name,
            resolved = ?resolved.0,
            "resolved field type"
        );
        Ok(resolved)
    }

    fn resolve_array<'a>(
        &mut self,
        field_name: &str,
        elements: &'a [Value],
    ) -> Result<(TypeName, Option<Declaration<'a>>), Json2ObjError> {
        let Some(first) = elements.first() else {
            return Ok((TypeName::list(TypeName::Dynamic), None));
        };
        let element: TypeName = match first {
            Value::Null => return Err(self.unsupported(field_name, "array of null")),
            Value::Bool(_) => TypeName::Scalar(ScalarType::Boolean),
            Value::Number(number) => TypeName::Scalar(classify_number(number)),
            Value::String(_) => TypeName::Scalar(ScalarType::String),
            Value::Array(_) => TypeName::Dynamic,
            Value::Object(mapping) => {
                let base_name: String = format!("{}{ARRAY_ITEM_SUFFIX}", capitalize(field_name));
                let nested: Declaration<'a> = self.nested(&base_name, mapping)?;
                let element: TypeName = TypeName::Declared(nested.name.clone());
                return Ok((TypeName::list(element), Some(nested)));
            }
        };
        Ok((TypeName::list(element), None))
    }

    fn nested<'a>(
        &mut self,
        name: &str,
        mapping: &'a Map<String, Value>,
    ) -> Result<Declaration<'a>, Json2ObjError> {
        self.builder.build_declaration(name, mapping, true)
    }

    fn unsupported(&self, field_name: &str, value_kind: &'static str) -> Json2ObjError {
        Json2ObjError::UnsupportedType {
            declaration: self.declaration.to_string(),
            field: field_name.to_string(),
            value_kind,
            language: self.builder.target_language().name(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::target::TargetLanguage;
    use serde_json::json;

    fn resolve_with<'a>(
        language: TargetLanguage,
        field_name: &str,
        value: &'a Value,
    ) -> Result<(TypeName, Option<Declaration<'a>>), Json2ObjError> {
        let mut builder = ClassBuilder::new(language);
        let mut resolver = TypeResolver::new(&mut builder, "JsonObject");
        resolver.resolve(field_name, value)
    }

    fn resolve<'a>(field_name: &str, value: &'a Value) -> (TypeName, Option<Declaration<'a>>) {
        resolve_with(TargetLanguage::Java, field_name, value)
            .expect("value should resolve")
    }

    fn number(literal: &str) -> Number {
        serde_json::from_str(literal).expect("valid number literal")
    }

    #[test]
    fn classify_number_integer_literal() {
        assert_eq!(ScalarType::Integer, classify_number(&number("3")));
        assert_eq!(ScalarType::Integer, classify_number(&number("-42")));
    }

    #[test]
    fn classify_number_fractional_literal() {
        assert_eq!(ScalarType::Float, classify_number(&number("3.0")));
        assert_eq!(ScalarType::Float, classify_number(&number("0.25")));
    }

    #[test]
    fn classify_number_negative_zero_is_float() {
        assert_eq!(ScalarType::Float, classify_number(&number("-0.0")));
    }

    #[test]
    fn classify_number_exponent_is_float() {
        assert_eq!(ScalarType::Float, classify_number(&number("1e5")));
    }

    #[test]
    fn classify_number_beyond_i64_is_integer() {
        assert_eq!(
            ScalarType::Integer,
            classify_number(&number("18446744073709551615"))
        );
    }

    #[test]
    fn classify_number_beyond_u64_is_integer() {
        let literal: &str = "100000000000000000000";
        assert_eq!(ScalarType::Integer, classify_number(&number(literal)));
    }

    #[test]
    fn classify_number_beyond_f64_range_is_float() {
        assert_eq!(ScalarType::Float, classify_number(&number("1e400")));
        assert_eq!(ScalarType::Float, classify_number(&number("-2E-400")));
    }

    #[test]
    fn classify_number_by_literal_form() {
        let cases: Vec<(&str, ScalarType)> = vec![
            ("0", ScalarType::Integer),
            ("-1", ScalarType::Integer),
            ("12345", ScalarType::Integer),
            ("0.5", ScalarType::Float),
            ("2.0", ScalarType::Float),
            ("-3.75", ScalarType::Float),
            ("6E2", ScalarType::Float),
            ("2e-3", ScalarType::Float),
        ];
        for (literal, expected) in cases {
            let actual: ScalarType = classify_number(&number(literal));
            assert_eq!(expected, actual, "literal {literal}");
        }
    }

    #[test]
    fn resolve_scalars() {
        let cases: Vec<(Value, ScalarType)> = vec![
            (json!(true), ScalarType::Boolean),
            (json!("x"), ScalarType::String),
            (json!(5), ScalarType::Integer),
            (json!(5.5), ScalarType::Float),
        ];
        for (value, expected) in &cases {
            let (resolved, nested) = resolve("field", value);
            assert_eq!(TypeName::Scalar(*expected), resolved);
            assert!(nested.is_none());
        }
    }

    #[test]
    fn resolve_empty_array_is_dynamic_list() {
        let value: Value = json!([]);
        let (resolved, nested) = resolve("items", &value);
        assert_eq!(TypeName::list(TypeName::Dynamic), resolved);
        assert!(nested.is_none());
    }

    #[test]
    fn resolve_array_of_scalars_uses_first_element() {
        let value: Value = json!([1, 2.5, "x"]);
        let (resolved, _) = resolve("ids", &value);
        let expected: TypeName = TypeName::list(TypeName::Scalar(ScalarType::Integer));
        assert_eq!(expected, resolved);
    }

    #[test]
    fn resolve_array_of_arrays_is_dynamic_list() {
        let value: Value = json!([[1, 2], [3, 4]]);
        let (resolved, nested) = resolve("matrix", &value);
        assert_eq!(TypeName::list(TypeName::Dynamic), resolved);
        assert!(nested.is_none());
    }

    #[test]
    fn resolve_object_builds_nested_declaration() {
        let value: Value = json!({ "city": "x" });
        let (resolved, nested) = resolve("addr", &value);
        let nested: Declaration<'_> = nested.expect("nested declaration");
        assert_eq!(TypeName::Declared("Addr".to_string()), resolved);
        assert_eq!("Addr", nested.name);
        assert!(nested.is_nested_helper);
        assert_eq!(1, nested.fields.len());
        assert_eq!("city", nested.fields[0].name);
    }

    #[test]
    fn resolve_array_of_objects_uses_first_element_shape_only() {
        let value: Value = json!([{ "a": 1 }, { "a": 2, "extra": true }]);
        let (resolved, nested) = resolve("points", &value);
        let nested: Declaration<'_> = nested.expect("nested declaration");
        assert_eq!(
            TypeName::list(TypeName::Declared("PointsItem".to_string())),
            resolved
        );
        let field_names: Vec<&str> = nested.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(vec!["a"], field_names);
    }

    #[test]
    fn resolve_null_is_unsupported() {
        let err = resolve_with(TargetLanguage::Go, "owner", &Value::Null)
            .expect_err("null must not resolve");
        match err {
            Json2ObjError::UnsupportedType {
                declaration,
                field,
                value_kind,
                language,
            } => {
                assert_eq!("JsonObject", declaration);
                assert_eq!("owner", field);
                assert_eq!("null", value_kind);
                assert_eq!("go", language);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolve_array_of_null_is_unsupported() {
        let err = resolve_with(TargetLanguage::Java, "gaps", &json!([null, 1]))
            .expect_err("array of null must not resolve");
        assert!(matches!(
            err,
            Json2ObjError::UnsupportedType {
                value_kind: "array of null",
                ..
            }
        ));
    }

    #[test]
    fn resolve_nested_null_reports_inner_declaration() {
        let err = resolve_with(TargetLanguage::Java, "addr", &json!({ "zip": null }))
            .expect_err("nested null must not resolve");
        assert!(matches!(
            err,
            Json2ObjError::UnsupportedType { ref declaration, ref field, .. }
                if declaration == "Addr" && field == "zip"
        ));
    }

    #[test]
    fn declared_name_looks_through_lists() {
        let ty: TypeName = TypeName::list(TypeName::Declared("TagsItem".to_string()));
        assert_eq!(Some("TagsItem"), ty.declared_name());
        assert_eq!(None, TypeName::list(TypeName::Dynamic).declared_name());
    }
}
