//! Generate Java classes and Go structs from a sample JSON object.
//!
//! Every JSON object becomes a declaration; object-valued fields and arrays of
//! objects become nested declarations emitted after the one that refers to
//! them. Field order follows the input document.

mod builder;
mod error;
mod naming;
mod resolve;
mod settings;
pub mod target;

pub use builder::{ClassBuilder, Declaration, FieldDeclaration};
pub use error::Json2ObjError;
pub use resolve::{ARRAY_ITEM_SUFFIX, ScalarType, TypeName, TypeResolver, classify_number};
pub use settings::{DEFAULT_ROOT_NAME, GenerateSettings};
pub use target::{Target, TargetLanguage};

use std::borrow::Cow;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

use serde_json::{Map, Value};
use tracing::debug;

/// Generate the complete source text for an already decoded JSON object.
///
/// # Errors
///
/// Returns [`Json2ObjError::UnsupportedType`] if any field, at any depth, has
/// no type mapping in the target language.
pub fn generate_from_map(
    mapping: &Map<String, Value>,
    settings: &GenerateSettings,
) -> Result<String, Json2ObjError> {
    let target: &dyn Target = settings.target_language.target();
    let root_name: String = settings.root_declaration_name();
    let mut builder = ClassBuilder::new(settings.target_language);
    let root: Declaration<'_> = builder.build_declaration(&root_name, mapping, false)?;

    let package: &str = settings
        .package
        .as_deref()
        .filter(|package| !package.is_empty())
        .unwrap_or_else(|| target.default_package());
    debug!(
        language = %settings.target_language,
        root = %root.name,
        package = %package,
        "rendering output unit"
    );
    Ok(target::render_unit(target, &root, package))
}

/// Generate the complete source text for a JSON document whose top level is an
/// object.
///
/// # Errors
///
/// Returns [`Json2ObjError::JsonDecodeError`] if `json` is malformed or its top
/// level is not an object, and [`Json2ObjError::UnsupportedType`] as for
/// [`generate_from_map`].
pub fn generate(json: &str, settings: &GenerateSettings) -> Result<String, Json2ObjError> {
    let mapping: Map<String, Value> = serde_json::from_str(json)?;
    generate_from_map(&mapping, settings)
}

/// Generate source text from `json` and write it to `writer`.
///
/// Nothing is written unless generation succeeds.
///
/// # Errors
///
/// Returns the errors of [`generate`], or [`Json2ObjError::IoError`] if writing
/// to `writer` fails.
pub fn generate_to_writer<W: Write>(
    json: &str,
    writer: &mut W,
    settings: &GenerateSettings,
) -> Result<(), Json2ObjError> {
    let output: String = generate(json, settings)?;
    writer.write_all(output.as_bytes())?;
    writer.flush()?;
    Ok(())
}

/// Generate source text from the JSON file at `input_path`.
///
/// With `output_path`, the text replaces that file and, unless
/// [`GenerateSettings::output_name`] is already set, the root declaration is
/// named after the file. Without it, the text goes to stdout.
///
/// # Errors
///
/// Returns [`Json2ObjError::InputReadError`] if the input cannot be read, the
/// errors of [`generate`], or [`Json2ObjError::IoError`] if writing the output
/// fails. The output file is left untouched on any generation error.
pub fn generate_from_file(
    input_path: impl AsRef<Path>,
    output_path: Option<&Path>,
    settings: &GenerateSettings,
) -> Result<(), Json2ObjError> {
    let input_path: &Path = input_path.as_ref();
    let json: String =
        fs::read_to_string(input_path).map_err(|source| Json2ObjError::InputReadError {
            path: input_path.to_path_buf(),
            source,
        })?;

    let settings: Cow<'_, GenerateSettings> = match output_path {
        Some(path) if settings.output_name.is_none() => Cow::Owned(GenerateSettings {
            output_name: Some(path.to_string_lossy().into_owned()),
            ..settings.clone()
        }),
        _ => Cow::Borrowed(settings),
    };
    let output: String = generate(&json, &settings)?;

    match output_path {
        Some(path) => {
            fs::write(path, output)?;
            debug!(path = %path.display(), "wrote generated source");
        }
        None => {
            let mut stdout: io::StdoutLock<'_> = io::stdout().lock();
            stdout.write_all(output.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
