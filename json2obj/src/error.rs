use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Error type for JSON to declaration code generation.
#[derive(Debug)]
pub enum Json2ObjError {
    /// The input file is missing or unreadable.
    InputReadError { path: PathBuf, source: io::Error },

    /// The input is not well-formed JSON, or its top level is not an object.
    JsonDecodeError(serde_json::Error),

    /// A field's value (or the first element of an array field) has no
    /// mapping in the target language.
    UnsupportedType {
        declaration: String,
        field: String,
        value_kind: &'static str,
        language: &'static str,
    },

    /// The target-language selector is not one of the supported languages.
    UnknownTargetLanguage(String),

    /// Writing the generated output failed.
    IoError(io::Error),
}

impl error::Error for Json2ObjError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Self::InputReadError { source, .. } | Self::IoError(source) => Some(source),
            Self::JsonDecodeError(json_error) => Some(json_error),
            Self::UnsupportedType { .. } | Self::UnknownTargetLanguage(_) => None,
        }
    }
}

impl fmt::Display for Json2ObjError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InputReadError { path, source } => {
                write!(f, "unable to read '{}': {source}", path.display())
            }
            Self::JsonDecodeError(json_error) => {
                write!(f, "unable to decode JSON object: {json_error}")
            }
            Self::UnsupportedType {
                declaration,
                field,
                value_kind,
                language,
            } => write!(
                f,
                "unable to map {value_kind} value of field '{field}' in '{declaration}' to a {language} type"
            ),
            Self::UnknownTargetLanguage(selector) => write!(
                f,
                "unknown target language '{selector}' (expected one of: java, go)"
            ),
            Self::IoError(io_error) => fmt::Display::fmt(io_error, f),
        }
    }
}

impl From<io::Error> for Json2ObjError {
    fn from(io_error: io::Error) -> Self {
        Self::IoError(io_error)
    }
}

impl From<serde_json::Error> for Json2ObjError {
    fn from(json_error: serde_json::Error) -> Self {
        Self::JsonDecodeError(json_error)
    }
}
