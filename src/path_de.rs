use serde::de::DeserializeOwned;

use crate::error::{ConvertError, Result};

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_parse_error)
}

pub fn from_slice_with_path<T: DeserializeOwned>(bytes: &[u8]) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_slice(bytes);
    serde_path_to_error::deserialize::<_, T>(de).map_err(into_parse_error)
}

fn into_parse_error(err: serde_path_to_error::Error<serde_json::Error>) -> ConvertError {
    let path = err.path().to_string();
    ConvertError::Parse { path, message: err.into_inner().to_string() }
}
