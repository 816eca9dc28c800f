use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing element #{0}")]
    MissingElement(String),

    #[error("element #{0} has an unexpected type")]
    WrongElementType(String),

    #[error("javascript error: {0}")]
    Js(String),

    #[error("could not read file: {0}")]
    FileRead(String),

    #[error("not a base64 data URL: {0}")]
    DataUrl(String),

    #[error("request failed: {0}")]
    Http(String),

    #[error("Error HTTP: {0}")]
    Status(u16),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("bad config: {0}")]
    Config(String),
}

impl From<JsValue> for Error {
    fn from(value: JsValue) -> Self {
        match value.as_string() {
            Some(s) => Error::Js(s),
            None => Error::Js(format!("{value:?}")),
        }
    }
}

impl From<gloo::net::Error> for Error {
    fn from(e: gloo::net::Error) -> Self {
        Error::Http(e.to_string())
    }
}

impl From<gloo::file::FileReadError> for Error {
    fn from(e: gloo::file::FileReadError) -> Self {
        Error::FileRead(format!("{e:?}"))
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_names_the_code() {
        assert_eq!(Error::Status(500).to_string(), "Error HTTP: 500");
        assert_eq!(Error::Status(404).to_string(), "Error HTTP: 404");
    }

    #[test]
    fn missing_element_names_the_id() {
        let e = Error::MissingElement("titleVisual".into());
        assert_eq!(e.to_string(), "missing element #titleVisual");
    }

    #[test]
    fn json_errors_convert() {
        let err = serde_json::from_str::<u8>("nope").unwrap_err();
        let e: Error = err.into();
        assert!(matches!(e, Error::Json(_)));
    }
}
