use fieldflags::{DecodeError, TextDecodable};

#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("format must be UTF-8")]
    InvalidUtf8,

    #[error("unknown format {0:?}; expected one of 'text', 'json', or 'yaml'")]
    Unknown(String),
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    #[default]
    Text,
    Json,
    Yaml,
}

impl TextDecodable for Format {
    fn decode_text(text: &[u8]) -> Result<Self, DecodeError> {
        let text = std::str::from_utf8(text).map_err(|_| FormatError::InvalidUtf8)?;

        match text.to_ascii_lowercase().as_str() {
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            "yaml" | "yml" => Ok(Format::Yaml),
            _ => Err(FormatError::Unknown(text.to_owned()).into()),
        }
    }
}
