use thiserror::Error;

/// A string that does not name any variant of a closed value type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown '{value}' {kind}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
}

impl ParseEnumError {
    pub fn new(kind: &'static str, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_names_kind_and_value() {
        let err = ParseEnumError::new("tag", "rust");
        assert_eq!(err.to_string(), "unknown 'rust' tag");
        assert_eq!(err.kind(), "tag");
        assert_eq!(err.value(), "rust");
    }
}
