//! Tokenizer options
//!
//! Built once when a parser is created and passed by reference to every
//! matcher. With the `serde` feature the struct can be embedded in a
//! caller's configuration; missing fields fall back to the defaults.

/// Switches that change how the tokenizer classifies input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct ParserOptions {
    /// Recognize `{...}` code fragments in text and attributes
    pub allow_expressions: bool,
    /// Keep a `<` as text when it does not start anything that looks like markup
    pub allow_unsafe: bool,
    /// Accept a comment, CDATA or processing instruction that runs to end of input
    pub allow_unclosed_sections: bool,
}

impl ParserOptions {
    /// Strict defaults: every switch off
    pub fn new() -> Self {
        Self::default()
    }

    /// Set [`allow_expressions`](Self::allow_expressions)
    pub fn with_expressions(mut self, allow: bool) -> Self {
        self.allow_expressions = allow;
        self
    }

    /// Set [`allow_unsafe`](Self::allow_unsafe)
    pub fn with_unsafe(mut self, allow: bool) -> Self {
        self.allow_unsafe = allow;
        self
    }

    /// Set [`allow_unclosed_sections`](Self::allow_unclosed_sections)
    pub fn with_unclosed_sections(mut self, allow: bool) -> Self {
        self.allow_unclosed_sections = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_strict() {
        let options = ParserOptions::default();
        assert!(!options.allow_expressions);
        assert!(!options.allow_unsafe);
        assert!(!options.allow_unclosed_sections);
    }

    #[test]
    fn test_builder() {
        let options = ParserOptions::new().with_expressions(true).with_unsafe(true);
        assert!(options.allow_expressions);
        assert!(options.allow_unsafe);
        assert!(!options.allow_unclosed_sections);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_partial_config() {
        let options: ParserOptions = serde_json::from_str(r#"{"allowExpressions": true}"#).unwrap();
        assert_eq!(options, ParserOptions::new().with_expressions(true));

        let options: ParserOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(options, ParserOptions::default());
    }
}
