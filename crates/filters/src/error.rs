use std::fmt;

/// Error produced when include or exclude patterns cannot be compiled.
#[derive(Debug)]
pub enum FilterError {
    /// A pattern is not a valid glob expression.
    InvalidPattern {
        /// Pattern text as supplied by the user.
        pattern: String,
        /// Parser error reported by `globset`.
        source: globset::Error,
    },
    /// No include pattern remained after parsing.
    NoIncludePatterns,
}

impl FilterError {
    pub(crate) const fn invalid_pattern(pattern: String, source: globset::Error) -> Self {
        Self::InvalidPattern { pattern, source }
    }

    /// Returns the offending pattern, if the error concerns one.
    #[must_use]
    pub fn pattern(&self) -> Option<&str> {
        match self {
            Self::InvalidPattern { pattern, .. } => Some(pattern),
            Self::NoIncludePatterns => None,
        }
    }
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPattern { pattern, source } => {
                write!(f, "invalid glob pattern '{pattern}': {}", source.kind())
            }
            Self::NoIncludePatterns => f.write_str("no valid file patterns provided"),
        }
    }
}

impl std::error::Error for FilterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidPattern { source, .. } => Some(source),
            Self::NoIncludePatterns => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::FilterError;
    use globset::GlobBuilder;
    use std::error::Error as _;

    #[test]
    fn invalid_pattern_preserves_pattern_and_source() {
        let glob_err = GlobBuilder::new("[").build().unwrap_err();
        let error = FilterError::invalid_pattern("[".into(), glob_err.clone());

        assert_eq!(error.pattern(), Some("["));
        assert!(error.to_string().starts_with("invalid glob pattern '['"));
        assert_eq!(error.source().unwrap().to_string(), glob_err.to_string());
    }

    #[test]
    fn missing_includes_has_no_pattern_or_source() {
        let error = FilterError::NoIncludePatterns;
        assert_eq!(error.pattern(), None);
        assert!(error.source().is_none());
        assert_eq!(error.to_string(), "no valid file patterns provided");
    }
}
