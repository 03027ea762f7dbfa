use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use logging::trace_filter;

use crate::FilterError;
use crate::wildcard::translate;

/// Ordered list of compiled shell-glob patterns.
///
/// The list keeps the original pattern text for diagnostics. An empty list
/// matches nothing.
#[derive(Clone, Debug)]
pub struct PatternList {
    patterns: Vec<String>,
    set: GlobSet,
}

impl PatternList {
    /// Compiles `patterns` into a single matcher.
    ///
    /// Every shell wildcard is accepted. A pattern whose character class is
    /// empty, such as `[z-a]`, is kept for diagnostics but never matches.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::InvalidPattern`] when the combined matcher
    /// cannot be built.
    pub fn new<I>(patterns: I) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let mut builder = GlobSetBuilder::new();
        let mut texts = Vec::new();
        for pattern in patterns {
            let pattern = pattern.into();
            match translate(&pattern) {
                Some(glob) => {
                    builder.add(compile(&pattern, &glob)?);
                }
                None => {
                    trace_filter!(pattern = %pattern, "pattern has an empty class and never matches");
                }
            }
            texts.push(pattern);
        }

        let set = builder
            .build()
            .map_err(|source| FilterError::invalid_pattern(texts.join(","), source))?;

        Ok(Self {
            patterns: texts,
            set,
        })
    }

    /// Reports whether any pattern matches `candidate`.
    #[must_use]
    pub fn is_match(&self, candidate: &str) -> bool {
        !self.patterns.is_empty() && self.set.is_match(candidate)
    }

    /// Returns the source text of each pattern in definition order.
    #[must_use]
    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Reports whether the list has no patterns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

fn compile(pattern: &str, glob: &str) -> Result<globset::Glob, FilterError> {
    GlobBuilder::new(glob)
        .literal_separator(false)
        .case_insensitive(false)
        .backslash_escape(false)
        .build()
        .map_err(|source| FilterError::invalid_pattern(pattern.to_owned(), source))
}

/// Splits a comma-separated pattern argument into individual patterns.
///
/// Segments are trimmed and empty segments are dropped, so `"*.py, ,*.md,"`
/// yields `["*.py", "*.md"]`.
#[must_use]
pub fn parse_pattern_list(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}
