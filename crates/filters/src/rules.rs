use logging::trace_filter;

use crate::{DirectoryDecision, FileDecision, FilterError, PatternList};

/// Compiled include and exclude pattern lists.
///
/// `MatchRules` is immutable once built and cheap to share by reference
/// across the traversal.
#[derive(Clone, Debug)]
pub struct MatchRules {
    include: PatternList,
    exclude: PatternList,
}

impl MatchRules {
    /// Compiles the include and exclude patterns.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError::NoIncludePatterns`] when `include` is empty and
    /// [`FilterError::InvalidPattern`] when any pattern fails to parse.
    pub fn new<I, E>(include: I, exclude: E) -> Result<Self, FilterError>
    where
        I: IntoIterator,
        I::Item: Into<String>,
        E: IntoIterator,
        E::Item: Into<String>,
    {
        let include = PatternList::new(include)?;
        if include.is_empty() {
            return Err(FilterError::NoIncludePatterns);
        }
        let exclude = PatternList::new(exclude)?;

        tracing::debug!(
            target: "dircat::filter",
            include = ?include.patterns(),
            exclude = ?exclude.patterns(),
            "compiled match rules"
        );

        Ok(Self { include, exclude })
    }

    /// Include patterns, matched against bare file names.
    #[must_use]
    pub const fn include(&self) -> &PatternList {
        &self.include
    }

    /// Exclude patterns, matched against names and relative paths.
    #[must_use]
    pub const fn exclude(&self) -> &PatternList {
        &self.exclude
    }

    /// Decides whether the directory `name` at relative path `rel` is entered.
    ///
    /// `rel` uses `/` separators and has no leading `./`.
    #[must_use]
    pub fn directory_decision(&self, name: &str, rel: &str) -> DirectoryDecision {
        let decision = if name.starts_with('.') {
            DirectoryDecision::Hidden
        } else if self.exclude.is_match(name) {
            DirectoryDecision::ExcludedByName
        } else if self.exclude.is_match(rel) {
            DirectoryDecision::ExcludedByPath
        } else if self.exclude.is_match(&format!("./{rel}")) {
            DirectoryDecision::ExcludedByDotPath
        } else {
            DirectoryDecision::Descend
        };

        if !decision.descends() {
            trace_filter!(path = rel, reason = %decision, "pruning directory");
        }
        decision
    }

    /// Decides whether the file `name` at relative path `rel` is emitted.
    #[must_use]
    pub fn file_decision(&self, name: &str, rel: &str) -> FileDecision {
        let decision = if !self.include.is_match(name) {
            FileDecision::NotIncluded
        } else if self.exclude.is_match(name) {
            FileDecision::ExcludedByName
        } else if self.exclude.is_match(rel) {
            FileDecision::ExcludedByPath
        } else {
            FileDecision::Selected
        };

        match decision {
            FileDecision::Selected => {
                trace_filter!(path = rel, "selected file");
            }
            FileDecision::NotIncluded => {}
            FileDecision::ExcludedByName | FileDecision::ExcludedByPath => {
                trace_filter!(path = rel, reason = %decision, "excluded file");
            }
        }
        decision
    }
}
