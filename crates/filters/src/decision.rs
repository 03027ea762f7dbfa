use std::fmt;

/// Outcome of evaluating a directory before descending into it.
///
/// Variants other than [`Descend`](Self::Descend) prune the directory. Reasons
/// are checked in declaration order and the first that applies is reported.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DirectoryDecision {
    /// The directory is entered.
    Descend,
    /// The directory name starts with `.`.
    Hidden,
    /// The bare directory name matches an exclude pattern.
    ExcludedByName,
    /// The relative path matches an exclude pattern.
    ExcludedByPath,
    /// The relative path prefixed with `./` matches an exclude pattern.
    ExcludedByDotPath,
}

impl DirectoryDecision {
    /// Reports whether traversal continues into the directory.
    #[must_use]
    pub const fn descends(self) -> bool {
        matches!(self, Self::Descend)
    }
}

impl fmt::Display for DirectoryDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Descend => "descend",
            Self::Hidden => "hidden directory",
            Self::ExcludedByName => "name matches an exclude pattern",
            Self::ExcludedByPath => "relative path matches an exclude pattern",
            Self::ExcludedByDotPath => "./-prefixed path matches an exclude pattern",
        })
    }
}

/// Outcome of evaluating a file inside a directory that was not pruned.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FileDecision {
    /// The file is emitted.
    Selected,
    /// No include pattern matches the bare file name.
    NotIncluded,
    /// The bare file name matches an exclude pattern.
    ExcludedByName,
    /// The relative path matches an exclude pattern.
    ExcludedByPath,
}

impl FileDecision {
    /// Reports whether the file is emitted.
    #[must_use]
    pub const fn is_selected(self) -> bool {
        matches!(self, Self::Selected)
    }
}

impl fmt::Display for FileDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selected => "selected",
            Self::NotIncluded => "no include pattern matches",
            Self::ExcludedByName => "name matches an exclude pattern",
            Self::ExcludedByPath => "relative path matches an exclude pattern",
        })
    }
}
