//! crates/logging/src/levels.rs
//! Subsystem identifiers shared by every crate that emits tracing events.

use std::fmt;

/// Workspace subsystem that owns a tracing target.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Subsystem {
    /// Directory traversal.
    Walk,
    /// Include/exclude pattern evaluation.
    Filter,
    /// Markdown document generation.
    Render,
    /// Argument handling and process-level reporting.
    Cli,
}

impl Subsystem {
    /// Every subsystem, in the order directives are rendered.
    pub const ALL: [Self; 4] = [Self::Walk, Self::Filter, Self::Render, Self::Cli];

    /// Returns the tracing target used for events emitted by the subsystem.
    #[must_use]
    pub const fn target(self) -> &'static str {
        match self {
            Self::Walk => "dircat::walk",
            Self::Filter => "dircat::filter",
            Self::Render => "dircat::render",
            Self::Cli => "dircat::cli",
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.target())
    }
}
