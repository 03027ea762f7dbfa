//! crates/logging/src/config.rs
//! Verbosity configuration derived from the `-v` flag.

use super::levels::Subsystem;
use tracing::level_filters::LevelFilter;

/// Per-subsystem log levels.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct VerbosityConfig {
    /// Level for traversal events.
    pub walk: LevelFilter,
    /// Level for pattern evaluation events.
    pub filter: LevelFilter,
    /// Level for document generation events.
    pub render: LevelFilter,
    /// Level for argument handling and process-level events.
    pub cli: LevelFilter,
    /// Level applied to targets outside the workspace.
    pub other: LevelFilter,
}

impl Default for VerbosityConfig {
    fn default() -> Self {
        Self::from_verbose_level(0)
    }
}

impl VerbosityConfig {
    /// Create a new configuration from a verbose level.
    ///
    /// Level `0` only reports warnings, `1` reports progress for every
    /// subsystem, `2` adds per-entry traversal and filter decisions, and `3`
    /// or above enables everything.
    pub fn from_verbose_level(level: u8) -> Self {
        match level {
            0 => Self::uniform(LevelFilter::WARN),
            1 => Self::uniform(LevelFilter::INFO),
            2 => Self {
                walk: LevelFilter::DEBUG,
                filter: LevelFilter::DEBUG,
                render: LevelFilter::INFO,
                cli: LevelFilter::INFO,
                other: LevelFilter::WARN,
            },
            _ => Self {
                other: LevelFilter::INFO,
                ..Self::uniform(LevelFilter::TRACE)
            },
        }
    }

    const fn uniform(level: LevelFilter) -> Self {
        Self {
            walk: level,
            filter: level,
            render: level,
            cli: level,
            other: LevelFilter::WARN,
        }
    }

    /// Returns the level configured for `subsystem`.
    #[must_use]
    pub const fn level(&self, subsystem: Subsystem) -> LevelFilter {
        match subsystem {
            Subsystem::Walk => self.walk,
            Subsystem::Filter => self.filter,
            Subsystem::Render => self.render,
            Subsystem::Cli => self.cli,
        }
    }

    /// Renders the configuration as a comma-separated `EnvFilter` directive list.
    #[must_use]
    pub fn directives(&self) -> String {
        let mut directives = vec![directive_level(self.other).to_owned()];
        for subsystem in Subsystem::ALL {
            directives.push(format!(
                "{}={}",
                subsystem.target(),
                directive_level(self.level(subsystem))
            ));
        }
        directives.join(",")
    }
}

fn directive_level(level: LevelFilter) -> &'static str {
    if level == LevelFilter::OFF {
        "off"
    } else if level == LevelFilter::ERROR {
        "error"
    } else if level == LevelFilter::WARN {
        "warn"
    } else if level == LevelFilter::INFO {
        "info"
    } else if level == LevelFilter::DEBUG {
        "debug"
    } else {
        "trace"
    }
}
