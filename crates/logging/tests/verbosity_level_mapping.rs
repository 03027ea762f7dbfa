//! Integration tests for verbosity level mapping.
//!
//! These tests verify that the repeatable `-v` flag maps onto the expected
//! per-subsystem levels and that the rendered filter directives stay stable.

use logging::{Subsystem, VerbosityConfig};
use tracing::level_filters::LevelFilter;

/// Verifies the default (no `-v`) keeps every subsystem at warnings.
#[test]
fn verbose_level_0_reports_warnings_only() {
    let config = VerbosityConfig::from_verbose_level(0);
    for subsystem in Subsystem::ALL {
        assert_eq!(config.level(subsystem), LevelFilter::WARN, "{subsystem}");
    }
}

/// Verifies `-v` raises every subsystem to info without enabling debug.
#[test]
fn verbose_level_1_maps_to_info() {
    let config = VerbosityConfig::from_verbose_level(1);
    for subsystem in Subsystem::ALL {
        assert_eq!(config.level(subsystem), LevelFilter::INFO, "{subsystem}");
    }
}

/// Verifies `-vv` exposes per-entry traversal and filter decisions.
#[test]
fn verbose_level_2_enables_walk_and_filter_debug() {
    let config = VerbosityConfig::from_verbose_level(2);
    assert_eq!(config.level(Subsystem::Walk), LevelFilter::DEBUG);
    assert_eq!(config.level(Subsystem::Filter), LevelFilter::DEBUG);
    assert_eq!(config.level(Subsystem::Render), LevelFilter::INFO);
    assert_eq!(config.level(Subsystem::Cli), LevelFilter::INFO);
}

/// Verifies verbosity increases monotonically with the flag count.
#[test]
fn verbosity_never_decreases() {
    for level in 0..6u8 {
        let lower = VerbosityConfig::from_verbose_level(level);
        let higher = VerbosityConfig::from_verbose_level(level + 1);
        for subsystem in Subsystem::ALL {
            assert!(
                higher.level(subsystem) >= lower.level(subsystem),
                "level {level} -> {} lowered {subsystem}",
                level + 1
            );
        }
    }
}

/// Verifies directives name the workspace targets explicitly.
#[test]
fn directives_target_workspace_subsystems() {
    let directives = VerbosityConfig::from_verbose_level(2).directives();
    assert!(directives.starts_with("warn,"));
    assert!(directives.contains("dircat::walk=debug"));
    assert!(directives.contains("dircat::filter=debug"));
    assert!(directives.contains("dircat::render=info"));
    assert!(directives.contains("dircat::cli=info"));
}
