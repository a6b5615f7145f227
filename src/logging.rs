//! Log targets for the crate. Each area logs under its own `hacc::*` target
//! (`hacc::ui` for screen assembly and themes, `hacc::chart` for ring layout,
//! `hacc::palette` for color generation, `hacc::finance` for snapshots) so
//! `RUST_LOG=hacc::chart=debug` narrows output to a single area.

use log::{info, LevelFilter};

pub const UI_NAMESPACE: &str = "hacc::ui";
pub const CHART_NAMESPACE: &str = "hacc::chart";
pub const PALETTE_NAMESPACE: &str = "hacc::palette";
pub const FINANCE_NAMESPACE: &str = "hacc::finance";

/// Configures `env_logger` for the demo binary. The library only emits.
pub fn init_logging() {
    // RUST_LOG wins when set, otherwise everything at info
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .format_module_path(true)
        .format_target(true)
        .filter(Some(UI_NAMESPACE), LevelFilter::Debug)
        .filter(Some(CHART_NAMESPACE), LevelFilter::Debug)
        .filter(Some(PALETTE_NAMESPACE), LevelFilter::Debug)
        .filter(Some(FINANCE_NAMESPACE), LevelFilter::Debug)
        .init();

    info!("Logging initialized");
}

// Convenience macros for each namespace
#[macro_export]
macro_rules! ui_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::UI_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! chart_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::CHART_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! palette_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::PALETTE_NAMESPACE, $($arg)*)
    };
}

#[macro_export]
macro_rules! finance_log {
    ($($arg:tt)*) => {
        log::log!(target: $crate::logging::FINANCE_NAMESPACE, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_share_crate_prefix_and_differ() {
        let targets = [UI_NAMESPACE, CHART_NAMESPACE, PALETTE_NAMESPACE, FINANCE_NAMESPACE];
        for (i, target) in targets.iter().enumerate() {
            assert!(target.starts_with("hacc::"));
            assert!(!targets[i + 1..].contains(target));
        }
    }
}
