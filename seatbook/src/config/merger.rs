//! Configuration merging logic.
//!
//! Configurations are layered from lowest to highest precedence; a field set
//! in a higher layer replaces the value from any lower layer.

use crate::config::schema::Config;

/// Merges configurations.
///
/// # Examples
///
/// ```
/// use seatbook::config::{Config, ConfigMerger};
///
/// let mut result = Config {
///     maximum_lock_wait_seconds: Some(5),
///     ..Default::default()
/// };
/// let high = Config {
///     maximum_lock_wait_seconds: Some(20),
///     ..Default::default()
/// };
///
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.maximum_lock_wait_seconds, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configurations into a final config.
    ///
    /// Layers should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge<'a>(layers: impl IntoIterator<Item = &'a Config>) -> Config {
        let mut result = Config::default();
        for layer in layers {
            Self::merge_into(&mut result, layer);
        }
        result
    }

    /// Merge source config into target (source overwrites target if set).
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.database_path.is_some() {
            target.database_path.clone_from(&source.database_path);
        }

        if source.in_memory.is_some() {
            target.in_memory = source.in_memory;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use proptest::prelude::*;
    use std::path::PathBuf;

    #[test]
    fn test_merge_simple_fields() {
        let low = Config {
            database_path: Some(PathBuf::from("/low.db")),
            maximum_lock_wait_seconds: Some(5),
            output_format: Some(OutputFormat::Json),
            ..Default::default()
        };
        let high = Config {
            database_path: Some(PathBuf::from("/high.db")),
            in_memory: Some(false),
            ..Default::default()
        };

        let merged = ConfigMerger::merge([&low, &high]);
        assert_eq!(merged.database_path, Some(PathBuf::from("/high.db")));
        assert_eq!(merged.in_memory, Some(false));
        assert_eq!(merged.maximum_lock_wait_seconds, Some(5));
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
    }

    fn arb_config() -> impl Strategy<Value = Config> {
        (
            proptest::option::of("[a-z/]{1,12}"),
            proptest::option::of(any::<bool>()),
            proptest::option::of(1u64..600),
            proptest::option::of(prop_oneof![
                Just(OutputFormat::Table),
                Just(OutputFormat::Json),
                Just(OutputFormat::Csv),
            ]),
        )
            .prop_map(|(path, in_memory, wait, format)| Config {
                database_path: path.map(PathBuf::from),
                in_memory,
                maximum_lock_wait_seconds: wait,
                output_format: format,
            })
    }

    proptest! {
        /// Merging an empty config changes nothing.
        #[test]
        fn prop_merge_empty_is_identity(config in arb_config()) {
            let mut target = config.clone();
            ConfigMerger::merge_into(&mut target, &Config::default());
            prop_assert_eq!(target, config);
        }

        /// A set field in the source always wins.
        #[test]
        fn prop_source_overwrites_set_fields(target in arb_config(), source in arb_config()) {
            let mut merged = target.clone();
            ConfigMerger::merge_into(&mut merged, &source);

            prop_assert_eq!(
                merged.database_path,
                source.database_path.or(target.database_path)
            );
            prop_assert_eq!(merged.in_memory, source.in_memory.or(target.in_memory));
            prop_assert_eq!(
                merged.maximum_lock_wait_seconds,
                source.maximum_lock_wait_seconds.or(target.maximum_lock_wait_seconds)
            );
            prop_assert_eq!(merged.output_format, source.output_format.or(target.output_format));
        }
    }
}
