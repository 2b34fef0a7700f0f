use std::env;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 32;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Runtime settings for the order system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemConfig {
    /// Bound of the request channel in front of the order service.
    pub channel_capacity: usize,
    /// Filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl SystemConfig {
    /// Reads `ORDERS_CHANNEL_CAPACITY` and `ORDERS_LOG`, keeping the default
    /// for anything missing or unusable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let channel_capacity = lookup("ORDERS_CHANNEL_CAPACITY")
            .and_then(|raw| raw.trim().parse::<usize>().ok())
            .filter(|capacity| *capacity > 0)
            .unwrap_or(defaults.channel_capacity);
        let log_filter = lookup("ORDERS_LOG")
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            channel_capacity,
            log_filter,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(SystemConfig::from_lookup(lookup(&[])), SystemConfig::default());
    }

    #[test]
    fn test_reads_values() {
        let config = SystemConfig::from_lookup(lookup(&[
            ("ORDERS_CHANNEL_CAPACITY", " 128 "),
            ("ORDERS_LOG", "restaurant_orders=debug"),
        ]));
        assert_eq!(config.channel_capacity, 128);
        assert_eq!(config.log_filter, "restaurant_orders=debug");
    }

    #[test]
    fn test_unusable_values_fall_back() {
        for capacity in ["0", "-4", "lots"] {
            let config = SystemConfig::from_lookup(lookup(&[
                ("ORDERS_CHANNEL_CAPACITY", capacity),
                ("ORDERS_LOG", "  "),
            ]));
            assert_eq!(config, SystemConfig::default());
        }
    }
}
