use serde::{Deserialize, Serialize};

/// The default maximum list length, meaning "no limit".
pub const UNLIMITED_LIST_LENGTH: usize = 0;

/// Configuration for a `ListCodec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The largest element count accepted when decoding. `0` disables the limit.
    ///
    /// Encoding is never limited.
    pub max_list_length: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_list_length: UNLIMITED_LIST_LENGTH,
        }
    }
}

impl Config {
    pub fn with_max_list_length(max_list_length: usize) -> Self {
        Self { max_list_length }
    }

    /// Returns the decode limit, or `None` if lists of any length are accepted.
    pub fn limit(&self) -> Option<usize> {
        if self.max_list_length == UNLIMITED_LIST_LENGTH {
            None
        } else {
            Some(self.max_list_length)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited() {
        assert_eq!(Config::default().limit(), None);
        assert_eq!(Config::with_max_list_length(0).limit(), None);
        assert_eq!(Config::with_max_list_length(16).limit(), Some(16));
    }

    #[test]
    fn yaml_fields_are_optional() {
        let config: Config = serde_yaml::from_str("{}").unwrap();
        assert_eq!(config, Config::default());

        let config: Config = serde_yaml::from_str("max_list_length: 1024").unwrap();
        assert_eq!(config.limit(), Some(1024));
    }

    #[test]
    fn negative_limit_is_rejected() {
        assert!(serde_json::from_str::<Config>(r#"{"max_list_length": -1}"#).is_err());
    }

    #[test]
    fn json_round_trip() {
        let config = Config::with_max_list_length(7);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, r#"{"max_list_length":7}"#);
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }
}
