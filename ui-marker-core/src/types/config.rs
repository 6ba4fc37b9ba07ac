//! Controller configuration

use serde::{Deserialize, Serialize};

/// How completed fetches are reconciled with newer requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseOrdering {
    /// Only the most recently issued request of a field may update it.
    /// Older responses that arrive late are dropped.
    #[default]
    LatestRequestWins,
    /// Every response is applied in the order it arrives, so a slow response
    /// to an older request can overwrite newer data. Matches the legacy page.
    LastArrivalWins,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ControllerConfig {
    pub response_ordering: ResponseOrdering,
}

impl ControllerConfig {
    /// Configuration reproducing the legacy page bit for bit.
    pub fn legacy() -> Self {
        Self {
            response_ordering: ResponseOrdering::LastArrivalWins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_latest_request() {
        let config: ControllerConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.response_ordering, ResponseOrdering::LatestRequestWins);
    }

    #[test]
    fn legacy_ordering_from_json() {
        let config: ControllerConfig =
            serde_json::from_str(r#"{"responseOrdering":"last_arrival_wins"}"#).unwrap();
        assert_eq!(config, ControllerConfig::legacy());
    }
}
