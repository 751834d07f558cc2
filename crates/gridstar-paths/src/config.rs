use std::time::Duration;

/// What a [`Session`](crate::Session) does when the source or target is an
/// obstacle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndpointPolicy {
    /// Fail with [`SearchError::InvalidEndpoint`](crate::SearchError::InvalidEndpoint).
    #[default]
    Reject,
    /// Make the endpoint cells passable, then search.
    Clear,
}

/// Per-session search settings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SearchConfig {
    pub endpoints: EndpointPolicy,
    /// Stop after this many expansions.
    pub max_expansions: Option<usize>,
    /// Stop once a search has run this long.
    pub time_limit: Option<Duration>,
    /// Record the expansion order in [`PathResult::trace`](crate::PathResult::trace).
    pub record_trace: bool,
}

impl SearchConfig {
    pub fn with_endpoints(mut self, policy: EndpointPolicy) -> Self {
        self.endpoints = policy;
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    pub fn with_trace(mut self, record: bool) -> Self {
        self.record_trace = record;
        self
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: SearchConfig = serde_json::from_str(r#"{"endpoints":"Clear"}"#).unwrap();
        assert_eq!(config, SearchConfig::default().with_endpoints(EndpointPolicy::Clear));
    }

    #[test]
    fn config_round_trip() {
        let config = SearchConfig::default()
            .with_max_expansions(500)
            .with_time_limit(Duration::from_millis(16))
            .with_trace(true);
        let json = serde_json::to_string(&config).unwrap();
        let back: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
