//! Planet physical-data client.
//!
//! Wraps the api-ninjas `/v1/planets` endpoint: one blocking GET per body,
//! JSON array response, first record wins. The core never sees HTTP; it
//! consumes the plain [`PlanetFacts`] record. Any failure here is fatal for
//! the run, since a body without physical data cannot be positioned.

use reqwest::blocking::Client;
use serde::Deserialize;
use thiserror::Error;

/// Default endpoint queried for planet records.
pub const DEFAULT_BASE_URL: &str = "https://api.api-ninjas.com/v1/planets";

/// Environment variable holding the api-ninjas key.
pub const API_KEY_ENV: &str = "API_NINJAS_KEY";

/// Physical record for one body as the core consumes it. `period` is in
/// days and `semi_major_axis` in AU; `mass` and `radius` are percentages of
/// Jupiter's (the provider reports fractions, scaled x100 on decode).
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct PlanetFacts {
    pub name: String,
    pub mass: f64,
    pub radius: f64,
    pub period: f64,
    pub semi_major_axis: f64,
    pub temperature: f64,
    pub distance_light_year: f64,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("no API key: set the {API_KEY_ENV} environment variable")]
    MissingApiKey,
    #[error("failed to build HTTP client: {0}")]
    Client(reqwest::Error),
    #[error("request for {name} failed: {source}")]
    Network {
        name: String,
        source: reqwest::Error,
    },
    #[error("no data available for {0}")]
    DataUnavailable(String),
    #[error("failed to parse response for {name}: {source}")]
    Parse {
        name: String,
        source: serde_json::Error,
    },
}

/// Blocking HTTP client for planet records.
pub struct PlanetClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl PlanetClient {
    /// Client against the default endpoint, key taken from [`API_KEY_ENV`].
    pub fn from_env() -> Result<Self, ProviderError> {
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| ProviderError::MissingApiKey)?;
        Self::new(api_key, DEFAULT_BASE_URL.to_string())
    }

    pub fn new(api_key: String, base_url: String) -> Result<Self, ProviderError> {
        let client = Client::builder().build().map_err(ProviderError::Client)?;
        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Fetch the record for one body by name.
    pub fn fetch(&self, name: &str) -> Result<PlanetFacts, ProviderError> {
        let payload = self
            .client
            .get(&self.base_url)
            .query(&[("name", name)])
            .header("X-Api-Key", &self.api_key)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|source| ProviderError::Network {
                name: name.to_string(),
                source,
            })?;
        parse_response(name, &payload)
    }
}

/// Decode a provider payload into the record for `name`. Split out from
/// [`PlanetClient::fetch`] so decoding is testable without a network.
pub fn parse_response(name: &str, payload: &str) -> Result<PlanetFacts, ProviderError> {
    let mut records: Vec<PlanetFacts> =
        serde_json::from_str(payload).map_err(|source| ProviderError::Parse {
            name: name.to_string(),
            source,
        })?;
    if records.is_empty() {
        return Err(ProviderError::DataUnavailable(name.to_string()));
    }
    let mut facts = records.swap_remove(0);
    facts.mass *= 100.0;
    facts.radius *= 100.0;
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SATURN: &str = r#"[{
        "name": "Saturn",
        "mass": 0.299,
        "radius": 0.832,
        "period": 10759.22,
        "semi_major_axis": 9.537,
        "temperature": 134.0,
        "distance_light_year": 0.000134
    }]"#;

    #[test]
    fn decodes_first_record_and_scales_mass_and_radius() {
        let facts = parse_response("Saturn", SATURN).unwrap();
        assert_eq!(facts.name, "Saturn");
        assert!((facts.mass - 29.9).abs() < 1e-9);
        assert!((facts.radius - 83.2).abs() < 1e-9);
        assert!((facts.period - 10759.22).abs() < 1e-9);
        assert!((facts.semi_major_axis - 9.537).abs() < 1e-9);
    }

    #[test]
    fn empty_array_is_data_unavailable() {
        let err = parse_response("Pluto", "[]").unwrap_err();
        assert!(matches!(err, ProviderError::DataUnavailable(name) if name == "Pluto"));
    }

    #[test]
    fn malformed_payload_is_parse_error() {
        let err = parse_response("Mars", "{not json").unwrap_err();
        assert!(matches!(err, ProviderError::Parse { name, .. } if name == "Mars"));
    }
}
