//! Provider query construction
//!
//! [`GeocodeQuery`] captures one provider operation; [`QueryParams`] holds
//! the rendered parameters keyed by name and owns all URL encoding.

use domain::GeoLocation;
use url::Url;
use url::form_urlencoded;

use crate::error::PeliasError;

/// Default number of autocomplete results
pub const DEFAULT_AUTOCOMPLETE_SIZE: u32 = 10;

/// Smallest autocomplete `size` the provider accepts
pub const MIN_AUTOCOMPLETE_SIZE: u32 = 1;

/// Largest autocomplete `size` the provider accepts
pub const MAX_AUTOCOMPLETE_SIZE: u32 = 100;

/// Query-string parameters keyed by name, in insertion order
///
/// Setting a key twice replaces the earlier value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Set a parameter
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(slot) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            slot.1 = value;
        } else {
            self.pairs.push((key, value));
        }
        self
    }

    /// Set a parameter only when a value is present
    pub fn set_opt(&mut self, key: &'static str, value: Option<impl Into<String>>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value);
        }
        self
    }

    /// Set a comma-joined list parameter
    ///
    /// Entries are trimmed and blank entries dropped. If nothing remains the
    /// parameter is left out entirely.
    pub fn set_list<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
        let joined = values
            .iter()
            .map(|v| v.as_ref().trim())
            .filter(|v| !v.is_empty())
            .collect::<Vec<_>>()
            .join(",");
        if !joined.is_empty() {
            self.set(key, joined);
        }
        self
    }

    /// Look up a parameter value
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether a parameter is present
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Number of parameters
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no parameters are set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate over `(name, value)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// Render as an `application/x-www-form-urlencoded` query string
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.iter())
            .finish()
    }

    /// Replace the query of `url` with these parameters
    pub fn apply_to(&self, url: &mut Url) {
        if self.is_empty() {
            url.set_query(None);
        } else {
            url.set_query(Some(&self.encode()));
        }
    }
}

/// Optional knobs for an autocomplete request
#[derive(Debug, Clone, PartialEq)]
pub struct AutocompleteOptions {
    /// Bias results toward this point
    pub focus: Option<GeoLocation>,
    /// Restrict to these layers (blank entries ignored)
    pub layers: Vec<String>,
    /// Restrict to these sources (blank entries ignored)
    pub sources: Vec<String>,
    /// Number of results, 1 to 100
    pub size: u32,
}

impl Default for AutocompleteOptions {
    fn default() -> Self {
        Self {
            focus: None,
            layers: Vec::new(),
            sources: Vec::new(),
            size: DEFAULT_AUTOCOMPLETE_SIZE,
        }
    }
}

/// One provider operation with its arguments
#[derive(Debug, Clone, PartialEq)]
pub enum GeocodeQuery {
    /// Free-form address to coordinates (`search?text=`)
    Forward {
        /// Address text
        text: String,
    },
    /// Coordinates to place (`reverse?point.lat=&point.lon=`)
    Reverse {
        /// Point to look up
        point: GeoLocation,
    },
    /// Free-form place search, optionally focused (`search?text=`)
    Search {
        /// Query text
        text: String,
        /// Ranking bias
        focus: Option<GeoLocation>,
    },
    /// Type-ahead completion (`autocomplete?text=`)
    Autocomplete {
        /// Partial input
        text: String,
        /// Filters and size
        options: AutocompleteOptions,
    },
}

impl GeocodeQuery {
    /// Build a forward geocoding query
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the address is empty or whitespace.
    pub fn forward(address: &str) -> Result<Self, PeliasError> {
        Ok(Self::Forward {
            text: require_text(address, "Address")?,
        })
    }

    /// Build a reverse geocoding query
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the coordinates are out of range.
    pub fn reverse(latitude: f64, longitude: f64) -> Result<Self, PeliasError> {
        let point = GeoLocation::new(latitude, longitude)
            .map_err(|e| PeliasError::invalid_input(e.to_string()))?;
        Ok(Self::Reverse { point })
    }

    /// Build a search query
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the query is empty or whitespace.
    pub fn search(query: &str, focus: Option<GeoLocation>) -> Result<Self, PeliasError> {
        Ok(Self::Search {
            text: require_text(query, "Search query")?,
            focus,
        })
    }

    /// Build an autocomplete query
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the text is empty or `size` is outside 1..=100.
    pub fn autocomplete(text: &str, options: AutocompleteOptions) -> Result<Self, PeliasError> {
        let query = Self::Autocomplete {
            text: require_text(text, "Autocomplete text")?,
            options,
        };
        query.validate()?;
        Ok(query)
    }

    /// Provider path relative to the base URL
    #[must_use]
    pub const fn endpoint(&self) -> &'static str {
        match self {
            Self::Forward { .. } | Self::Search { .. } => "search",
            Self::Reverse { .. } => "reverse",
            Self::Autocomplete { .. } => "autocomplete",
        }
    }

    /// Short operation name for logs
    #[must_use]
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::Forward { .. } => "geocode",
            Self::Reverse { .. } => "reverse_geocode",
            Self::Search { .. } => "search",
            Self::Autocomplete { .. } => "autocomplete",
        }
    }

    /// Check the invariants the constructors enforce
    ///
    /// Variants can be built directly, so the client re-checks before sending.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` describing the first violated constraint.
    pub fn validate(&self) -> Result<(), PeliasError> {
        match self {
            Self::Forward { text } => {
                require_text(text, "Address")?;
            },
            Self::Reverse { point } => {
                check_point(point)?;
            },
            Self::Search { text, focus } => {
                require_text(text, "Search query")?;
                if let Some(focus) = focus {
                    check_point(focus)?;
                }
            },
            Self::Autocomplete { text, options } => {
                require_text(text, "Autocomplete text")?;
                if !(MIN_AUTOCOMPLETE_SIZE..=MAX_AUTOCOMPLETE_SIZE).contains(&options.size) {
                    return Err(PeliasError::invalid_input(format!(
                        "size must be between {MIN_AUTOCOMPLETE_SIZE} and {MAX_AUTOCOMPLETE_SIZE}, got {}",
                        options.size
                    )));
                }
                if let Some(focus) = &options.focus {
                    check_point(focus)?;
                }
            },
        }
        Ok(())
    }

    /// Render the operation-specific parameters (without the API key)
    #[must_use]
    pub fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        match self {
            Self::Forward { text } => {
                params.set("text", text.as_str());
            },
            Self::Reverse { point } => {
                params
                    .set("point.lat", point.latitude().to_string())
                    .set("point.lon", point.longitude().to_string());
            },
            Self::Search { text, focus } => {
                params.set("text", text.as_str());
                set_focus(&mut params, focus.as_ref());
            },
            Self::Autocomplete { text, options } => {
                params.set("text", text.as_str());
                set_focus(&mut params, options.focus.as_ref());
                params
                    .set_list("layers", &options.layers)
                    .set_list("sources", &options.sources)
                    .set("size", options.size.to_string());
            },
        }
        params
    }
}

fn set_focus(params: &mut QueryParams, focus: Option<&GeoLocation>) {
    if let Some(focus) = focus {
        params
            .set("focus.point.lat", focus.latitude().to_string())
            .set("focus.point.lon", focus.longitude().to_string());
    }
}

fn require_text(text: &str, what: &str) -> Result<String, PeliasError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PeliasError::invalid_input(format!("{what} must not be empty")));
    }
    Ok(trimmed.to_string())
}

fn check_point(point: &GeoLocation) -> Result<(), PeliasError> {
    GeoLocation::new(point.latitude(), point.longitude())
        .map(|_| ())
        .map_err(|e| PeliasError::invalid_input(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_params_set_replaces_existing_key() {
        let mut params = QueryParams::new();
        params.set("text", "a").set("text", "b");
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("text"), Some("b"));
    }

    #[test]
    fn test_params_set_opt() {
        let mut params = QueryParams::new();
        params.set_opt("a", Some("1")).set_opt("b", None::<String>);
        assert!(params.contains("a"));
        assert!(!params.contains("b"));
    }

    #[test]
    fn test_params_list_drops_blank_entries() {
        let mut params = QueryParams::new();
        params.set_list("layers", &strings(&["", "venue", " "]));
        assert_eq!(params.get("layers"), Some("venue"));
        assert_eq!(params.encode(), "layers=venue");
    }

    #[test]
    fn test_params_list_trims_and_joins() {
        let mut params = QueryParams::new();
        params.set_list("sources", &strings(&[" osm", "gn ", "", "wof"]));
        assert_eq!(params.get("sources"), Some("osm,gn,wof"));
    }

    #[test]
    fn test_params_list_omitted_when_all_blank() {
        let mut params = QueryParams::new();
        params.set_list("layers", &strings(&["", "  "]));
        params.set_list::<String>("sources", &[]);
        assert!(params.is_empty());
        assert_eq!(params.encode(), "");
    }

    #[test]
    fn test_params_encoding() {
        let mut params = QueryParams::new();
        params.set("text", "Café & Bar, 1st Ave");
        let encoded = params.encode();
        assert_eq!(encoded, "text=Caf%C3%A9+%26+Bar%2C+1st+Ave");
    }

    #[test]
    fn test_params_apply_to_url() {
        let mut url = Url::parse("http://localhost:4000/v1/search?stale=1").unwrap();
        let mut params = QueryParams::new();
        params.set("text", "Seattle");
        params.apply_to(&mut url);
        assert_eq!(url.as_str(), "http://localhost:4000/v1/search?text=Seattle");

        QueryParams::new().apply_to(&mut url);
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_forward_query() {
        let query = GeocodeQuery::forward("  Pike Place Market ").unwrap();
        assert_eq!(query.endpoint(), "search");
        let params = query.to_params();
        assert_eq!(params.get("text"), Some("Pike Place Market"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_forward_rejects_blank() {
        assert!(matches!(
            GeocodeQuery::forward(""),
            Err(PeliasError::InvalidInput(_))
        ));
        assert!(matches!(
            GeocodeQuery::forward(" \t\n"),
            Err(PeliasError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_reverse_query_keeps_coordinates_verbatim() {
        let query = GeocodeQuery::reverse(47.606_209_4, -122.332_071).unwrap();
        assert_eq!(query.endpoint(), "reverse");
        let params = query.to_params();
        assert_eq!(params.get("point.lat"), Some("47.6062094"));
        assert_eq!(params.get("point.lon"), Some("-122.332071"));
    }

    #[test]
    fn test_reverse_rejects_out_of_range() {
        assert!(GeocodeQuery::reverse(90.5, 0.0).is_err());
        assert!(GeocodeQuery::reverse(0.0, -180.5).is_err());
    }

    #[test]
    fn test_search_without_focus() {
        let params = GeocodeQuery::search("coffee", None).unwrap().to_params();
        assert_eq!(params.get("text"), Some("coffee"));
        assert!(!params.contains("focus.point.lat"));
        assert!(!params.contains("focus.point.lon"));
    }

    #[test]
    fn test_search_with_focus() {
        let params = GeocodeQuery::search("coffee", Some(GeoLocation::seattle()))
            .unwrap()
            .to_params();
        assert_eq!(params.get("focus.point.lat"), Some("47.6062"));
        assert_eq!(params.get("focus.point.lon"), Some("-122.3321"));
    }

    #[test]
    fn test_autocomplete_defaults() {
        let query = GeocodeQuery::autocomplete("pike", AutocompleteOptions::default()).unwrap();
        assert_eq!(query.endpoint(), "autocomplete");
        let params = query.to_params();
        assert_eq!(params.get("text"), Some("pike"));
        assert_eq!(params.get("size"), Some("10"));
        assert!(!params.contains("layers"));
        assert!(!params.contains("sources"));
    }

    #[test]
    fn test_autocomplete_filters() {
        let options = AutocompleteOptions {
            focus: Some(GeoLocation::portland()),
            layers: strings(&["", "venue", " "]),
            sources: strings(&["osm", "oa"]),
            size: 5,
        };
        let params = GeocodeQuery::autocomplete("pike", options)
            .unwrap()
            .to_params();
        assert_eq!(params.get("layers"), Some("venue"));
        assert_eq!(params.get("sources"), Some("osm,oa"));
        assert_eq!(params.get("size"), Some("5"));
        assert_eq!(params.get("focus.point.lat"), Some("45.5152"));
    }

    #[test]
    fn test_autocomplete_size_bounds() {
        for size in [1, 50, 100] {
            let options = AutocompleteOptions {
                size,
                ..Default::default()
            };
            assert!(GeocodeQuery::autocomplete("a", options).is_ok(), "size {size}");
        }
        for size in [0, 101, 1000] {
            let options = AutocompleteOptions {
                size,
                ..Default::default()
            };
            assert!(
                matches!(
                    GeocodeQuery::autocomplete("a", options),
                    Err(PeliasError::InvalidInput(_))
                ),
                "size {size}"
            );
        }
    }

    #[test]
    fn test_autocomplete_rejects_unchecked_focus() {
        let options = AutocompleteOptions {
            focus: Some(GeoLocation::new_unchecked(120.0, 0.0)),
            ..Default::default()
        };
        assert!(GeocodeQuery::autocomplete("a", options).is_err());
    }

    #[test]
    fn test_validate_catches_direct_construction() {
        let query = GeocodeQuery::Forward {
            text: "  ".to_string(),
        };
        assert!(query.validate().is_err());

        let query = GeocodeQuery::Reverse {
            point: GeoLocation::new_unchecked(0.0, 200.0),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_operation_names() {
        assert_eq!(GeocodeQuery::forward("a").unwrap().operation(), "geocode");
        assert_eq!(
            GeocodeQuery::reverse(0.0, 0.0).unwrap().operation(),
            "reverse_geocode"
        );
        assert_eq!(GeocodeQuery::search("a", None).unwrap().operation(), "search");
    }
}
