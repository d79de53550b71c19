use anyhow::{Context, bail};
use log::debug;
use reqwest::Url;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::models::Collection;
use crate::query::{CategoryParams, EventsParams, EventsQuery, QueryMode, build_url};
use crate::transport::{HttpTransport, Transport};
use crate::util::{endpoint, is_valid_date};

/// Client for the EONET v3 API.
///
/// Each call builds its URL, performs one GET through the transport and
/// decodes the body. Nothing is cached and nothing is retried.
#[derive(Debug, Clone)]
pub struct Client<T = HttpTransport> {
    url: Url,
    transport: T,
}

impl Client<HttpTransport> {
    /// Creates a client for the public EONET API with a 5 second timeout.
    pub fn new() -> anyhow::Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(cfg: ClientConfig) -> anyhow::Result<Self> {
        let transport = HttpTransport::new(&cfg)?;
        Self::with_transport(&cfg.url, transport)
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(url: &str, transport: T) -> anyhow::Result<Self> {
        let url = Url::parse(url).with_context(|| format!("invalid API url: {}", url))?;
        if url.cannot_be_a_base() {
            bail!("API url cannot be used as a base: {}", url);
        }
        Ok(Self { url, transport })
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Events matching `query`, as the raw JSON body.
    pub fn get_events(&self, query: &EventsQuery) -> Result<Vec<u8>> {
        let url = build_url(self.endpoint(&["events"]), query.to_pairs(), QueryMode::OmitEmpty);
        self.fetch(&url)
    }

    /// Events matching `query`, as the raw GeoJSON body.
    pub fn get_geojson_events(&self, query: &EventsQuery) -> Result<Vec<u8>> {
        let url = build_url(
            self.endpoint(&["events", "geojson"]),
            query.to_pairs(),
            QueryMode::OmitEmpty,
        );
        self.fetch(&url)
    }

    /// Same request as [`get_events`](Self::get_events), decoded.
    pub fn get_events_filtered(&self, query: &EventsQuery) -> Result<Collection> {
        let url = build_url(self.endpoint(&["events"]), query.to_pairs(), QueryMode::OmitEmpty);
        self.fetch_collection(&url)
    }

    /// The most recent events; the server only returns open ones by default.
    pub fn get_recent_open_events(&self, limit: &str) -> Result<Collection> {
        let params = EventsParams {
            limit,
            ..Default::default()
        };
        self.fetch_events(&params)
    }

    /// Events between two `YYYY-MM-DD` dates. `end` may be empty.
    pub fn get_events_by_date(&self, start: &str, end: &str) -> Result<Collection> {
        if !is_valid_date(start) {
            return Err(Error::Validation(format!(
                "the starting date is invalid: {:?}",
                start
            )));
        }
        if !end.is_empty() && !is_valid_date(end) {
            return Err(Error::Validation(format!(
                "the ending date is invalid: {:?}",
                end
            )));
        }

        let params = EventsParams {
            start,
            end,
            ..Default::default()
        };
        self.fetch_events(&params)
    }

    pub fn get_events_by_source_id(&self, source_id: &str) -> Result<Collection> {
        let params = EventsParams {
            source: source_id,
            ..Default::default()
        };
        self.fetch_events(&params)
    }

    pub fn get_sources(&self) -> Result<Collection> {
        self.fetch_collection(&self.endpoint(&["sources"]))
    }

    pub fn get_categories(&self) -> Result<Collection> {
        self.fetch_collection(&self.endpoint(&["categories"]))
    }

    pub fn get_events_by_category_id(&self, category_id: &str) -> Result<Collection> {
        let url = build_url(
            self.endpoint(&["categories", category_id]),
            CategoryParams::default().to_pairs(),
            QueryMode::Explicit,
        );
        self.fetch_collection(&url)
    }

    /// Web map layers for every category.
    pub fn get_layers(&self) -> Result<Collection> {
        self.fetch_collection(&self.endpoint(&["layers"]))
    }

    pub fn get_layers_by_category_id(&self, category_id: &str) -> Result<Collection> {
        self.fetch_collection(&self.endpoint(&["layers", category_id]))
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        endpoint(&self.url, segments)
    }

    fn fetch_events(&self, params: &EventsParams<'_>) -> Result<Collection> {
        let url = build_url(self.endpoint(&["events"]), params.to_pairs(), QueryMode::Explicit);
        self.fetch_collection(&url)
    }

    fn fetch_collection(&self, url: &Url) -> Result<Collection> {
        let body = self.fetch(url)?;
        let collection: Collection = serde_json::from_slice(&body)?;
        debug!(
            "decoded {:?}: {} event(s), {} categor(ies), {} source(s)",
            collection.title,
            collection.events().len(),
            collection.categories().len(),
            collection.sources().len()
        );
        Ok(collection)
    }

    fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        Ok(self.transport.get(url)?)
    }
}
