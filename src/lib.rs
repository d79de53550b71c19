//! A small blocking Rust client for NASA's Earth Observatory Natural Event
//! Tracker (EONET) v3 API.
//!
//! Each operation builds a query URL, performs one GET and decodes the JSON
//! envelope into a [`Collection`]. [`Client::get_events`] and
//! [`Client::get_geojson_events`] return the raw body instead;
//! [`Client::get_events_filtered`] sends the same query as `get_events` and
//! decodes it.
//!
//! ## Quick start
//!
//! ```no_run
//! use anyhow::Result;
//! use eonet::{Client, EventsQuery};
//!
//! fn main() -> Result<()> {
//!     let client = Client::new()?;
//!
//!     let recent = client.get_recent_open_events("5")?;
//!     for event in recent.events() {
//!         println!("{} ({})", event.title, event.id);
//!     }
//!
//!     let geojson = client.get_geojson_events(&EventsQuery {
//!         status: "closed".to_string(),
//!         limit: 10,
//!         ..Default::default()
//!     })?;
//!     println!("{} bytes of GeoJSON", geojson.len());
//!     Ok(())
//! }
//! ```
//!
//! Requests go through a [`Transport`]; [`HttpTransport`] is the default and
//! any other implementation can be passed to [`Client::with_transport`].
//! Non-2xx responses are not treated as errors: their body is decoded (or
//! returned) like any other.

#![forbid(unsafe_code)]

mod client;
mod config;
mod coordinates;
mod error;
mod models;
mod query;
mod transport;
mod util;

pub use client::Client;
pub use config::ClientConfig;
pub use coordinates::Coordinates;
pub use error::{Error, Result};
pub use models::{
    Category, Collection, Event, EventSource, Geometry, Layer, Layers, Source, SourcesCollection,
};
pub use query::EventsQuery;
pub use transport::{HttpTransport, Transport};
pub use util::is_valid_date;
