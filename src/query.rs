//! Query-string assembly for the events and categories endpoints.
//!
//! Two encodings coexist. [`EventsQuery`] (used by `get_events` and
//! `get_geojson_events`) drops every empty or zero field. The shortcut
//! operations go through [`EventsParams`] / [`CategoryParams`], which send
//! every field and encode the empty ones as `key=`. Both run through
//! [`build_url`]; only the [`QueryMode`] differs.

use reqwest::Url;

use crate::util::set_query;

/// Filters accepted by the `/events` and `/events/geojson` endpoints.
///
/// Every field is optional: an empty string or a zero count leaves the
/// parameter out and lets the server apply its own default. `end` is only
/// sent when `start` is set.
///
/// See <https://eonet.gsfc.nasa.gov/docs/v3> for the meaning of each filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventsQuery {
    pub source: String,
    pub status: String,
    pub limit: u32,
    pub days: u32,
    pub start: String,
    pub end: String,
    pub mag_id: String,
    pub mag_min: String,
    pub mag_max: String,
    pub bbox: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum QueryMode {
    /// Skip empty strings.
    OmitEmpty,
    /// Send empty strings as `key=`.
    Explicit,
}

/// Untyped events parameters used by the shortcut operations.
#[derive(Debug, Clone, Default)]
pub(crate) struct EventsParams<'a> {
    pub(crate) source: &'a str,
    pub(crate) status: &'a str,
    pub(crate) limit: &'a str,
    pub(crate) days: &'a str,
    pub(crate) start: &'a str,
    pub(crate) end: &'a str,
    pub(crate) mag_id: &'a str,
    pub(crate) mag_min: &'a str,
    pub(crate) mag_max: &'a str,
    pub(crate) bbox: &'a str,
}

/// Parameters for `/categories/{id}`; the id itself goes into the path.
#[derive(Debug, Clone, Default)]
pub(crate) struct CategoryParams<'a> {
    pub(crate) source: &'a str,
    pub(crate) status: &'a str,
    pub(crate) limit: &'a str,
    pub(crate) days: &'a str,
}

impl EventsQuery {
    fn counts(&self) -> (String, String) {
        let fmt = |n: u32| if n == 0 { String::new() } else { n.to_string() };
        (fmt(self.limit), fmt(self.days))
    }

    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let (limit, days) = self.counts();
        EventsParams {
            source: &self.source,
            status: &self.status,
            limit: &limit,
            days: &days,
            start: &self.start,
            end: &self.end,
            mag_id: &self.mag_id,
            mag_min: &self.mag_min,
            mag_max: &self.mag_max,
            bbox: &self.bbox,
        }
        .to_pairs()
    }
}

impl EventsParams<'_> {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("source", self.source),
            ("status", self.status),
            ("limit", self.limit),
            ("days", self.days),
        ];
        if !self.start.is_empty() {
            pairs.push(("start", self.start));
            pairs.push(("end", self.end));
        }
        pairs.extend([
            ("magID", self.mag_id),
            ("magMin", self.mag_min),
            ("magMax", self.mag_max),
            ("bbox", self.bbox),
        ]);
        pairs.into_iter().map(|(k, v)| (k, v.to_string())).collect()
    }
}

impl CategoryParams<'_> {
    pub(crate) fn to_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("source", self.source),
            ("status", self.status),
            ("limit", self.limit),
            ("days", self.days),
        ]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect()
    }
}

/// Sets the query of `endpoint` from `pairs`, honouring `mode`.
pub(crate) fn build_url(mut endpoint: Url, pairs: Vec<(&str, String)>, mode: QueryMode) -> Url {
    let pairs = match mode {
        QueryMode::Explicit => pairs,
        QueryMode::OmitEmpty => pairs.into_iter().filter(|(_, v)| !v.is_empty()).collect(),
    };
    set_query(&mut endpoint, pairs);
    endpoint
}
