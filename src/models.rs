//! Records decoded from EONET responses.
//!
//! Every endpoint answers with the same [`Collection`] envelope; which of
//! `events`, `categories` or `sources` is present depends on the endpoint.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coordinates::Coordinates;

/// An event classification such as "Wildfires" or "Severe Storms".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layers: Option<Layers>,
}

/// `/categories` links to the layers, `/layers` inlines them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Layers {
    Link(String),
    List(Vec<Layer>),
}

/// A web map layer (WMTS/WMS) that can be overlaid on events of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layer {
    pub name: String,
    pub service_url: String,
    pub service_type_id: String,
    #[serde(default)]
    pub parameters: Vec<BTreeMap<String, Value>>,
}

/// A data provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    pub id: String,
    pub title: String,
    pub source: String,
    pub link: String,
}

/// The `/sources` envelope with its list made mandatory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourcesCollection {
    pub title: String,
    pub description: String,
    pub link: String,
    pub sources: Vec<Source>,
}

/// Reference from an event to the provider that reported it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventSource {
    pub id: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Geometry {
    #[serde(default)]
    pub magnitude_value: Option<f64>,
    #[serde(default)]
    pub magnitude_unit: Option<String>,
    #[serde(default)]
    pub date: String,
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub link: String,
    /// Closing date; `None` while the event is still open.
    #[serde(default)]
    pub closed: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub sources: Vec<EventSource>,
    #[serde(default, rename = "geometry")]
    pub geometries: Vec<Geometry>,
}

impl Event {
    pub fn is_open(&self) -> bool {
        self.closed.is_none()
    }
}

/// Response envelope shared by every JSON endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<Event>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<Category>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,
}

impl Collection {
    pub fn events(&self) -> &[Event] {
        self.events.as_deref().unwrap_or_default()
    }

    pub fn categories(&self) -> &[Category] {
        self.categories.as_deref().unwrap_or_default()
    }

    pub fn sources(&self) -> &[Source] {
        self.sources.as_deref().unwrap_or_default()
    }

    /// Re-shapes a `/sources` response; `None` if the list is absent.
    pub fn into_sources(self) -> Option<SourcesCollection> {
        let sources = self.sources?;
        Some(SourcesCollection {
            title: self.title,
            description: self.description,
            link: self.link,
            sources,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_categories_collection() {
        let raw = r#"{
            "title": "EONET Event Categories",
            "description": "List of all the available event categories in the EONET system",
            "link": "https://eonet.gsfc.nasa.gov/api/v3/categories",
            "categories": [{"id":"8","title":"Wildfires"}]
        }"#;
        let collection: Collection = serde_json::from_str(raw).unwrap();
        assert_eq!(collection.categories()[0].title, "Wildfires");
        assert_eq!(collection.categories()[0].id, "8");
        assert!(collection.events.is_none());
        assert!(collection.sources.is_none());
    }

    #[test]
    fn decodes_event_with_point_and_polygon() {
        let raw = r#"{
            "id": "EONET_5767",
            "title": "Tropical Storm Ana",
            "description": null,
            "link": "https://eonet.gsfc.nasa.gov/api/v3/events/EONET_5767",
            "closed": null,
            "categories": [{"id": "severeStorms", "title": "Severe Storms"}],
            "sources": [{"id": "JTWC", "url": "https://www.metoc.navy.mil/"}],
            "geometry": [
                {
                    "magnitudeValue": 35.00,
                    "magnitudeUnit": "kts",
                    "date": "2021-05-22T18:00:00Z",
                    "type": "Point",
                    "coordinates": [-65.3, 33.4]
                },
                {
                    "magnitudeValue": null,
                    "magnitudeUnit": null,
                    "date": "2021-05-23T00:00:00Z",
                    "type": "Polygon",
                    "coordinates": [[[-65, 33], [-64, 34], [-65, 33]]]
                }
            ]
        }"#;
        let event: Event = serde_json::from_str(raw).unwrap();
        assert!(event.is_open());
        assert_eq!(event.description, None);
        assert_eq!(event.sources[0].id, "JTWC");
        assert_eq!(event.geometries.len(), 2);

        let point = &event.geometries[0];
        assert_eq!(point.kind, "Point");
        assert_eq!(point.magnitude_value, Some(35.0));
        assert_eq!(point.coordinates.pairs(), &[[-65.3, 33.4]]);

        let polygon = &event.geometries[1];
        assert_eq!(polygon.magnitude_unit, None);
        assert_eq!(polygon.coordinates.len(), 3);
    }

    #[test]
    fn layers_accept_link_or_list() {
        let linked: Category = serde_json::from_str(
            r#"{"id":"wildfires","title":"Wildfires","layers":"https://eonet.gsfc.nasa.gov/api/v3/layers/wildfires"}"#,
        )
        .unwrap();
        assert!(matches!(linked.layers, Some(Layers::Link(ref l)) if l.ends_with("/layers/wildfires")));

        let inline: Category = serde_json::from_str(
            r#"{
                "id": "wildfires",
                "title": "Wildfires",
                "layers": [{
                    "name": "MODIS_Terra_Thermal_Anomalies_Day",
                    "serviceUrl": "https://gibs.earthdata.nasa.gov/wmts/epsg4326/best/wmts.cgi",
                    "serviceTypeId": "WMTS_1_0_0",
                    "parameters": [{"TILEMATRIXSET": "1km", "FORMAT": "image/png"}]
                }]
            }"#,
        )
        .unwrap();
        let Some(Layers::List(layers)) = inline.layers else {
            panic!("expected inline layers");
        };
        assert_eq!(layers[0].service_type_id, "WMTS_1_0_0");
        assert_eq!(layers[0].parameters[0]["FORMAT"], "image/png");
    }

    #[test]
    fn missing_envelope_strings_default_to_empty() {
        let collection: Collection = serde_json::from_str(r#"{"title":"x","description":""}"#).unwrap();
        assert_eq!(collection.title, "x");
        assert_eq!(collection.link, "");

        let collection: Collection = serde_json::from_str("{}").unwrap();
        assert_eq!(collection.title, "");
        assert!(collection.events.is_none());
    }

    #[test]
    fn missing_event_link_and_geometry_strings_default_to_empty() {
        let event: Event = serde_json::from_str(
            r#"{"id":"EONET_1","title":"Fire","geometry":[{"coordinates":[1,2]}]}"#,
        )
        .unwrap();
        assert_eq!(event.link, "");
        assert_eq!(event.geometries[0].date, "");
        assert_eq!(event.geometries[0].kind, "");
        assert_eq!(event.geometries[0].coordinates.pairs(), &[[1.0, 2.0]]);
    }

    #[test]
    fn sources_reshape() {
        let raw = r#"{
            "title": "EONET Event Sources",
            "description": "List of all the available event sources in the EONET system",
            "link": "https://eonet.gsfc.nasa.gov/api/v3/sources",
            "sources": [{"id":"InciWeb","title":"InciWeb","source":"https://inciweb.nwcg.gov/","link":"https://eonet.gsfc.nasa.gov/api/v3/events?source=InciWeb"}]
        }"#;
        let collection: Collection = serde_json::from_str(raw).unwrap();
        let sources = collection.into_sources().unwrap();
        assert_eq!(sources.sources.len(), 1);
        assert_eq!(sources.sources[0].id, "InciWeb");
    }
}
