use serde::de::{Deserialize, Deserializer, Error as _};
use serde::Serialize;
use serde_json::Value;

/// Geometry coordinates as `[longitude, latitude]` pairs.
///
/// EONET sends a bare pair for points and nested rings for polygons. Both
/// decode into the same flat list: a point becomes a one-element list and
/// polygon rings are concatenated in order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Coordinates(pub Vec<[f64; 2]>);

impl Coordinates {
    pub fn pairs(&self) -> &[[f64; 2]] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for Coordinates {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let mut pairs = Vec::new();
        match &value {
            Value::Null => {}
            Value::Array(items) => collect_pairs(items, &mut pairs),
            other => {
                return Err(D::Error::custom(format!(
                    "expected coordinate array, found {}",
                    other
                )));
            }
        }
        Ok(Coordinates(pairs))
    }
}

fn collect_pairs(items: &[Value], out: &mut Vec<[f64; 2]>) {
    match items.first() {
        None => {}
        Some(Value::Array(_)) => {
            for item in items {
                if let Value::Array(inner) = item {
                    collect_pairs(inner, out);
                }
            }
        }
        Some(_) => out.push([number_at(items, 0), number_at(items, 1)]),
    }
}

// Anything that is not a number reads as 0.0.
fn number_at(items: &[Value], idx: usize) -> f64 {
    match items.get(idx) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

impl IntoIterator for Coordinates {
    type Item = [f64; 2];
    type IntoIter = std::vec::IntoIter<[f64; 2]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
