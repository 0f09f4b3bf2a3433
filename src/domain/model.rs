use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::PlannerError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlaceId(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChildId(pub String);

impl PlaceId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ChildId {
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for ChildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PlaceId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behavior {
    Good,
    Bad,
}

impl Behavior {
    pub const fn as_str(self) -> &'static str {
        match self {
            Behavior::Good => "good",
            Behavior::Bad => "bad",
        }
    }
}

impl fmt::Display for Behavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Only the two exact lowercase tokens parse.
impl FromStr for Behavior {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "good" => Ok(Behavior::Good),
            "bad" => Ok(Behavior::Bad),
            other => Err(PlannerError::InvalidEnum {
                field: "behavior".to_string(),
                value: other.to_string(),
            }),
        }
    }
}

/// Latitude/longitude in degrees. Stored on the wire as `[lat, lon]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([latitude, longitude]: [f64; 2]) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.latitude, c.longitude]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub id: PlaceId,
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    pub id: ChildId,
    pub name: String,
    pub behavior: Behavior,
    pub place_id: PlaceId,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPlace {
    pub name: String,
    pub coordinates: Coordinates,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChild {
    pub name: String,
    pub behavior: Behavior,
    pub place_id: PlaceId,
}

/// One row of the delivery ranking: a place and its good children.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub place: Place,
    pub matching_children: Vec<Child>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteLeg {
    pub from: PlaceId,
    pub to: PlaceId,
    pub distance_km: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoutePlan {
    pub stops: Vec<Place>,
    pub legs: Vec<RouteLeg>,
    pub total_distance_km: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_behavior_tokens() {
        assert_eq!("good".parse::<Behavior>().unwrap(), Behavior::Good);
        assert_eq!("bad".parse::<Behavior>().unwrap(), Behavior::Bad);
        assert!("Good".parse::<Behavior>().is_err());
        assert!(" bad".parse::<Behavior>().is_err());
        assert!("0".parse::<Behavior>().is_err());
    }

    #[test]
    fn test_place_wire_layout() {
        let place = Place {
            id: PlaceId::from("p1"),
            name: "Rovaniemi".to_string(),
            coordinates: Coordinates::new(66.5, 25.7),
        };
        let json = serde_json::to_value(&place).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": "p1", "name": "Rovaniemi", "coordinates": [66.5, 25.7]})
        );
    }

    #[test]
    fn test_child_wire_layout() {
        let child: Child = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "name": "Ana",
            "behavior": "good",
            "placeId": "p1"
        }))
        .unwrap();
        assert_eq!(child.behavior, Behavior::Good);
        assert_eq!(child.place_id, PlaceId::from("p1"));
    }
}
