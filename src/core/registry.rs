use crate::domain::model::{Child, Coordinates, NewChild, NewPlace, Place, PlaceId};
use crate::domain::ports::{ChildStore, PlaceStore};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{
    expect_string, parse_behavior, parse_coordinates, validate_coordinates,
    validate_create_payload,
};
use serde_json::Value;

pub const PLACE_FIELDS: [&str; 2] = ["name", "coordinates"];
pub const CHILD_FIELDS: [&str; 3] = ["name", "behavior", "placeId"];

/// Parses a place payload of the form `{"name": .., "coordinates": [lat, lon]}`.
pub fn parse_new_place(payload: &Value) -> Result<NewPlace> {
    validate_create_payload(payload, &PLACE_FIELDS)?;
    let coordinates = parse_coordinates(&payload["coordinates"])?;
    let name = expect_string("name", &payload["name"])?;

    Ok(NewPlace {
        name: name.to_string(),
        coordinates,
    })
}

/// Parses a child payload of the form `{"name": .., "behavior": .., "placeId": ..}`.
pub fn parse_new_child(payload: &Value) -> Result<NewChild> {
    validate_create_payload(payload, &CHILD_FIELDS)?;
    let behavior = parse_behavior(&payload["behavior"])?;
    let name = expect_string("name", &payload["name"])?;
    let place_id = expect_string("placeId", &payload["placeId"])?;

    Ok(NewChild {
        name: name.to_string(),
        behavior,
        place_id: PlaceId::from(place_id),
    })
}

pub async fn create_place<P: PlaceStore + ?Sized>(places: &P, payload: &Value) -> Result<Place> {
    let new_place = parse_new_place(payload)?;
    create_place_from(places, new_place).await
}

pub async fn create_place_from<P: PlaceStore + ?Sized>(
    places: &P,
    new_place: NewPlace,
) -> Result<Place> {
    let Coordinates {
        latitude,
        longitude,
    } = new_place.coordinates;
    validate_coordinates(latitude, longitude)?;

    let place = places.create_place(new_place).await?;
    tracing::info!("Created place '{}' ({})", place.name, place.id);
    Ok(place)
}

pub async fn create_child<C, P>(children: &C, places: &P, payload: &Value) -> Result<Child>
where
    C: ChildStore + ?Sized,
    P: PlaceStore + ?Sized,
{
    let new_child = parse_new_child(payload)?;
    create_child_from(children, places, new_child).await
}

/// A taken name is reported before an unknown place. The store repeats the
/// name check atomically on insert.
pub async fn create_child_from<C, P>(children: &C, places: &P, new_child: NewChild) -> Result<Child>
where
    C: ChildStore + ?Sized,
    P: PlaceStore + ?Sized,
{
    if children.find_child_by_name(&new_child.name).await?.is_some() {
        return Err(PlannerError::DuplicateName {
            entity: "child".to_string(),
            name: new_child.name,
        });
    }

    let place = places.resolve_place(&new_child.place_id).await?;
    let child = children.create_child(new_child).await?;
    tracing::info!(
        "Created {} child '{}' at '{}'",
        child.behavior,
        child.name,
        place.name
    );
    Ok(child)
}
