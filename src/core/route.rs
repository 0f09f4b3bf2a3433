use crate::core::geo::great_circle_distance;
use crate::domain::model::{Delivery, RouteLeg, RoutePlan};

/// Total distance of visiting the ranked places in the order given.
/// Zero for fewer than two stops.
pub fn route_distance(ranked: &[Delivery]) -> f64 {
    ranked.windows(2).fold(0.0, |total, pair| {
        total + great_circle_distance(pair[0].place.coordinates, pair[1].place.coordinates)
    })
}

pub fn plan_route(ranked: &[Delivery]) -> RoutePlan {
    let legs: Vec<RouteLeg> = ranked
        .windows(2)
        .map(|pair| RouteLeg {
            from: pair[0].place.id.clone(),
            to: pair[1].place.id.clone(),
            distance_km: great_circle_distance(
                pair[0].place.coordinates,
                pair[1].place.coordinates,
            ),
        })
        .collect();

    // Same left fold as route_distance so the totals match bit for bit.
    let total_distance_km = legs.iter().fold(0.0, |total, leg| total + leg.distance_km);

    RoutePlan {
        stops: ranked.iter().map(|d| d.place.clone()).collect(),
        legs,
        total_distance_km,
    }
}
