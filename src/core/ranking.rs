use crate::domain::model::{Behavior, Child, Delivery, Place, PlaceId};
use std::collections::HashMap;

/// Ranks every place by its number of good children, highest first.
///
/// Places without good children are kept with a count of zero. The sort is
/// stable, so places with equal counts stay in the order they were given.
/// Children keep their input order within each place, and children pointing
/// at a place that is not in `places` are ignored.
pub fn rank_places(places: &[Place], children: &[Child]) -> Vec<Delivery> {
    let mut by_place: HashMap<&PlaceId, Vec<&Child>> = HashMap::new();
    for child in children {
        match child.behavior {
            Behavior::Good => by_place.entry(&child.place_id).or_default().push(child),
            Behavior::Bad => {}
        }
    }

    let mut deliveries: Vec<Delivery> = places
        .iter()
        .map(|place| {
            let matching_children: Vec<Child> = by_place
                .get(&place.id)
                .map(|kids| kids.iter().map(|&kid| kid.clone()).collect())
                .unwrap_or_default();
            Delivery {
                place: place.clone(),
                count: matching_children.len(),
                matching_children,
            }
        })
        .collect();

    deliveries.sort_by(|a, b| b.count.cmp(&a.count));
    deliveries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{ChildId, Coordinates};

    fn place(id: &str) -> Place {
        Place {
            id: PlaceId::from(id),
            name: id.to_uppercase(),
            coordinates: Coordinates::new(0.0, 0.0),
        }
    }

    fn child(name: &str, behavior: Behavior, place_id: &str) -> Child {
        Child {
            id: ChildId(format!("id-{}", name)),
            name: name.to_string(),
            behavior,
            place_id: PlaceId::from(place_id),
        }
    }

    fn order(ranked: &[Delivery]) -> Vec<(&str, usize)> {
        ranked
            .iter()
            .map(|d| (d.place.id.as_str(), d.count))
            .collect()
    }

    #[test]
    fn test_ties_keep_input_order() {
        let places = vec![place("p1"), place("p2"), place("p3")];
        let ranked = rank_places(&places, &[]);
        assert_eq!(order(&ranked), vec![("p1", 0), ("p2", 0), ("p3", 0)]);
    }

    #[test]
    fn test_counts_only_good_children() {
        let places = vec![place("c"), place("b"), place("a")];
        let children = vec![
            child("a1", Behavior::Good, "a"),
            child("b1", Behavior::Good, "b"),
            child("a2", Behavior::Good, "a"),
            child("a3", Behavior::Bad, "a"),
            child("a4", Behavior::Good, "a"),
        ];

        let ranked = rank_places(&places, &children);

        assert_eq!(order(&ranked), vec![("a", 3), ("b", 1), ("c", 0)]);
        let names: Vec<&str> = ranked[0]
            .matching_children
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["a1", "a2", "a4"]);
        assert!(ranked[2].matching_children.is_empty());
    }

    #[test]
    fn test_mixed_ties_are_stable() {
        let places = vec![place("p1"), place("p2"), place("p3"), place("p4")];
        let children = vec![
            child("x", Behavior::Good, "p2"),
            child("y", Behavior::Good, "p4"),
            child("z", Behavior::Bad, "p1"),
        ];

        let ranked = rank_places(&places, &children);
        assert_eq!(
            order(&ranked),
            vec![("p2", 1), ("p4", 1), ("p1", 0), ("p3", 0)]
        );
    }

    #[test]
    fn test_orphan_children_are_ignored() {
        let places = vec![place("p1")];
        let children = vec![child("ghost", Behavior::Good, "missing")];
        let ranked = rank_places(&places, &children);
        assert_eq!(order(&ranked), vec![("p1", 0)]);
    }

    #[test]
    fn test_no_places_no_rows() {
        let children = vec![child("a", Behavior::Good, "p1")];
        assert!(rank_places(&[], &children).is_empty());
    }
}
