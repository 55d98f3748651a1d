//! Projections between the arena graph and transfer shapes.
//!
//! # Invariants
//! - Projections read the graph only; they never follow an edge back to the
//!   entity they started from.
//! - Geolocations are copied by value into every view.
//! - Scalar copies leave `id`, owner and amenity edges untouched.

use crate::model::contributor::Contributor;
use crate::model::graph::{ContributorKey, ParkGraph, ParkKey};
use crate::model::pet_park::PetPark;
use crate::transfer::contributor_data::{ContributorData, ParkSummary};
use crate::transfer::pet_park_data::{ParkContributor, PetParkData};
use std::collections::BTreeSet;

/// Contributor view with park summaries ordered by park id.
pub fn to_contributor_view(graph: &ParkGraph, contributor: ContributorKey) -> ContributorData {
    let entity = graph.contributor(contributor);
    let mut pet_parks: Vec<ParkSummary> = graph
        .parks_of(contributor)
        .map(|park| to_park_summary(graph, park))
        .collect();
    pet_parks.sort_by_key(|summary| summary.pet_park_id);

    ContributorData {
        contributor_id: entity.id,
        contributor_name: entity.name.clone(),
        contributor_email: entity.email.clone(),
        pet_parks,
    }
}

/// Park view with its owner summary.
///
/// `contributor` is `None` only for a park that was never attached.
pub fn to_park_view(graph: &ParkGraph, park: ParkKey) -> PetParkData {
    let entity = graph.park(park);
    let contributor = graph.owner_of(park).map(|owner| {
        let owner = graph.contributor(owner);
        ParkContributor {
            contributor_id: owner.id,
            contributor_name: owner.name.clone(),
            contributor_email: owner.email.clone(),
        }
    });

    PetParkData {
        pet_park_id: entity.id,
        park_name: entity.name.clone(),
        directions: entity.directions.clone(),
        state_or_province: entity.state_or_province.clone(),
        country: entity.country.clone(),
        geo_location: entity.geo_location,
        contributor,
        amenities: amenity_names(graph, park),
    }
}

fn to_park_summary(graph: &ParkGraph, park: ParkKey) -> ParkSummary {
    let entity = graph.park(park);
    ParkSummary {
        pet_park_id: entity.id,
        park_name: entity.name.clone(),
        directions: entity.directions.clone(),
        state_or_province: entity.state_or_province.clone(),
        country: entity.country.clone(),
        geo_location: entity.geo_location,
        amenities: amenity_names(graph, park),
    }
}

fn amenity_names(graph: &ParkGraph, park: ParkKey) -> BTreeSet<String> {
    graph
        .amenities_of(park)
        .map(|amenity| graph.amenity(amenity).name.clone())
        .collect()
}

/// Copies inbound contributor scalars onto a resolved entity.
pub fn copy_contributor_fields(contributor: &mut Contributor, data: &ContributorData) {
    contributor.name = data.contributor_name.clone();
    contributor.email = data.contributor_email.clone();
}

/// Copies inbound park scalars onto a resolved entity.
pub fn copy_park_fields(park: &mut PetPark, data: &PetParkData) {
    park.name = data.park_name.clone();
    park.directions = data.directions.clone();
    park.state_or_province = data.state_or_province.clone();
    park.country = data.country.clone();
    park.geo_location = data.geo_location;
}

#[cfg(test)]
mod tests {
    use super::{copy_park_fields, to_contributor_view, to_park_view};
    use crate::model::amenity::Amenity;
    use crate::model::contributor::Contributor;
    use crate::model::graph::ParkGraph;
    use crate::model::pet_park::{GeoLocation, PetPark};
    use crate::transfer::pet_park_data::PetParkData;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn sample_park(id: i64, name: &str) -> PetPark {
        PetPark {
            id: Some(id),
            name: name.to_string(),
            directions: "North gate".to_string(),
            state_or_province: "ID".to_string(),
            country: "USA".to_string(),
            geo_location: Some(GeoLocation::new(
                Decimal::from_str("44.50045").unwrap(),
                Decimal::from_str("-111.25493").unwrap(),
            )),
            contributor_id: None,
        }
    }

    #[test]
    fn contributor_view_nests_parks_in_id_order_without_owner() {
        let mut graph = ParkGraph::new();
        let ann = graph.add_contributor(Contributor {
            id: Some(1),
            ..Contributor::new("Ann", "ann@x.io")
        });
        let later = graph.add_park(sample_park(8, "Hillside"));
        let earlier = graph.add_park(sample_park(3, "Riverside"));
        graph.link_owner(later, ann);
        graph.link_owner(earlier, ann);
        let wifi = graph.add_amenity(Amenity {
            id: 12,
            name: "wifi".to_string(),
        });
        graph.link_amenity(earlier, wifi);

        let view = to_contributor_view(&graph, ann);
        assert_eq!(view.contributor_id, Some(1));
        let ids: Vec<_> = view.pet_parks.iter().map(|p| p.pet_park_id).collect();
        assert_eq!(ids, vec![Some(3), Some(8)]);
        assert!(view.pet_parks[0].amenities.contains("wifi"));
        assert!(view.pet_parks[1].amenities.is_empty());
    }

    #[test]
    fn park_view_carries_contributor_summary() {
        let mut graph = ParkGraph::new();
        let ann = graph.add_contributor(Contributor {
            id: Some(1),
            ..Contributor::new("Ann", "ann@x.io")
        });
        let park = graph.add_park(sample_park(3, "Riverside"));
        graph.link_owner(park, ann);

        let view = to_park_view(&graph, park);
        let owner = view.contributor.expect("owner summary");
        assert_eq!(owner.contributor_id, Some(1));
        assert_eq!(owner.contributor_email, "ann@x.io");
        assert_eq!(view.geo_location, graph.park(park).geo_location);
    }

    #[test]
    fn copy_park_fields_keeps_identity_and_owner() {
        let mut park = sample_park(3, "Riverside");
        park.contributor_id = Some(1);
        let inbound = PetParkData {
            pet_park_id: Some(99),
            park_name: "Renamed".to_string(),
            ..PetParkData::default()
        };

        copy_park_fields(&mut park, &inbound);
        assert_eq!(park.id, Some(3));
        assert_eq!(park.contributor_id, Some(1));
        assert_eq!(park.name, "Renamed");
        assert_eq!(park.geo_location, None);
    }
}
