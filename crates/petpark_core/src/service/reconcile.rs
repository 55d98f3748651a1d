//! Relationship reconciliation on the arena graph.
//!
//! # Responsibility
//! - Wire contributor/park ownership and park/amenity edges before persistence.
//! - Hydrate persisted neighbourhoods so existing edges survive a save.
//!
//! # Invariants
//! - Attach operations are idempotent and never touch a store for writes.
//! - Unknown amenity names are dropped, never created.
//! - After any call here `ParkGraph::is_consistent()` holds.

use crate::model::contributor::Contributor;
use crate::model::graph::{ContributorKey, ParkGraph, ParkKey};
use crate::model::pet_park::PetPark;
use crate::repo::amenity_repo::AmenityRepository;
use crate::repo::unit_of_work::ParkStores;
use crate::repo::RepoResult;
use std::collections::BTreeSet;

/// Makes `contributor` the owner of `park` on both sides of the edge.
pub fn attach_park_to_contributor(
    graph: &mut ParkGraph,
    park: ParkKey,
    contributor: ContributorKey,
) {
    graph.link_owner(park, contributor);
}

/// Attaches every catalog amenity named in `names` to `park`.
///
/// Returns how many catalog entries matched.
pub fn attach_amenities(
    graph: &mut ParkGraph,
    park: ParkKey,
    names: &BTreeSet<String>,
    catalog: &dyn AmenityRepository,
) -> RepoResult<usize> {
    let matched = catalog.find_all_by_name_in(names)?;
    let count = matched.len();
    for amenity in matched {
        let amenity = graph.add_amenity(amenity);
        graph.link_amenity(park, amenity);
    }
    Ok(count)
}

/// Loads a persisted park and its current amenities into `graph`.
pub fn hydrate_park(
    graph: &mut ParkGraph,
    stores: &dyn ParkStores,
    park: PetPark,
) -> RepoResult<ParkKey> {
    let park_id = park.id;
    let key = graph.add_park(park);
    if let Some(park_id) = park_id {
        for amenity in stores.amenities().list_amenities_for_park(park_id)? {
            let amenity = graph.add_amenity(amenity);
            graph.link_amenity(key, amenity);
        }
    }
    Ok(key)
}

/// Loads a contributor with every owned park and their amenities.
pub fn hydrate_contributor(
    graph: &mut ParkGraph,
    stores: &dyn ParkStores,
    contributor: Contributor,
) -> RepoResult<ContributorKey> {
    let contributor_id = contributor.id;
    let key = graph.add_contributor(contributor);
    if let Some(contributor_id) = contributor_id {
        for park in stores.parks().list_parks_by_contributor(contributor_id)? {
            let park = hydrate_park(graph, stores, park)?;
            graph.link_owner(park, key);
        }
    }
    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::{attach_amenities, attach_park_to_contributor};
    use crate::model::amenity::Amenity;
    use crate::model::contributor::Contributor;
    use crate::model::graph::ParkGraph;
    use crate::model::pet_park::{PetPark, PetParkId};
    use crate::repo::amenity_repo::AmenityRepository;
    use crate::repo::RepoResult;
    use std::collections::BTreeSet;

    struct FixedCatalog(Vec<Amenity>);

    impl AmenityRepository for FixedCatalog {
        fn find_all_by_name_in(&self, names: &BTreeSet<String>) -> RepoResult<Vec<Amenity>> {
            Ok(self
                .0
                .iter()
                .filter(|amenity| names.contains(&amenity.name))
                .cloned()
                .collect())
        }

        fn list_amenities_for_park(&self, _park_id: PetParkId) -> RepoResult<Vec<Amenity>> {
            Ok(Vec::new())
        }
    }

    fn catalog() -> FixedCatalog {
        FixedCatalog(vec![
            Amenity {
                id: 1,
                name: "wifi".to_string(),
            },
            Amenity {
                id: 2,
                name: "fenced".to_string(),
            },
        ])
    }

    fn names(values: &[&str]) -> BTreeSet<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    #[test]
    fn attach_amenities_drops_unknown_names() {
        let mut graph = ParkGraph::new();
        let park = graph.add_park(PetPark::default());

        let matched = attach_amenities(
            &mut graph,
            park,
            &names(&["wifi", "nonexistent-amenity"]),
            &catalog(),
        )
        .unwrap();

        assert_eq!(matched, 1);
        let attached: Vec<_> = graph
            .amenities_of(park)
            .map(|key| graph.amenity(key).name.clone())
            .collect();
        assert_eq!(attached, vec!["wifi".to_string()]);
        assert!(graph.is_consistent());
    }

    #[test]
    fn attach_amenities_twice_keeps_single_edges() {
        let mut graph = ParkGraph::new();
        let park = graph.add_park(PetPark::default());
        let wanted = names(&["wifi", "fenced"]);

        attach_amenities(&mut graph, park, &wanted, &catalog()).unwrap();
        attach_amenities(&mut graph, park, &wanted, &catalog()).unwrap();

        assert_eq!(graph.amenities_of(park).count(), 2);
        for amenity in graph.amenities_of(park) {
            assert_eq!(graph.parks_with(amenity).collect::<Vec<_>>(), vec![park]);
        }
    }

    #[test]
    fn attach_park_to_contributor_is_idempotent() {
        let mut graph = ParkGraph::new();
        let owner = graph.add_contributor(Contributor {
            id: Some(1),
            ..Contributor::new("Ann", "ann@x.io")
        });
        let park = graph.add_park(PetPark::default());

        attach_park_to_contributor(&mut graph, park, owner);
        attach_park_to_contributor(&mut graph, park, owner);

        assert_eq!(graph.parks_of(owner).count(), 1);
        assert_eq!(graph.owner_of(park), Some(owner));
        assert_eq!(graph.park(park).contributor_id, Some(1));
    }
}
