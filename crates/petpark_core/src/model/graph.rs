//! Arena graph for one unit of work.
//!
//! # Responsibility
//! - Own the contributor, park and amenity entities touched by one façade call.
//! - Keep relationship edges in explicit index maps instead of embedded references.
//!
//! # Invariants
//! - Keys are only minted by this graph and always index a live slot.
//! - A persisted entity occupies at most one slot (lookups dedupe by id).
//! - `park -> amenity` and `amenity -> park` edges are always mirrored.
//! - A park has at most one owner, and appears in exactly that owner's set.

use super::amenity::{Amenity, AmenityId};
use super::contributor::{Contributor, ContributorId};
use super::pet_park::{PetPark, PetParkId};
use std::collections::{BTreeMap, BTreeSet};

/// Slot handle for a contributor in a [`ParkGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContributorKey(usize);

/// Slot handle for a pet park in a [`ParkGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ParkKey(usize);

/// Slot handle for an amenity in a [`ParkGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AmenityKey(usize);

#[derive(Debug, Default)]
pub struct ParkGraph {
    contributors: Vec<Contributor>,
    parks: Vec<PetPark>,
    amenities: Vec<Amenity>,
    contributor_parks: BTreeMap<ContributorKey, BTreeSet<ParkKey>>,
    park_owner: BTreeMap<ParkKey, ContributorKey>,
    park_amenities: BTreeMap<ParkKey, BTreeSet<AmenityKey>>,
    amenity_parks: BTreeMap<AmenityKey, BTreeSet<ParkKey>>,
}

impl ParkGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a contributor, or returns the slot already holding the same id.
    ///
    /// When the id is already present the stored entity is kept as is.
    pub fn add_contributor(&mut self, contributor: Contributor) -> ContributorKey {
        if let Some(key) = contributor.id.and_then(|id| self.find_contributor(id)) {
            return key;
        }
        self.contributors.push(contributor);
        ContributorKey(self.contributors.len() - 1)
    }

    /// Adds a park, or returns the slot already holding the same id.
    pub fn add_park(&mut self, park: PetPark) -> ParkKey {
        if let Some(key) = park.id.and_then(|id| self.find_park(id)) {
            return key;
        }
        self.parks.push(park);
        ParkKey(self.parks.len() - 1)
    }

    /// Adds a catalog amenity, or returns the slot already holding the same id.
    pub fn add_amenity(&mut self, amenity: Amenity) -> AmenityKey {
        if let Some(key) = self.find_amenity(amenity.id) {
            return key;
        }
        self.amenities.push(amenity);
        AmenityKey(self.amenities.len() - 1)
    }

    fn find_contributor(&self, id: ContributorId) -> Option<ContributorKey> {
        self.contributors
            .iter()
            .position(|contributor| contributor.id == Some(id))
            .map(ContributorKey)
    }

    fn find_park(&self, id: PetParkId) -> Option<ParkKey> {
        self.parks
            .iter()
            .position(|park| park.id == Some(id))
            .map(ParkKey)
    }

    fn find_amenity(&self, id: AmenityId) -> Option<AmenityKey> {
        self.amenities
            .iter()
            .position(|amenity| amenity.id == id)
            .map(AmenityKey)
    }

    pub fn contributor(&self, key: ContributorKey) -> &Contributor {
        &self.contributors[key.0]
    }

    pub fn park(&self, key: ParkKey) -> &PetPark {
        &self.parks[key.0]
    }

    pub fn park_mut(&mut self, key: ParkKey) -> &mut PetPark {
        &mut self.parks[key.0]
    }

    pub fn amenity(&self, key: AmenityKey) -> &Amenity {
        &self.amenities[key.0]
    }

    /// Parks owned by `contributor`, in slot order.
    pub fn parks_of(&self, contributor: ContributorKey) -> impl Iterator<Item = ParkKey> + '_ {
        self.contributor_parks
            .get(&contributor)
            .into_iter()
            .flatten()
            .copied()
    }

    pub fn owner_of(&self, park: ParkKey) -> Option<ContributorKey> {
        self.park_owner.get(&park).copied()
    }

    pub fn amenities_of(&self, park: ParkKey) -> impl Iterator<Item = AmenityKey> + '_ {
        self.park_amenities.get(&park).into_iter().flatten().copied()
    }

    pub fn parks_with(&self, amenity: AmenityKey) -> impl Iterator<Item = ParkKey> + '_ {
        self.amenity_parks.get(&amenity).into_iter().flatten().copied()
    }

    /// Sets `park`'s owner and inserts it into the owner's park set.
    ///
    /// Moves the edge when the park was owned by another slot. Also mirrors
    /// the owner id into `PetPark::contributor_id`.
    pub fn link_owner(&mut self, park: ParkKey, contributor: ContributorKey) {
        if let Some(previous) = self.park_owner.insert(park, contributor) {
            if previous != contributor {
                if let Some(owned) = self.contributor_parks.get_mut(&previous) {
                    owned.remove(&park);
                }
            }
        }
        self.contributor_parks
            .entry(contributor)
            .or_default()
            .insert(park);
        self.parks[park.0].contributor_id = self.contributors[contributor.0].id;
    }

    /// Inserts the `park <-> amenity` edge on both sides.
    ///
    /// Returns `false` when the edge already existed.
    pub fn link_amenity(&mut self, park: ParkKey, amenity: AmenityKey) -> bool {
        let inserted = self.park_amenities.entry(park).or_default().insert(amenity);
        self.amenity_parks.entry(amenity).or_default().insert(park);
        inserted
    }

    /// Writes a store-assigned id back into a park slot.
    pub fn assign_park_id(&mut self, key: ParkKey, id: PetParkId) {
        self.parks[key.0].id = Some(id);
    }

    /// Ids of the catalog amenities attached to `park`.
    pub fn amenity_ids_of(&self, park: ParkKey) -> BTreeSet<AmenityId> {
        self.amenities_of(park)
            .map(|amenity| self.amenity(amenity).id)
            .collect()
    }

    /// Checks edge symmetry across all index maps.
    pub fn is_consistent(&self) -> bool {
        let amenity_edges_mirrored = self.park_amenities.iter().all(|(park, amenities)| {
            amenities.iter().all(|amenity| {
                self.amenity_parks
                    .get(amenity)
                    .is_some_and(|parks| parks.contains(park))
            })
        }) && self.amenity_parks.iter().all(|(amenity, parks)| {
            parks.iter().all(|park| {
                self.park_amenities
                    .get(park)
                    .is_some_and(|amenities| amenities.contains(amenity))
            })
        });

        let owner_edges_mirrored = self.park_owner.iter().all(|(park, owner)| {
            self.contributor_parks
                .get(owner)
                .is_some_and(|parks| parks.contains(park))
        }) && self.contributor_parks.iter().all(|(owner, parks)| {
            parks
                .iter()
                .all(|park| self.park_owner.get(park) == Some(owner))
        });

        amenity_edges_mirrored && owner_edges_mirrored
    }
}
