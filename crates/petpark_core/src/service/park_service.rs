//! Registry façade over contributors, parks and the amenity catalog.
//!
//! # Responsibility
//! - Expose the contributor and park use-cases to transport callers.
//! - Run each call as exactly one unit of work.
//!
//! # Invariants
//! - Any failure aborts the whole call with no partial writes.
//! - An existing park keeps its owner: saving it under another contributor
//!   is an ownership mismatch.
//! - Bulk contributor deletion is always refused.

use crate::model::contributor::ContributorId;
use crate::model::graph::ParkGraph;
use crate::model::pet_park::PetParkId;
use crate::repo::unit_of_work::{Access, UnitOfWork};
use crate::service::ownership::assert_ownership;
use crate::service::reconcile::{
    attach_amenities, attach_park_to_contributor, hydrate_contributor, hydrate_park,
};
use crate::service::resolve::{find_existing, find_or_create};
use crate::service::{ParkServiceError, ServiceResult};
use crate::transfer::contributor_data::ContributorData;
use crate::transfer::mapper::{
    copy_contributor_fields, copy_park_fields, to_contributor_view, to_park_view,
};
use crate::transfer::pet_park_data::PetParkData;
use log::{info, warn};

/// Façade that reconciles transfer shapes with the persisted entity graph.
pub struct ParkService<U: UnitOfWork> {
    uow: U,
}

impl<U: UnitOfWork> ParkService<U> {
    pub fn new(uow: U) -> Self {
        Self { uow }
    }

    /// Creates a contributor, or updates the one named by `data.contributor_id`.
    ///
    /// # Contract
    /// - Only name and email are copied; the park set is left as stored.
    /// - The returned view carries the assigned id and current parks.
    pub fn save_contributor(&mut self, data: ContributorData) -> ServiceResult<ContributorData> {
        self.uow.run(Access::ReadWrite, |stores| -> ServiceResult<ContributorData> {
            let mut contributor =
                find_or_create(data.contributor_id, |id| stores.contributors().get_contributor(id))?;
            let created = !contributor.is_persisted();
            copy_contributor_fields(&mut contributor, &data);

            let contributor_id = stores.contributors().save_contributor(&contributor)?;
            contributor.id = Some(contributor_id);

            let mut graph = ParkGraph::new();
            let key = hydrate_contributor(&mut graph, stores, contributor)?;
            info!(
                "event=contributor_save module=service status=ok contributor_id={contributor_id} created={created}"
            );
            Ok(to_contributor_view(&graph, key))
        })
    }

    pub fn retrieve_contributor(
        &mut self,
        contributor_id: ContributorId,
    ) -> ServiceResult<ContributorData> {
        self.uow.run(Access::ReadOnly, |stores| -> ServiceResult<ContributorData> {
            let contributor =
                find_existing(contributor_id, |id| stores.contributors().get_contributor(id))?;
            let mut graph = ParkGraph::new();
            let key = hydrate_contributor(&mut graph, stores, contributor)?;
            Ok(to_contributor_view(&graph, key))
        })
    }

    /// Lists every contributor with its parks, ordered by contributor id.
    pub fn retrieve_all_contributors(&mut self) -> ServiceResult<Vec<ContributorData>> {
        self.uow.run(Access::ReadOnly, |stores| -> ServiceResult<Vec<ContributorData>> {
            let mut graph = ParkGraph::new();
            let mut keys = Vec::new();
            for contributor in stores.contributors().list_contributors()? {
                keys.push(hydrate_contributor(&mut graph, stores, contributor)?);
            }
            Ok(keys
                .into_iter()
                .map(|key| to_contributor_view(&graph, key))
                .collect())
        })
    }

    /// Deletes a contributor; the store cascades to every owned park.
    pub fn delete_contributor(&mut self, contributor_id: ContributorId) -> ServiceResult<()> {
        self.uow.run(Access::ReadWrite, |stores| -> ServiceResult<()> {
            find_existing(contributor_id, |id| stores.contributors().get_contributor(id))?;
            let cascaded = stores
                .parks()
                .list_parks_by_contributor(contributor_id)?
                .len();
            stores.contributors().delete_contributor(contributor_id)?;
            info!(
                "event=contributor_delete module=service status=ok contributor_id={contributor_id} cascaded_parks={cascaded}"
            );
            Ok(())
        })
    }

    /// Always refused: blanket deletion is irreversible.
    pub fn delete_all_contributors(&mut self) -> ServiceResult<()> {
        warn!("event=contributor_delete_all module=service status=rejected");
        Err(ParkServiceError::UnsupportedOperation(
            "deleting all contributors is not allowed",
        ))
    }

    /// Creates a park under `contributor_id`, or updates the one named by
    /// `data.pet_park_id`.
    ///
    /// # Contract
    /// - The contributor must exist; a supplied park id must exist and be
    ///   owned by that contributor.
    /// - Amenity names are resolved against the catalog; unknown names are
    ///   dropped. Previously attached amenities are kept.
    pub fn save_park(
        &mut self,
        contributor_id: ContributorId,
        data: PetParkData,
    ) -> ServiceResult<PetParkData> {
        self.uow.run(Access::ReadWrite, |stores| -> ServiceResult<PetParkData> {
            let mut graph = ParkGraph::new();

            let contributor =
                find_existing(contributor_id, |id| stores.contributors().get_contributor(id))?;
            let contributor_key = graph.add_contributor(contributor);

            let park = find_or_create(data.pet_park_id, |id| stores.parks().get_park(id))?;
            if park.is_persisted() {
                assert_ownership(&park, contributor_id)?;
            }
            let park_key = hydrate_park(&mut graph, stores, park)?;

            copy_park_fields(graph.park_mut(park_key), &data);
            attach_park_to_contributor(&mut graph, park_key, contributor_key);
            let matched =
                attach_amenities(&mut graph, park_key, &data.amenities, stores.amenities())?;
            debug_assert!(graph.is_consistent());

            let park_id = stores
                .parks()
                .save_park(graph.park(park_key), &graph.amenity_ids_of(park_key))?;
            graph.assign_park_id(park_key, park_id);

            info!(
                "event=park_save module=service status=ok contributor_id={contributor_id} park_id={park_id} requested_amenities={} matched_amenities={matched}",
                data.amenities.len()
            );
            Ok(to_park_view(&graph, park_key))
        })
    }

    /// Returns one park after checking it belongs to `contributor_id`.
    pub fn retrieve_park(
        &mut self,
        contributor_id: ContributorId,
        park_id: PetParkId,
    ) -> ServiceResult<PetParkData> {
        self.uow.run(Access::ReadOnly, |stores| -> ServiceResult<PetParkData> {
            let contributor =
                find_existing(contributor_id, |id| stores.contributors().get_contributor(id))?;
            let park = find_existing(park_id, |id| stores.parks().get_park(id))?;
            assert_ownership(&park, contributor_id)?;

            let mut graph = ParkGraph::new();
            let contributor_key = graph.add_contributor(contributor);
            let park_key = hydrate_park(&mut graph, stores, park)?;
            attach_park_to_contributor(&mut graph, park_key, contributor_key);

            info!(
                "event=park_retrieve module=service status=ok contributor_id={contributor_id} park_id={park_id}"
            );
            Ok(to_park_view(&graph, park_key))
        })
    }
}
