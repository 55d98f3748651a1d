//! Find-or-create resolution by optional identifier.
//!
//! # Invariants
//! - An absent id yields a blank, unpersisted entity.
//! - A present id must resolve; a miss is `NotFound(kind, id)`.
//! - Resolution never writes to a store.

use crate::model::contributor::Contributor;
use crate::model::pet_park::PetPark;
use crate::model::EntityKind;
use crate::repo::RepoResult;
use crate::service::{ParkServiceError, ServiceResult};

/// Entities that can be upserted by optional id.
pub trait Resolvable: Sized {
    const KIND: EntityKind;

    /// Fresh, unpersisted instance.
    fn blank() -> Self;
}

impl Resolvable for Contributor {
    const KIND: EntityKind = EntityKind::Contributor;

    fn blank() -> Self {
        Self::default()
    }
}

impl Resolvable for PetPark {
    const KIND: EntityKind = EntityKind::PetPark;

    fn blank() -> Self {
        Self::default()
    }
}

/// Returns the entity for `id`, or a blank one when `id` is `None`.
pub fn find_or_create<T, L>(id: Option<i64>, lookup: L) -> ServiceResult<T>
where
    T: Resolvable,
    L: FnOnce(i64) -> RepoResult<Option<T>>,
{
    match id {
        None => Ok(T::blank()),
        Some(id) => find_existing(id, lookup),
    }
}

/// Returns the entity for `id`, failing when the store has none.
pub fn find_existing<T, L>(id: i64, lookup: L) -> ServiceResult<T>
where
    T: Resolvable,
    L: FnOnce(i64) -> RepoResult<Option<T>>,
{
    lookup(id)?.ok_or(ParkServiceError::NotFound { kind: T::KIND, id })
}

#[cfg(test)]
mod tests {
    use super::{find_existing, find_or_create};
    use crate::model::contributor::Contributor;
    use crate::model::pet_park::PetPark;
    use crate::model::EntityKind;
    use crate::service::ParkServiceError;

    #[test]
    fn absent_id_creates_blank_without_lookup() {
        let park: PetPark = find_or_create(None, |_| panic!("lookup must not run")).unwrap();
        assert_eq!(park, PetPark::default());
    }

    #[test]
    fn present_id_returns_stored_entity() {
        let found: Contributor = find_or_create(Some(4), |id| {
            Ok(Some(Contributor {
                id: Some(id),
                ..Contributor::new("Ann", "ann@x.io")
            }))
        })
        .unwrap();
        assert_eq!(found.id, Some(4));
    }

    #[test]
    fn missing_id_is_not_found_with_kind() {
        let err = find_existing::<PetPark, _>(7, |_| Ok(None)).unwrap_err();
        assert!(matches!(
            err,
            ParkServiceError::NotFound {
                kind: EntityKind::PetPark,
                id: 7
            }
        ));
    }
}
