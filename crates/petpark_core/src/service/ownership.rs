//! Park ownership check.

use crate::model::contributor::ContributorId;
use crate::model::pet_park::PetPark;
use crate::service::{ParkServiceError, ServiceResult};

/// Fails unless `park` is owned by `expected_contributor_id`.
///
/// Compares identifier values only.
pub fn assert_ownership(
    park: &PetPark,
    expected_contributor_id: ContributorId,
) -> ServiceResult<()> {
    if park.contributor_id == Some(expected_contributor_id) {
        return Ok(());
    }
    Err(ParkServiceError::OwnershipMismatch {
        park_id: park.id,
        expected_contributor_id,
        actual_contributor_id: park.contributor_id,
    })
}

#[cfg(test)]
mod tests {
    use super::assert_ownership;
    use crate::model::pet_park::PetPark;
    use crate::service::{ErrorKind, ParkServiceError};

    fn park_owned_by(owner: i64) -> PetPark {
        PetPark {
            id: Some(11),
            contributor_id: Some(owner),
            ..PetPark::default()
        }
    }

    #[test]
    fn matching_owner_passes() {
        assert!(assert_ownership(&park_owned_by(5), 5).is_ok());
    }

    #[test]
    fn different_owner_reports_both_ids() {
        let err = assert_ownership(&park_owned_by(5), 2).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::OwnershipMismatch);
        assert!(matches!(
            err,
            ParkServiceError::OwnershipMismatch {
                park_id: Some(11),
                expected_contributor_id: 2,
                actual_contributor_id: Some(5),
            }
        ));
    }
}
