use crate::model::contributor::ContributorId;
use crate::model::pet_park::PetParkId;
use crate::model::EntityKind;
use crate::repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ParkServiceError>;

/// Coarse failure classes used by the transport status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    OwnershipMismatch,
    DuplicateKey,
    UnsupportedOperation,
    Internal,
}

/// Failure of one registry façade call.
#[derive(Debug)]
pub enum ParkServiceError {
    /// Supplied identifier does not resolve in its store.
    NotFound { kind: EntityKind, id: i64 },
    /// Park exists but belongs to a different contributor.
    OwnershipMismatch {
        park_id: Option<PetParkId>,
        expected_contributor_id: ContributorId,
        actual_contributor_id: Option<ContributorId>,
    },
    /// Operation is deliberately refused.
    UnsupportedOperation(&'static str),
    /// Store failure, passed through unchanged (duplicate keys included).
    Repo(RepoError),
}

impl ParkServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::OwnershipMismatch { .. } => ErrorKind::OwnershipMismatch,
            Self::UnsupportedOperation(_) => ErrorKind::UnsupportedOperation,
            Self::Repo(RepoError::DuplicateKey(_)) => ErrorKind::DuplicateKey,
            Self::Repo(_) => ErrorKind::Internal,
        }
    }
}

impl Display for ParkServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { kind, id } => write!(f, "{kind} with ID={id} was not found"),
            Self::OwnershipMismatch {
                park_id,
                expected_contributor_id,
                actual_contributor_id,
            } => {
                let park = park_id.map_or_else(|| "new".to_string(), |id| id.to_string());
                let actual = actual_contributor_id
                    .map_or_else(|| "none".to_string(), |id| id.to_string());
                write!(
                    f,
                    "pet park with ID={park} is not owned by contributor with ID={expected_contributor_id} (owner ID={actual})"
                )
            }
            Self::UnsupportedOperation(details) => write!(f, "unsupported operation: {details}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ParkServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ParkServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound { kind, id } => Self::NotFound { kind, id },
            other => Self::Repo(other),
        }
    }
}
