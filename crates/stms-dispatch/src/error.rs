use stms_core::{FacilityId, StmsError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error(transparent)]
    Core(#[from] StmsError),

    #[error("facility {0} is not registered")]
    UnknownFacility(FacilityId),
}

pub type DispatchResult<T> = Result<T, DispatchError>;
