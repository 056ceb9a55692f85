use thiserror::Error;

use bs_core::BikeType;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StationError {
    #[error("bike type {} out of range (station has {types} types)", kind.0)]
    TypeOutOfRange { kind: BikeType, types: usize },
}

pub type StationResult<T> = Result<T, StationError>;
