use thiserror::Error;

use crate::snapshot::SnapshotError;
use crate::store::PortError;

/// Crate-level convenience error.
///
/// Not a "god error": it is a thin wrapper over capability errors.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error(transparent)]
    Port(#[from] PortError),
}
