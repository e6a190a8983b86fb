use thiserror::Error;

use crate::document::{ListenerId, MountId};

/// Errors returned by [`Document`](crate::Document) operations on stale handles.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("mount point {0} does not exist")]
    UnknownMountPoint(MountId),

    #[error("listener {0} is not registered")]
    UnknownListener(ListenerId),
}
