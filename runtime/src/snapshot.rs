//! Immutable views of store state.

use serde::ser::{Serialize, SerializeStruct, Serializer};
use std::ops::Deref;
use std::sync::Arc;

/// The state of a store at a point in time
///
/// A snapshot is cheap to clone (it shares the underlying state) and never
/// changes: later actions sent to the store produce new snapshots instead of
/// mutating this one.
#[derive(Debug)]
pub struct Snapshot<S> {
    version: u64,
    state: Arc<S>,
}

impl<S> Snapshot<S> {
    pub(crate) const fn new(version: u64, state: Arc<S>) -> Self {
        Self { version, state }
    }

    /// Number of applied actions that led to this snapshot (0 = initial state)
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the captured state
    #[must_use]
    pub fn state(&self) -> &S {
        &self.state
    }

    /// Returns true if both snapshots share the same underlying state
    #[must_use]
    pub fn shares_state_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }
}

impl<S> Clone for Snapshot<S> {
    fn clone(&self) -> Self {
        Self {
            version: self.version,
            state: Arc::clone(&self.state),
        }
    }
}

impl<S> Deref for Snapshot<S> {
    type Target = S;

    fn deref(&self) -> &S {
        &self.state
    }
}

impl<S> AsRef<S> for Snapshot<S> {
    fn as_ref(&self) -> &S {
        &self.state
    }
}

impl<S: Serialize> Serialize for Snapshot<S> {
    fn serialize<Ser>(&self, serializer: Ser) -> Result<Ser::Ok, Ser::Error>
    where
        Ser: Serializer,
    {
        let mut snapshot = serializer.serialize_struct("Snapshot", 2)?;
        snapshot.serialize_field("version", &self.version)?;
        snapshot.serialize_field("state", self.state.as_ref())?;
        snapshot.end()
    }
}
