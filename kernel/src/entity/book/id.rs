use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

/// Opaque book identifier. An empty id marks a book the store has not registered yet.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Default, Serialize, Deserialize, Fromln, AsRefln)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
