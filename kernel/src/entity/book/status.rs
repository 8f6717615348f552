use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Availability of a book for swapping.
///
/// The only transition is `Available -> Swapped`; nothing brings a book back.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BookStatus {
    #[default]
    Available,
    Swapped,
}

impl BookStatus {
    pub fn is_available(&self) -> bool {
        matches!(self, BookStatus::Available)
    }
}

impl Display for BookStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            BookStatus::Available => write!(f, "Available"),
            BookStatus::Swapped => write!(f, "Swapped"),
        }
    }
}
