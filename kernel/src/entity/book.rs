mod author;
mod id;
mod name;
mod status;

pub use self::{author::*, id::*, name::*, status::*};
use crate::entity::UserId;
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation,
)]
pub struct Book {
    id: BookId,
    name: BookName,
    author: BookAuthor,
    owner_id: UserId,
    status: BookStatus,
}

impl Book {
    pub fn new(
        id: BookId,
        name: BookName,
        author: BookAuthor,
        owner_id: UserId,
        status: BookStatus,
    ) -> Self {
        Self {
            id,
            name,
            author,
            owner_id,
            status,
        }
    }
}
