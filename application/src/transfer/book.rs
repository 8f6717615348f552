use kernel::prelude::entity::{Book, BookStatus, DestructBook};

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct BookDto {
    pub id: String,
    pub name: String,
    pub author: String,
    pub owner_id: String,
    pub status: BookStatus,
}

impl From<Book> for BookDto {
    fn from(value: Book) -> Self {
        let DestructBook {
            id,
            name,
            author,
            owner_id,
            status,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            author: author.into(),
            owner_id: owner_id.into(),
            status,
        }
    }
}

pub struct GetBookDto {
    pub id: String,
}

/// Without an `id` (or with one the store does not know) a new book is registered and
/// `status` is ignored.
pub struct UpsertBookDto {
    pub id: Option<String>,
    pub name: String,
    pub author: String,
    pub owner_id: String,
    pub status: BookStatus,
}

pub struct SwapBookDto {
    pub book_id: String,
    pub user_id: String,
}
