use std::sync::Arc;

use kernel::interface::query::{DependOnBookQuery, DependOnUserQuery};
use kernel::interface::update::{DependOnBookModifier, DependOnUserModifier};
use kernel::KernelError;

use crate::database::SeedData;

pub use self::{book::*, user::*};

mod book;
mod user;

/// Both stores, wired together so the user store reads holdings from the book store.
pub struct InMemoryDatabase {
    books: Arc<InMemoryBookRepository>,
    users: InMemoryUserRepository<Arc<InMemoryBookRepository>>,
}

impl InMemoryDatabase {
    pub fn new(seed: SeedData) -> Self {
        let SeedData { books, users } = seed;
        let books = Arc::new(InMemoryBookRepository::new(books));
        let users = InMemoryUserRepository::new(users, Arc::clone(&books));
        Self { books, users }
    }

    pub fn from_env() -> error_stack::Result<Self, KernelError> {
        let seed = SeedData::from_env()?;
        Ok(Self::new(seed))
    }
}

impl Default for InMemoryDatabase {
    fn default() -> Self {
        Self::new(SeedData::default())
    }
}

impl DependOnBookQuery for InMemoryDatabase {
    type BookQuery = InMemoryBookRepository;
    fn book_query(&self) -> &Self::BookQuery {
        &self.books
    }
}

impl DependOnBookModifier for InMemoryDatabase {
    type BookModifier = InMemoryBookRepository;
    fn book_modifier(&self) -> &Self::BookModifier {
        &self.books
    }
}

impl DependOnUserQuery for InMemoryDatabase {
    type UserQuery = InMemoryUserRepository<Arc<InMemoryBookRepository>>;
    fn user_query(&self) -> &Self::UserQuery {
        &self.users
    }
}

impl DependOnUserModifier for InMemoryDatabase {
    type UserModifier = InMemoryUserRepository<Arc<InMemoryBookRepository>>;
    fn user_modifier(&self) -> &Self::UserModifier {
        &self.users
    }
}
