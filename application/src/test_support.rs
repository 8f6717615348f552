//! Fixtures shared by the service tests.

use driver::database::{InMemoryDatabase, SeedData};
use kernel::prelude::entity::{
    Book, BookAuthor, BookId, BookName, BookStatus, User, UserAddress, UserCountry, UserId,
    UserName, UserPostCode,
};

pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Users `u1`..`u3`; `u1` owns `b1` and `b3`, `u2` owns `b2`, all available.
pub(crate) fn seeded_database() -> InMemoryDatabase {
    let book = |id: &str, name: &str, owner_id: &str| {
        Book::new(
            BookId::new(id),
            BookName::new(name),
            BookAuthor::new("Author"),
            UserId::new(owner_id),
            BookStatus::Available,
        )
    };
    let user = |id: &str, name: &str| {
        User::new(
            UserId::new(id),
            UserName::new(name),
            UserAddress::new("Miami Boulevard"),
            UserPostCode::new("1000"),
            UserCountry::new("Florida, US"),
        )
    };
    InMemoryDatabase::new(SeedData::new(
        vec![
            book("b1", "Book One", "u1"),
            book("b2", "Book Two", "u2"),
            book("b3", "Book Three", "u1"),
        ],
        vec![
            user("u1", "User One"),
            user("u2", "User Two"),
            user("u3", "User Three"),
        ],
    ))
}
