use std::collections::HashMap;
use std::sync::RwLock;

use error_stack::Report;
use uuid::Uuid;

use kernel::interface::query::{BookOwnerQuery, UserQuery};
use kernel::interface::update::UserModifier;
use kernel::prelude::entity::{Book, User, UserId};
use kernel::KernelError;

use crate::error::ConvertError;

/// Volatile registry of users.
///
/// Book holdings are not stored here; they are looked up through `B` on every read.
pub struct InMemoryUserRepository<B> {
    users: RwLock<HashMap<UserId, User>>,
    books: B,
}

impl<B: BookOwnerQuery> InMemoryUserRepository<B> {
    pub fn new(initial: impl IntoIterator<Item = User>, books: B) -> Self {
        let users = initial
            .into_iter()
            .map(|user| (user.id().clone(), user))
            .collect();
        Self {
            users: RwLock::new(users),
            books,
        }
    }
}

impl<B: BookOwnerQuery> UserQuery for InMemoryUserRepository<B> {
    fn find_by_id(&self, id: &UserId) -> error_stack::Result<(User, Vec<Book>), KernelError> {
        let user = {
            let users = self.users.read().convert_error()?;
            users.get(id).cloned().ok_or_else(|| user_not_found(id))?
        };
        let books = self.books.find_by_owner_id(id)?;
        Ok((user, books))
    }

    fn exists(&self, id: &UserId) -> error_stack::Result<(), KernelError> {
        let users = self.users.read().convert_error()?;
        if users.contains_key(id) {
            Ok(())
        } else {
            Err(user_not_found(id))
        }
    }
}

impl<B: BookOwnerQuery> UserModifier for InMemoryUserRepository<B> {
    fn upsert(&self, user: User) -> error_stack::Result<User, KernelError> {
        let mut users = self.users.write().convert_error()?;
        let mut user = user;
        if user.id().is_empty() || !users.contains_key(user.id()) {
            let id = unused_id(&users);
            user.substitute(|user| *user.id = id);
        }
        users.insert(user.id().clone(), user.clone());
        Ok(user)
    }
}

fn unused_id(users: &HashMap<UserId, User>) -> UserId {
    loop {
        let id = UserId::new(Uuid::new_v4().to_string());
        if !users.contains_key(&id) {
            break id;
        }
    }
}

fn user_not_found(id: &UserId) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("user `{}` does not exist", id.as_ref()))
}
