use crate::entity::{Book, User, UserId};
use crate::KernelError;

pub trait UserQuery: 'static + Sync + Send {
    /// The user together with the books they currently own.
    ///
    /// The user and the book list are read one after the other, so a swap landing in
    /// between may leave the list slightly stale.
    fn find_by_id(&self, id: &UserId) -> error_stack::Result<(User, Vec<Book>), KernelError>;

    /// `Ok(())` for a known user, [`KernelError::NotFound`] otherwise.
    fn exists(&self, id: &UserId) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUserQuery: 'static + Sync + Send {
    type UserQuery: UserQuery;
    fn user_query(&self) -> &Self::UserQuery;
}
