use std::sync::Arc;

use crate::entity::{Book, BookId, UserId};
use crate::KernelError;

pub trait BookQuery: 'static + Sync + Send {
    /// Fails with [`KernelError::NotFound`] when no book carries `id`.
    fn find_by_id(&self, id: &BookId) -> error_stack::Result<Book, KernelError>;

    /// Every book currently `Available`, in no particular order.
    fn find_all_available(&self) -> error_stack::Result<Vec<Book>, KernelError>;
}

pub trait DependOnBookQuery: 'static + Sync + Send {
    type BookQuery: BookQuery;
    fn book_query(&self) -> &Self::BookQuery;
}

/// Lookup of the books held by one user, whatever their status.
///
/// This is all a user registry needs to know about books, so it is kept apart from
/// [`BookQuery`] and can be satisfied by anything that can answer it.
pub trait BookOwnerQuery: 'static + Sync + Send {
    fn find_by_owner_id(&self, owner_id: &UserId) -> error_stack::Result<Vec<Book>, KernelError>;
}

impl<T> BookOwnerQuery for Arc<T>
where
    T: BookOwnerQuery,
{
    fn find_by_owner_id(&self, owner_id: &UserId) -> error_stack::Result<Vec<Book>, KernelError> {
        (**self).find_by_owner_id(owner_id)
    }
}
