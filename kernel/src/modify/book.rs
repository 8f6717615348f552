use crate::entity::{Book, BookId, UserId};
use crate::KernelError;

pub trait BookModifier: 'static + Sync + Send {
    /// Replaces the stored book sharing `book`'s id. A book whose id is empty or unknown
    /// is registered under a freshly generated id with status `Available`.
    ///
    /// A known book is replaced as a whole record, `status` included, so an upsert can make
    /// a `Swapped` book `Available` again.
    fn upsert(&self, book: Book) -> error_stack::Result<Book, KernelError>;

    /// Hands an `Available` book over to `new_owner_id` and marks it `Swapped`.
    ///
    /// Fails with [`KernelError::NotFound`] for an unknown book and with
    /// [`KernelError::Conflict`] once the book has been swapped. Of several racing calls
    /// for the same book at most one succeeds.
    fn swap(&self, id: &BookId, new_owner_id: &UserId) -> error_stack::Result<Book, KernelError>;
}

pub trait DependOnBookModifier: 'static + Sync + Send {
    type BookModifier: BookModifier;
    fn book_modifier(&self) -> &Self::BookModifier;
}
