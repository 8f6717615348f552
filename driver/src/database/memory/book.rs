use std::collections::HashMap;
use std::sync::RwLock;

use error_stack::Report;
use uuid::Uuid;

use kernel::interface::query::{BookOwnerQuery, BookQuery};
use kernel::interface::update::BookModifier;
use kernel::prelude::entity::{Book, BookId, BookStatus, UserId};
use kernel::KernelError;

use crate::error::ConvertError;

/// Volatile registry of books, keyed by id.
///
/// Every read and write goes through one lock. Callers only ever get clones back, so the
/// status of a stored book can change through [`BookModifier::swap`] alone.
pub struct InMemoryBookRepository {
    books: RwLock<HashMap<BookId, Book>>,
}

impl InMemoryBookRepository {
    /// Seeds the store. Ids in `initial` are trusted to be valid and unique.
    pub fn new(initial: impl IntoIterator<Item = Book>) -> Self {
        let books = initial
            .into_iter()
            .map(|book| (book.id().clone(), book))
            .collect();
        Self {
            books: RwLock::new(books),
        }
    }
}

impl Default for InMemoryBookRepository {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl BookQuery for InMemoryBookRepository {
    fn find_by_id(&self, id: &BookId) -> error_stack::Result<Book, KernelError> {
        let books = self.books.read().convert_error()?;
        books.get(id).cloned().ok_or_else(|| book_not_found(id))
    }

    fn find_all_available(&self) -> error_stack::Result<Vec<Book>, KernelError> {
        let books = self.books.read().convert_error()?;
        let available = books
            .values()
            .filter(|book| book.status().is_available())
            .cloned()
            .collect();
        Ok(available)
    }
}

impl BookOwnerQuery for InMemoryBookRepository {
    fn find_by_owner_id(&self, owner_id: &UserId) -> error_stack::Result<Vec<Book>, KernelError> {
        let books = self.books.read().convert_error()?;
        let owned = books
            .values()
            .filter(|book| book.owner_id() == owner_id)
            .cloned()
            .collect();
        Ok(owned)
    }
}

impl BookModifier for InMemoryBookRepository {
    fn upsert(&self, book: Book) -> error_stack::Result<Book, KernelError> {
        let mut books = self.books.write().convert_error()?;
        let mut book = book;
        if book.id().is_empty() || !books.contains_key(book.id()) {
            let id = unused_id(&books);
            book.substitute(|book| {
                *book.id = id;
                *book.status = BookStatus::Available;
            });
        }
        books.insert(book.id().clone(), book.clone());
        Ok(book)
    }

    fn swap(&self, id: &BookId, new_owner_id: &UserId) -> error_stack::Result<Book, KernelError> {
        // status check and hand-over share one write guard
        let mut books = self.books.write().convert_error()?;
        let book = books.get_mut(id).ok_or_else(|| book_not_found(id))?;
        if !book.status().is_available() {
            return Err(Report::new(KernelError::Conflict)
                .attach_printable(format!("book `{}` is not available", id.as_ref())));
        }
        book.substitute(|book| {
            *book.status = BookStatus::Swapped;
            *book.owner_id = new_owner_id.clone();
        });
        Ok(book.clone())
    }
}

fn unused_id(books: &HashMap<BookId, Book>) -> BookId {
    loop {
        let id = BookId::new(Uuid::new_v4().to_string());
        if !books.contains_key(&id) {
            break id;
        }
    }
}

fn book_not_found(id: &BookId) -> Report<KernelError> {
    Report::new(KernelError::NotFound)
        .attach_printable(format!("book `{}` does not exist", id.as_ref()))
}
