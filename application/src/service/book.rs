use error_stack::ResultExt;

use kernel::interface::query::{BookQuery, DependOnBookQuery, DependOnUserQuery, UserQuery};
use kernel::interface::update::{BookModifier, DependOnBookModifier};
use kernel::prelude::entity::{Book, BookAuthor, BookId, BookName, UserId};
use kernel::KernelError;

use crate::transfer::{BookDto, GetBookDto, SwapBookDto, UpsertBookDto, UserBooksDto};

pub trait GetBookService: 'static + Sync + Send + DependOnBookQuery {
    fn get_book(&self, dto: GetBookDto) -> error_stack::Result<BookDto, KernelError> {
        let GetBookDto { id } = dto;
        tracing::debug!(book_id = %id, "Fetching book");

        let book = self.book_query().find_by_id(&BookId::new(id))?;
        Ok(BookDto::from(book))
    }
}

impl<T> GetBookService for T where T: DependOnBookQuery {}

pub trait ListAvailableBookService: 'static + Sync + Send + DependOnBookQuery {
    fn list_available_books(&self) -> error_stack::Result<Vec<BookDto>, KernelError> {
        let books = self.book_query().find_all_available()?;
        tracing::debug!(count = books.len(), "Listed available books");

        Ok(books.into_iter().map(BookDto::from).collect())
    }
}

impl<T> ListAvailableBookService for T where T: DependOnBookQuery {}

pub trait UpsertBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnUserQuery
{
    /// The declared owner has to be a registered user; the book store itself does not check.
    fn upsert_book(&self, dto: UpsertBookDto) -> error_stack::Result<BookDto, KernelError> {
        let UpsertBookDto {
            id,
            name,
            author,
            owner_id,
            status,
        } = dto;
        let owner_id = UserId::new(owner_id);
        self.user_query()
            .exists(&owner_id)
            .attach_printable("Book owner must be a registered user")?;

        let book = Book::new(
            BookId::new(id.unwrap_or_default()),
            BookName::new(name),
            BookAuthor::new(author),
            owner_id,
            status,
        );
        let book = BookDto::from(self.book_modifier().upsert(book)?);
        tracing::info!(book_id = %book.id, owner_id = %book.owner_id, "Upserted book");

        Ok(book)
    }
}

impl<T> UpsertBookService for T where T: DependOnBookModifier + DependOnUserQuery {}

pub trait SwapBookService:
    'static + Sync + Send + DependOnBookModifier + DependOnUserQuery
{
    /// Swaps the book over to the requesting user and returns that user's holdings.
    fn swap_book(&self, dto: SwapBookDto) -> error_stack::Result<UserBooksDto, KernelError> {
        let SwapBookDto { book_id, user_id } = dto;
        let requester = UserId::new(user_id.as_str());
        self.user_query()
            .exists(&requester)
            .attach_printable("Swap requester must be a registered user")?;

        self.book_modifier()
            .swap(&BookId::new(book_id.as_str()), &requester)
            .map_err(|report| {
                tracing::warn!(
                    book_id = %book_id,
                    user_id = %user_id,
                    reason = %report.current_context(),
                    "Refused book swap"
                );
                report
            })?;
        tracing::info!(book_id = %book_id, user_id = %user_id, "Swapped book");

        let holdings = self.user_query().find_by_id(&requester)?;
        Ok(UserBooksDto::from(holdings))
    }
}

impl<T> SwapBookService for T where T: DependOnBookModifier + DependOnUserQuery {}
