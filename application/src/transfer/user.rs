use kernel::prelude::entity::{Book, DestructUser, User};

use crate::transfer::BookDto;

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserDto {
    pub id: String,
    pub name: String,
    pub address: String,
    pub post_code: String,
    pub country: String,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        let DestructUser {
            id,
            name,
            address,
            post_code,
            country,
        } = value.into_destruct();
        Self {
            id: id.into(),
            name: name.into(),
            address: address.into(),
            post_code: post_code.into(),
            country: country.into(),
        }
    }
}

/// A user and the books they own, whatever their status.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct UserBooksDto {
    pub user: UserDto,
    pub books: Vec<BookDto>,
}

impl From<(User, Vec<Book>)> for UserBooksDto {
    fn from((user, books): (User, Vec<Book>)) -> Self {
        Self {
            user: UserDto::from(user),
            books: books.into_iter().map(BookDto::from).collect(),
        }
    }
}

pub struct GetUserDto {
    pub id: String,
}

pub struct UpsertUserDto {
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub post_code: String,
    pub country: String,
}
