use kernel::interface::query::{DependOnUserQuery, UserQuery};
use kernel::interface::update::{DependOnUserModifier, UserModifier};
use kernel::prelude::entity::{User, UserAddress, UserCountry, UserId, UserName, UserPostCode};
use kernel::KernelError;

use crate::transfer::{GetUserDto, UpsertUserDto, UserBooksDto, UserDto};

pub trait GetUserService: 'static + Sync + Send + DependOnUserQuery {
    /// The book list is read after the user record and may lag behind a concurrent swap.
    fn get_user(&self, dto: GetUserDto) -> error_stack::Result<UserBooksDto, KernelError> {
        let GetUserDto { id } = dto;
        tracing::debug!(user_id = %id, "Fetching user with books");

        let holdings = self.user_query().find_by_id(&UserId::new(id))?;
        Ok(UserBooksDto::from(holdings))
    }
}

impl<T> GetUserService for T where T: DependOnUserQuery {}

pub trait UpsertUserService: 'static + Sync + Send + DependOnUserModifier {
    fn upsert_user(&self, dto: UpsertUserDto) -> error_stack::Result<UserDto, KernelError> {
        let UpsertUserDto {
            id,
            name,
            address,
            post_code,
            country,
        } = dto;
        let user = User::new(
            UserId::new(id.unwrap_or_default()),
            UserName::new(name),
            UserAddress::new(address),
            UserPostCode::new(post_code),
            UserCountry::new(country),
        );
        let user = UserDto::from(self.user_modifier().upsert(user)?);
        tracing::info!(user_id = %user.id, "Upserted user");

        Ok(user)
    }
}

impl<T> UpsertUserService for T where T: DependOnUserModifier {}
