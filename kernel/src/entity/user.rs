mod address;
mod country;
mod id;
mod name;
mod post_code;

pub use self::{address::*, country::*, id::*, name::*, post_code::*};
use destructure::{Destructure, Mutation};
use serde::{Deserialize, Serialize};
use vodca::References;

#[derive(
    Debug, Clone, Eq, PartialEq, Serialize, Deserialize, References, Destructure, Mutation,
)]
pub struct User {
    id: UserId,
    name: UserName,
    address: UserAddress,
    post_code: UserPostCode,
    country: UserCountry,
}

impl User {
    pub fn new(
        id: UserId,
        name: UserName,
        address: UserAddress,
        post_code: UserPostCode,
        country: UserCountry,
    ) -> Self {
        Self {
            id,
            name,
            address,
            post_code,
            country,
        }
    }
}
