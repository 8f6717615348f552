use crate::entity::User;
use crate::KernelError;

pub trait UserModifier: 'static + Sync + Send {
    fn upsert(&self, user: User) -> error_stack::Result<User, KernelError>;
}

pub trait DependOnUserModifier: 'static + Sync + Send {
    type UserModifier: UserModifier;
    fn user_modifier(&self) -> &Self::UserModifier;
}
