pub mod users_model;
pub mod users_service;
pub mod users_traits;

#[cfg(test)]
mod users_service_tests;

pub use users_model::{NewUser, NewUserRecord, User};
pub use users_service::UserService;
pub use users_traits::{PasswordHasherTrait, UserRepositoryTrait, UserServiceTrait};
