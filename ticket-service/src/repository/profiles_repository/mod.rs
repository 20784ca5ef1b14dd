mod profiles_repository;
mod profiles_repository_impl;

pub use profiles_repository::*;
pub use profiles_repository_impl::*;
