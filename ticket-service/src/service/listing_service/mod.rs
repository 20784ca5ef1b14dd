mod listing_service;
mod listing_service_impl;

pub use listing_service::*;
pub use listing_service_impl::*;
