mod avatar_source_fake;
mod user_service_impl;

pub use avatar_source_fake::*;
pub use user_service_impl::*;
