mod avatar_source;
mod user_service;

pub use avatar_source::*;
pub use user_service::*;
