mod user_repo_mongo;

pub use user_repo_mongo::*;

mod util;

pub use util::connect;
