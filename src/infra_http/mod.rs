mod avatar_source_httpbin;

pub use avatar_source_httpbin::*;
