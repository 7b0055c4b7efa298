use mongodb::bson::oid::ObjectId;
use std::fmt;

/// Document-store identifier of a user, rendered as 24 lowercase hex digits.
#[derive(Debug, Clone, Copy, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct UserId(pub ObjectId);

impl UserId {
    pub fn generate() -> Self {
        UserId(ObjectId::new())
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_hex())
    }
}

/// A registered user as returned to callers.
///
/// `image` is transient: it is fetched for every response and never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub image: String,
}
