use super::util::store_error;
use crate::application_port::*;
use crate::domain_model::*;
use crate::domain_port::*;
use mongodb::bson::doc;
use mongodb::bson::oid::ObjectId;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

/// Stored shape of a user: `{_id, user}`. The avatar is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserDocument {
    #[serde(rename = "_id")]
    pub id: ObjectId,
    #[serde(rename = "user")]
    pub name: String,
}

impl From<UserDocument> for UserRecord {
    fn from(document: UserDocument) -> Self {
        UserRecord {
            user_id: UserId(document.id),
            username: document.name,
        }
    }
}

impl From<&UserRecord> for UserDocument {
    fn from(record: &UserRecord) -> Self {
        UserDocument {
            id: record.user_id.0,
            name: record.username.clone(),
        }
    }
}

pub struct MongoUserRepo {
    client: Client,
    collection: Collection<UserDocument>,
}

impl MongoUserRepo {
    pub fn new(client: Client, database: &str, collection: &str) -> Self {
        let collection = client.database(database).collection(collection);
        MongoUserRepo { client, collection }
    }
}

// Every operation runs in its own session, dropped (and so released back to
// the client) as soon as the operation returns.
#[async_trait::async_trait]
impl UserRepo for MongoUserRepo {
    async fn find_by_name(&self, username: &str) -> Result<UserRecord, UserError> {
        let mut session = self.client.start_session().await.map_err(store_error)?;

        self.collection
            .find_one(doc! { "user": username })
            .session(&mut session)
            .await
            .map_err(store_error)?
            .map(UserRecord::from)
            .ok_or(UserError::NotFound)
    }

    async fn insert(&self, record: &UserRecord) -> Result<(), UserError> {
        let mut session = self.client.start_session().await.map_err(store_error)?;

        self.collection
            .insert_one(UserDocument::from(record))
            .session(&mut session)
            .await
            .map_err(store_error)?;

        Ok(())
    }
}
