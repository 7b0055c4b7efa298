use crate::application_impl::*;
use crate::application_port::*;
use crate::domain_port::*;
use crate::infra_http::*;
use crate::infra_memory::*;
use crate::infra_mongo::*;
use crate::logger::*;
use crate::settings::Settings;
use anyhow::Context;
use std::sync::Arc;

const MONGO_DB_URL: &str = "MONGO_DB_URL";

/// Everything the HTTP layer needs, built once at startup.
pub struct Server {
    pub user_service: Arc<dyn UserService>,
    mongo_client: Option<mongodb::Client>,
}

impl Server {
    pub async fn try_new(settings: &Settings) -> anyhow::Result<Self> {
        let mut mongo_client = None;

        let user_repo: Arc<dyn UserRepo> = match settings.store.backend.as_str() {
            "fake" => Arc::new(InMemoryUserRepo::new()),
            "real" => {
                let url = std::env::var(MONGO_DB_URL)
                    .with_context(|| format!("{MONGO_DB_URL} must be set"))?;
                let client = connect(&url).await?;
                info!(
                    database = %settings.store.database,
                    collection = %settings.store.collection,
                    "document store connected"
                );
                mongo_client = Some(client.clone());
                Arc::new(MongoUserRepo::new(
                    client,
                    &settings.store.database,
                    &settings.store.collection,
                ))
            }
            other => return Err(anyhow::anyhow!("Unknown store backend: {}", other)),
        };

        let avatar_source: Arc<dyn AvatarSource> = match settings.avatar.backend.as_str() {
            "fake" => Arc::new(FakeAvatarSource::new()),
            "real" => Arc::new(HttpBinAvatarSource::new(ECHO_ENDPOINT, AVATAR_IMAGE_URL)),
            other => return Err(anyhow::anyhow!("Unknown avatar backend: {}", other)),
        };

        let user_service: Arc<dyn UserService> =
            Arc::new(RealUserService::new(user_repo, avatar_source));

        info!("server started");

        Ok(Self {
            user_service,
            mongo_client,
        })
    }

    pub fn with_user_service(user_service: Arc<dyn UserService>) -> Self {
        Self {
            user_service,
            mongo_client: None,
        }
    }

    pub async fn shutdown(&self) {
        info!("server shutting down...");

        if let Some(client) = &self.mongo_client {
            client.clone().shutdown().await;
            info!("document store client closed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::*;

    fn settings(store: &str, avatar: &str) -> Settings {
        Settings {
            avatar: Avatar {
                backend: avatar.to_string(),
            },
            http: Http {
                address: "127.0.0.1:0".to_string(),
            },
            log: Log {
                filter: "info".to_string(),
            },
            store: Store {
                backend: store.to_string(),
                database: "test".to_string(),
                collection: "users".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn builds_with_fake_backends() {
        let server = Server::try_new(&settings("fake", "fake")).await.unwrap();

        let registration = server.user_service.register("alice").await.unwrap();

        assert!(registration.created);
        assert_eq!(registration.user.image, AVATAR_IMAGE_URL);
        server.shutdown().await;
    }

    #[tokio::test]
    async fn rejects_unknown_backends() {
        let err = Server::try_new(&settings("sqlite", "fake")).await.err().unwrap();
        assert!(err.to_string().contains("Unknown store backend"));

        let err = Server::try_new(&settings("fake", "gravatar")).await.err().unwrap();
        assert!(err.to_string().contains("Unknown avatar backend"));
    }
}
