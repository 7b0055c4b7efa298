use crate::application_port::UserError;
use anyhow::Context;
use mongodb::Client;
use mongodb::bson::doc;

pub fn store_error(err: mongodb::error::Error) -> UserError {
    UserError::Store(err.to_string())
}

/// Opens the shared client and pings the deployment so an unreachable store
/// fails at startup rather than on the first request.
pub async fn connect(url: &str) -> anyhow::Result<Client> {
    let client = Client::with_uri_str(url)
        .await
        .context("parse document store url")?;

    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await
        .context("ping document store")?;

    Ok(client)
}
