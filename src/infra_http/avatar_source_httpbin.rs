use crate::application_port::AvatarSource;
use crate::logger::*;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

/// Echo service that returns the posted JSON nested under `json`.
pub const ECHO_ENDPOINT: &str = "http://httpbin.org/anything";

#[derive(Debug, Serialize)]
struct EchoRequest<'a> {
    url: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct EchoResponse {
    #[serde(default)]
    json: EchoedImage,
}

#[derive(Debug, Default, Deserialize)]
struct EchoedImage {
    #[serde(default)]
    url: String,
}

/// Obtains the avatar URL by bouncing it off an echo endpoint.
///
/// No timeout or retry is configured; a slow endpoint holds the request that
/// triggered the call.
pub struct HttpBinAvatarSource {
    client: reqwest::Client,
    endpoint: String,
    image_url: String,
}

impl HttpBinAvatarSource {
    pub fn new(endpoint: impl Into<String>, image_url: impl Into<String>) -> Self {
        HttpBinAvatarSource {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            image_url: image_url.into(),
        }
    }

    async fn round_trip(&self) -> anyhow::Result<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&EchoRequest {
                url: &self.image_url,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.bytes().await?;
        if status != StatusCode::OK {
            return Err(anyhow::anyhow!("echo endpoint answered {}", status));
        }

        let echoed: EchoResponse = serde_json::from_slice(&body)?;
        Ok(echoed.json.url)
    }
}

#[async_trait::async_trait]
impl AvatarSource for HttpBinAvatarSource {
    async fn fetch_image_url(&self) -> String {
        match self.round_trip().await {
            Ok(url) => url,
            Err(e) => {
                warn!(endpoint = %self.endpoint, "avatar lookup failed: {:#}", e);
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application_port::AVATAR_IMAGE_URL;
    use std::net::SocketAddr;
    use warp::Filter;
    use warp::filters::BoxedFilter;
    use warp::http::StatusCode as WarpStatus;

    fn spawn<R: warp::Reply + 'static>(filter: BoxedFilter<(R,)>) -> SocketAddr {
        let (addr, server) = warp::serve(filter).bind_ephemeral(([127, 0, 0, 1], 0));
        tokio::spawn(server);
        addr
    }

    fn spawn_echo() -> SocketAddr {
        spawn(
            warp::post()
                .and(warp::path("anything"))
                .and(warp::body::json())
                .map(|body: serde_json::Value| {
                    warp::reply::json(&serde_json::json!({ "json": body, "method": "POST" }))
                })
                .boxed(),
        )
    }

    #[tokio::test]
    async fn extracts_echoed_url() {
        let addr = spawn_echo();
        let source = HttpBinAvatarSource::new(format!("http://{addr}/anything"), AVATAR_IMAGE_URL);

        assert_eq!(source.fetch_image_url().await, AVATAR_IMAGE_URL);
    }

    #[tokio::test]
    async fn non_200_status_yields_empty_url() {
        let addr = spawn(warp::any().map(|| {
            warp::reply::with_status(
                warp::reply::json(&serde_json::json!({ "json": { "url": "ignored" } })),
                WarpStatus::CREATED,
            )
        })
        .boxed());
        let source = HttpBinAvatarSource::new(format!("http://{addr}/"), AVATAR_IMAGE_URL);

        assert_eq!(source.fetch_image_url().await, "");
    }

    #[tokio::test]
    async fn malformed_body_yields_empty_url() {
        let addr = spawn(warp::any().map(|| "<html>gateway</html>").boxed());
        let source = HttpBinAvatarSource::new(format!("http://{addr}/"), AVATAR_IMAGE_URL);

        assert_eq!(source.fetch_image_url().await, "");
    }

    #[tokio::test]
    async fn missing_json_key_yields_empty_url() {
        let addr = spawn(warp::any().map(|| warp::reply::json(&serde_json::json!({}))).boxed());
        let source = HttpBinAvatarSource::new(format!("http://{addr}/"), AVATAR_IMAGE_URL);

        assert_eq!(source.fetch_image_url().await, "");
    }

    #[tokio::test]
    async fn unreachable_endpoint_yields_empty_url() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let source = HttpBinAvatarSource::new(format!("http://{addr}/"), AVATAR_IMAGE_URL);

        assert_eq!(source.fetch_image_url().await, "");
    }
}
