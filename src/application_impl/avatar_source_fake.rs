use crate::application_port::{AVATAR_IMAGE_URL, AvatarSource};

/// Answers with the well-known avatar URL without touching the network.
#[derive(Debug)]
pub struct FakeAvatarSource;

impl FakeAvatarSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait::async_trait]
impl AvatarSource for FakeAvatarSource {
    async fn fetch_image_url(&self) -> String {
        AVATAR_IMAGE_URL.to_string()
    }
}
