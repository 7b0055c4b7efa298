/// The single avatar every user is decorated with.
pub const AVATAR_IMAGE_URL: &str =
    "https://cdn1.iconfinder.com/data/icons/DarkGlass_Reworked/128x128/apps/user-3.png";

/// Best-effort provider of avatar image URLs.
///
/// Never fails: implementations return an empty string when no URL could be
/// obtained, and callers must treat the result as optional decoration.
#[async_trait::async_trait]
pub trait AvatarSource: Send + Sync {
    async fn fetch_image_url(&self) -> String;
}
