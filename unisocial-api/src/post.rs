use crate::{Error, Time, UserId, STUB_ID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct PostId(pub i64);

impl PostId {
    pub fn stub() -> PostId {
        PostId(STUB_ID)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MediaType {
    Text,
    Image,
    Video,
    Reel,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AuthorType {
    User,
    Club,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(rename = "postId")]
    pub id: PostId,
    pub content_text: String,
    pub media_url: Option<String>,
    pub media_type: Option<MediaType>,
    pub author_id: UserId,
    pub author_name: String,
    pub author_dp_url: Option<String>,
    pub author_type: AuthorType,
    pub created_at: Time,
    pub like_count: u64,
    pub comment_count: u64,
    /// Absent on endpoints that don't know who is asking.
    pub liked_by_current_user: Option<bool>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPost {
    pub content_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<MediaType>,
}

impl NewPost {
    // See comments on other `validate` functions throughout unisocial-api
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.content_text)?;
        if let Some(url) = &self.media_url {
            crate::validate_string(url)?;
        }
        match self.content_text.trim().is_empty() && self.media_url.is_none() {
            true => Err(Error::EmptyContent),
            false => Ok(()),
        }
    }
}

/// Response of the like/unlike/get-likes endpoints.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LikeStatus {
    pub post_id: PostId,
    pub total_likes: u64,
    pub liked_by_current_user: bool,
}
