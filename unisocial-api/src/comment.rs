use crate::{Error, PostId, Time, UserId, STUB_ID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn stub() -> CommentId {
        CommentId(STUB_ID)
    }
}

/// One comment exactly as the backend returns it: flat, with threading
/// expressed through `parent_id` rather than nesting. The list endpoint
/// orders records by `created_at` ascending, newest last.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentRecord {
    #[serde(rename = "commentId")]
    pub id: CommentId,
    pub post_id: PostId,
    pub author_id: UserId,
    pub author_name: String,
    pub author_dp_url: Option<String>,
    pub content: String,
    pub created_at: Time,
    /// `None` for a comment made directly on the post.
    #[serde(rename = "parentCommentId")]
    pub parent_id: Option<CommentId>,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment {
    pub content: String,
    #[serde(rename = "parentCommentId", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<CommentId>,
}

impl NewComment {
    // See comments on other `validate` functions throughout unisocial-api
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.content)?;
        match self.content.trim().is_empty() {
            true => Err(Error::EmptyContent),
            false => Ok(()),
        }
    }
}
