use crate::{ClubId, PostId, Time};

/// Dashboard totals for the moderation console. Aggregation happens on the
/// backend; this is only the response shape.
#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub total_users: u64,
    pub total_clubs: u64,
    pub verified_clubs: u64,
    pub total_posts: u64,
    pub total_events: u64,
    pub total_comments: u64,
    pub total_likes: u64,
    pub active_users: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct UserTrend {
    pub date: chrono::NaiveDate,
    pub count: u64,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingPost {
    pub post_id: PostId,
    pub author_name: String,
    pub content_text: String,
    pub like_count: u64,
    pub comment_count: u64,
    pub total_engagement: u64,
    pub created_at: Time,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubAnalytics {
    pub club_id: ClubId,
    pub club_name: String,
    pub member_count: u64,
    pub post_count: u64,
    pub event_count: u64,
    pub engagement_score: f64,
}
