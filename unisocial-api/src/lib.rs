mod admin;
mod auth;
mod chat;
mod club;
mod comment;
mod error;
mod event;
mod post;
mod user;

pub use admin::{Analytics, ClubAnalytics, TrendingPost, UserTrend};
pub use auth::{AuthToken, Credentials, NewAccount, Session};
pub use chat::{ChatRoom, Message, MessageId, NewMessage, RoomId, RoomType};
pub use club::{
    Club, ClubId, ClubMembership, ClubRole, MembershipId, MembershipState, MembershipStatus,
    NewClub,
};
pub use comment::{CommentId, CommentRecord, NewComment};
pub use error::Error;
pub use event::{Event, EventId, NewEvent};
pub use post::{AuthorType, LikeStatus, MediaType, NewPost, Post, PostId};
pub use user::{ProfilePatch, Role, User, UserId};

pub type Time = chrono::DateTime<chrono::Utc>;

/// Identifier used by the various `stub()` constructors; the backend only
/// ever hands out positive ids.
pub const STUB_ID: i64 = -1;

// See comments on the `validate` functions throughout unisocial-api: the
// backend stores all strings in text columns that reject embedded NUL bytes,
// so we refuse them before they ever go on the wire.
pub fn validate_string(s: &str) -> Result<(), Error> {
    match s.contains('\0') {
        true => Err(Error::NullByteInString(s.to_string())),
        false => Ok(()),
    }
}
