use crate::{Club, Error, Time, User, UserId, STUB_ID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct RoomId(pub i64);

impl RoomId {
    pub fn stub() -> RoomId {
        RoomId(STUB_ID)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct MessageId(pub i64);

impl MessageId {
    pub fn stub() -> MessageId {
        MessageId(STUB_ID)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoomType {
    Private,
    Group,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRoom {
    #[serde(rename = "chatRoomId")]
    pub id: RoomId,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    /// Set for group rooms backing a club chat.
    pub club: Option<Club>,
    pub created_at: Time,
    pub last_message: Option<Message>,
    pub participants: Option<Vec<User>>,
}

/// Message lists arrive ordered by `sent_at` ascending; refresh is
/// poll-based, so consumers replace the whole list on every fetch.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "messageId")]
    pub id: MessageId,
    #[serde(rename = "chatRoomId")]
    pub room_id: RoomId,
    pub sender_id: UserId,
    pub sender_name: String,
    pub content: String,
    #[serde(rename = "timestamp")]
    pub sent_at: Time,
    pub read: bool,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct NewMessage {
    pub content: String,
}

impl NewMessage {
    // See comments on other `validate` functions throughout unisocial-api
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.content)?;
        match self.content.trim().is_empty() {
            true => Err(Error::EmptyContent),
            false => Ok(()),
        }
    }
}
