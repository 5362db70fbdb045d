use crate::{ClubId, Error, Time, STUB_ID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct EventId(pub i64);

impl EventId {
    pub fn stub() -> EventId {
        EventId(STUB_ID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "eventId")]
    pub id: EventId,
    pub club_id: ClubId,
    pub club_name: String,
    pub title: String,
    pub description: String,
    pub banner_url: Option<String>,
    pub location: String,
    pub start_time: Time,
    pub end_time: Time,
    pub registration_link: Option<String>,
    pub registration_deadline: Option<Time>,
    /// Whether on-duty leave is granted to attendees.
    pub od_provided: bool,
    pub created_at: Time,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner_url: Option<String>,
    pub location: String,
    pub start_time: Time,
    pub end_time: Time,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_deadline: Option<Time>,
    pub od_provided: bool,
}

impl NewEvent {
    // See comments on other `validate` functions throughout unisocial-api
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.title)?;
        crate::validate_string(&self.description)?;
        crate::validate_string(&self.location)?;
        if self.title.trim().is_empty() {
            return Err(Error::EmptyContent);
        }
        match self.end_time > self.start_time {
            true => Ok(()),
            false => Err(Error::TimeRangeInverted),
        }
    }
}
