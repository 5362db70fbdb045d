use crate::{Error, Time, UserId, STUB_ID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct ClubId(pub i64);

impl ClubId {
    pub fn stub() -> ClubId {
        ClubId(STUB_ID)
    }
}

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct MembershipId(pub i64);

impl MembershipId {
    pub fn stub() -> MembershipId {
        MembershipId(STUB_ID)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Club {
    #[serde(rename = "clubId")]
    pub id: ClubId,
    pub name: String,
    pub description: String,
    pub logo_url: Option<String>,
    pub category: Option<String>,
    /// The backend sends `null` for clubs still waiting on admin review.
    pub verified: Option<bool>,
    pub member_count: Option<u64>,
    pub created_at: Time,
    #[serde(rename = "createdByUserId")]
    pub created_by: Option<UserId>,
}

impl Club {
    pub fn is_verified(&self) -> bool {
        self.verified.unwrap_or(false)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClub {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

impl NewClub {
    // See comments on other `validate` functions throughout unisocial-api
    pub fn validate(&self) -> Result<(), Error> {
        crate::validate_string(&self.name)?;
        for s in [&self.description, &self.logo_url].into_iter().flatten() {
            crate::validate_string(s)?;
        }
        match self.name.trim().is_empty() {
            true => Err(Error::EmptyContent),
            false => Ok(()),
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MembershipStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClubRole {
    Member,
    Admin,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubMembership {
    #[serde(rename = "membershipId")]
    pub id: MembershipId,
    pub club_id: ClubId,
    pub club_name: String,
    pub club_verified: bool,
    pub user_id: UserId,
    pub user_name: String,
    pub status: MembershipStatus,
    pub role: ClubRole,
    pub joined_at: Time,
}

/// Response of the membership-status probe a club page issues on load.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MembershipState {
    pub is_member: bool,
    pub status: Option<MembershipStatus>,
    pub role: Option<ClubRole>,
    pub membership_id: Option<MembershipId>,
}
