use crate::{Time, STUB_ID};

#[derive(
    Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize,
)]
pub struct UserId(pub i64);

impl UserId {
    pub fn stub() -> UserId {
        UserId(STUB_ID)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    User,
    Admin,
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "userId")]
    pub id: UserId,
    pub reg_no: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub bio: Option<String>,
    pub dp_url: Option<String>,
    pub created_at: Time,
}

/// Partial profile update; absent fields are left untouched by the backend.
#[derive(Clone, Debug, Default, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dp_url: Option<String>,
}

impl ProfilePatch {
    // See comments on other `validate` functions throughout unisocial-api
    pub fn validate(&self) -> Result<(), crate::Error> {
        for s in [&self.name, &self.bio, &self.dp_url].into_iter().flatten() {
            crate::validate_string(s)?;
        }
        Ok(())
    }
}
