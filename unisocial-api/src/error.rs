use anyhow::{anyhow, Context};
use serde_json::json;

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Unknown error: {0}")]
    Unknown(String),

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Email already registered {0}")]
    EmailAlreadyUsed(String),

    #[error("Registration number already used {0}")]
    RegNoAlreadyUsed(String),

    #[error("Name already used {0}")]
    NameAlreadyUsed(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Null byte in string is not allowed {0:?}")]
    NullByteInString(String),

    #[error("Content must not be empty")]
    EmptyContent,

    #[error("Invalid email address {0:?}")]
    InvalidEmail(String),

    #[error("End time must be after start time")]
    TimeRangeInverted,
}

impl Error {
    pub fn status_code(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            Error::Unknown(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::PermissionDenied => StatusCode::FORBIDDEN,
            Error::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Error::EmailAlreadyUsed(_) => StatusCode::CONFLICT,
            Error::RegNoAlreadyUsed(_) => StatusCode::CONFLICT,
            Error::NameAlreadyUsed(_) => StatusCode::CONFLICT,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::NullByteInString(_) => StatusCode::BAD_REQUEST,
            Error::EmptyContent => StatusCode::BAD_REQUEST,
            Error::InvalidEmail(_) => StatusCode::BAD_REQUEST,
            Error::TimeRangeInverted => StatusCode::BAD_REQUEST,
        }
    }

    pub fn contents(&self) -> Vec<u8> {
        serde_json::to_vec(&match self {
            Error::Unknown(msg) => json!({
                "message": msg,
                "type": "unknown",
            }),
            Error::PermissionDenied => json!({
                "message": "permission denied",
                "type": "permission-denied",
            }),
            Error::InvalidCredentials => json!({
                "message": "invalid email or password",
                "type": "invalid-credentials",
            }),
            Error::EmailAlreadyUsed(e) => json!({
                "message": "email already registered",
                "type": "conflict-email",
                "email": e,
            }),
            Error::RegNoAlreadyUsed(r) => json!({
                "message": "registration number already used",
                "type": "conflict-regno",
                "regNo": r,
            }),
            Error::NameAlreadyUsed(n) => json!({
                "message": "name already used",
                "type": "conflict-name",
                "name": n,
            }),
            Error::NotFound(what) => json!({
                "message": "not found",
                "type": "not-found",
                "what": what,
            }),
            Error::NullByteInString(s) => json!({
                "message": "there was a null byte in argument string",
                "type": "null-byte",
                "string": s,
            }),
            Error::EmptyContent => json!({
                "message": "content must not be empty",
                "type": "empty-content",
            }),
            Error::InvalidEmail(e) => json!({
                "message": "invalid email address",
                "type": "invalid-email",
                "email": e,
            }),
            Error::TimeRangeInverted => json!({
                "message": "end time must be after start time",
                "type": "time-range-inverted",
            }),
        })
        .expect("serializing error contents")
    }

    pub fn parse(body: &[u8]) -> anyhow::Result<Error> {
        let data: serde_json::Value =
            serde_json::from_slice(body).context("parsing error contents")?;
        let field = |name: &str| -> anyhow::Result<String> {
            Ok(String::from(
                data.get(name)
                    .and_then(|f| f.as_str())
                    .ok_or_else(|| anyhow!("error contents has no string field {name:?}"))?,
            ))
        };
        Ok(
            match data
                .get("type")
                .and_then(|t| t.as_str())
                .ok_or_else(|| anyhow!("error type is not a string"))?
            {
                "unknown" => Error::Unknown(String::from(
                    data.get("message")
                        .and_then(|msg| msg.as_str())
                        .unwrap_or(""),
                )),
                "permission-denied" => Error::PermissionDenied,
                "invalid-credentials" => Error::InvalidCredentials,
                "conflict-email" => Error::EmailAlreadyUsed(field("email")?),
                "conflict-regno" => Error::RegNoAlreadyUsed(field("regNo")?),
                "conflict-name" => Error::NameAlreadyUsed(field("name")?),
                "not-found" => Error::NotFound(field("what")?),
                "null-byte" => Error::NullByteInString(field("string")?),
                "empty-content" => Error::EmptyContent,
                "invalid-email" => Error::InvalidEmail(field("email")?),
                "time-range-inverted" => Error::TimeRangeInverted,
                _ => return Err(anyhow!("error contents has unknown type")),
            },
        )
    }
}
