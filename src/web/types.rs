//! Request extractors and response bodies of the activity routes.
//! The extractors reject with `web::Error` so malformed requests get the same
//! `{"detail": ...}` body as every other error.

use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use derive_more::Deref;
use serde::{Deserialize, Serialize};

use crate::web::Error;

/// The percent-decoded `{activity_name}` path segment.
#[derive(Debug, Deref)]
pub struct ActivityName(String);

impl<S> FromRequestParts<S> for ActivityName
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(activity_name) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|rej| Error::PathRejection(rej.body_text()))?;

        Ok(Self(activity_name))
    }
}

/// The `?email=` query of the signup and unregister routes.
/// A missing parameter still extracts so the handler reports it like any other error.
/// When `email` is repeated the last value wins.
#[derive(Debug)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// Returns the email as sent. Only presence is checked, never the format.
    pub fn participant_email(&self) -> Result<&str, Error> {
        self.email
            .as_deref()
            .filter(|email| !email.is_empty())
            .ok_or(Error::MissingQueryParam("email"))
    }
}

impl<S> FromRequestParts<S> for EmailQuery
where
    S: Send + Sync,
{
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|rej| Error::QueryRejection(rej.body_text()))?;

        let email = pairs
            .into_iter()
            .filter(|(key, _)| key == "email")
            .map(|(_, value)| value)
            .last();

        Ok(Self { email })
    }
}

/// `{"message": "..."}` confirmation body.
#[derive(Debug, Serialize, Deserialize)]
pub struct Message {
    pub message: String,
}

impl Message {
    pub fn signed_up(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Signed up {email} for {activity_name}"),
        }
    }

    pub fn unregistered(email: &str, activity_name: &str) -> Self {
        Self {
            message: format!("Unregistered {email} from {activity_name}"),
        }
    }
}
