use axum::{extract::State, Json};
use tracing::info;

use crate::{
    model::Roster,
    web::{
        types::{ActivityName, EmailQuery, Message},
        WebResult,
    },
    AppState,
};

#[tracing::instrument(name = "Listing activities", skip(app_state))]
pub async fn list_activities(State(app_state): State<AppState>) -> Json<Roster> {
    Json(app_state.model_mgr.list_activities().await)
}

#[tracing::instrument(
    name = "Signing up a student",
    skip(app_state, query),
    fields(email = ?query.email)
)]
pub async fn signup(
    State(app_state): State<AppState>,
    activity_name: ActivityName,
    query: EmailQuery,
) -> WebResult<Json<Message>> {
    let email = query.participant_email()?;

    app_state.model_mgr.signup(&activity_name, email).await?;
    info!("SUCCESS");

    Ok(Json(Message::signed_up(email, &activity_name)))
}

#[tracing::instrument(
    name = "Unregistering a student",
    skip(app_state, query),
    fields(email = ?query.email)
)]
pub async fn unregister(
    State(app_state): State<AppState>,
    activity_name: ActivityName,
    query: EmailQuery,
) -> WebResult<Json<Message>> {
    let email = query.participant_email()?;

    app_state.model_mgr.unregister(&activity_name, email).await?;
    info!("SUCCESS");

    Ok(Json(Message::unregistered(email, &activity_name)))
}
