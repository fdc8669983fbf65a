use anyhow::Result;
use mergington::{config::RosterConfig, model::CapacityPolicy};
use reqwest::{header::CONTENT_TYPE, StatusCode};

use crate::helpers::{detail, message, TestApp};

#[tokio::test]
async fn signup_adds_participant() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email = "newstudent@mergington.edu";

    let res = app.post_signup("Chess%20Club", email).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let message = message(res).await?;
    assert!(message.contains(email));
    assert!(message.contains("Chess Club"));

    let participants = app.participants("Chess Club").await?;
    assert_eq!(participants.last().map(String::as_str), Some(email));

    Ok(())
}

#[tokio::test]
async fn signup_duplicate_participant_fails() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email = "newstudent@mergington.edu";

    let first = app.post_signup("Chess%20Club", email).await?;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app.post_signup("Chess%20Club", email).await?;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert!(detail(second).await?.contains("already signed up"));

    // Rejected signups leave a single entry behind.
    let participants = app.participants("Chess Club").await?;
    assert_eq!(participants.iter().filter(|p| *p == email).count(), 1);

    Ok(())
}

#[tokio::test]
async fn signup_seeded_participant_fails() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_signup("Chess%20Club", "michael@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(detail(res).await?.contains("already signed up"));

    Ok(())
}

#[tokio::test]
async fn signup_nonexistent_activity_fails() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_signup("Nonexistent%20Club", "student@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(detail(res).await?.to_lowercase().contains("not found"));

    Ok(())
}

#[tokio::test]
async fn signup_without_email_is_unprocessable() -> Result<()> {
    let app = TestApp::spawn().await?;

    let cases = [
        (
            format!("http://{}/activities/Chess%20Club/signup", app.addr),
            "Missing email",
        ),
        (
            format!("http://{}/activities/Chess%20Club/signup?email=", app.addr),
            "Empty email",
        ),
    ];

    for (url, description) in cases {
        let res = app.http_client.post(url).send().await?;
        assert_eq!(
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY,
            "Wrong response: ({}), Expected: ({}); for request with: {description}",
            res.status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert!(detail(res).await?.contains("email"));
    }

    Ok(())
}

#[tokio::test]
async fn signup_past_capacity_is_allowed_by_default() -> Result<()> {
    let app = TestApp::spawn_with(RosterConfig::default()).await?;
    let max = app.activities().await?["Math Club"].max_participants as usize;

    for i in 0..max {
        let res = app
            .post_signup("Math%20Club", &format!("student{i}@mergington.edu"))
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    assert!(app.participants("Math Club").await?.len() > max);

    Ok(())
}

#[tokio::test]
async fn signup_past_capacity_fails_when_enforced() -> Result<()> {
    let app = TestApp::spawn_with(RosterConfig {
        capacity_policy: CapacityPolicy::Enforced,
        ..Default::default()
    })
    .await?;

    let math = app.activities().await?.remove("Math Club");
    let math = math.ok_or_else(|| anyhow::anyhow!("Math Club missing from roster"))?;
    let free = math.max_participants as usize - math.participants.len();

    for i in 0..free {
        let res = app
            .post_signup("Math%20Club", &format!("student{i}@mergington.edu"))
            .await?;
        assert_eq!(res.status(), StatusCode::OK);
    }

    let res = app.post_signup("Math%20Club", "late@mergington.edu").await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(detail(res).await?.contains("full"));

    let participants = app.participants("Math Club").await?;
    assert_eq!(participants.len(), math.max_participants as usize);

    Ok(())
}

#[tokio::test]
async fn signup_with_repeated_email_uses_the_last_one() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .http_client
        .post(format!(
            "http://{}/activities/Chess%20Club/signup?email=first@mergington.edu&email=last@mergington.edu",
            app.addr
        ))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(message(res).await?.contains("last@mergington.edu"));

    let participants = app.participants("Chess Club").await?;
    assert!(participants.contains(&"last@mergington.edu".to_string()));
    assert!(!participants.contains(&"first@mergington.edu".to_string()));

    Ok(())
}

#[tokio::test]
async fn signup_with_malformed_activity_name_returns_json_detail() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app.post_signup("Chess%FF", "student@mergington.edu").await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let content_type = res
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(
        content_type.starts_with("application/json"),
        "expected a JSON error body, got: {content_type}"
    );

    let detail = detail(res).await?;
    assert_eq!(detail, "Invalid activity name in path");
    assert!(!detail.contains("UTF-8"), "internal detail leaked: {detail}");

    Ok(())
}
