use anyhow::Result;
use reqwest::StatusCode;

use crate::helpers::{detail, message, TestApp};

#[tokio::test]
async fn unregister_removes_participant() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_unregister("Chess%20Club", "michael@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(message(res).await?.contains("Unregistered"));

    let participants = app.participants("Chess Club").await?;
    assert!(!participants.contains(&"michael@mergington.edu".to_string()));

    Ok(())
}

#[tokio::test]
async fn unregister_twice_fails() -> Result<()> {
    let app = TestApp::spawn().await?;

    let first = app
        .post_unregister("Chess%20Club", "michael@mergington.edu")
        .await?;
    assert_eq!(first.status(), StatusCode::OK);

    let second = app
        .post_unregister("Chess%20Club", "michael@mergington.edu")
        .await?;
    assert_eq!(second.status(), StatusCode::BAD_REQUEST);
    assert!(detail(second).await?.to_lowercase().contains("not registered"));

    Ok(())
}

#[tokio::test]
async fn unregister_nonexistent_participant_fails() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_unregister("Chess%20Club", "nobody@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(detail(res).await?.to_lowercase().contains("not registered"));

    Ok(())
}

#[tokio::test]
async fn unregister_nonexistent_activity_fails() -> Result<()> {
    let app = TestApp::spawn().await?;

    let res = app
        .post_unregister("Nonexistent%20Club", "student@mergington.edu")
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert!(detail(res).await?.to_lowercase().contains("not found"));

    Ok(())
}

#[tokio::test]
async fn signup_then_unregister_workflow() -> Result<()> {
    let app = TestApp::spawn().await?;
    let email = "workflow@mergington.edu";
    let before = app.participants("Programming Class").await?;

    let res = app.post_signup("Programming%20Class", email).await?;
    assert_eq!(res.status(), StatusCode::OK);
    assert!(app
        .participants("Programming Class")
        .await?
        .contains(&email.to_string()));

    let res = app.post_unregister("Programming%20Class", email).await?;
    assert_eq!(res.status(), StatusCode::OK);

    let after = app.participants("Programming Class").await?;
    assert_eq!(before, after);

    Ok(())
}
