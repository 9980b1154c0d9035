use anyhow::Result;
use fitnessedge::{ContactSink, ContactSubmission, HttpContactSink, SiteError};
use httpmock::prelude::*;
use serde_json::json;
use std::time::Duration;

fn submission() -> ContactSubmission {
    ContactSubmission {
        name: "Asha Rao".to_string(),
        email: "asha@example.com".to_string(),
        phone: "9876543210".to_string(),
        interest: "Plan: gym, nutrition (6 Months) - ₹12,500".to_string(),
        message: None,
    }
}

#[tokio::test]
async fn test_submission_is_posted_as_json() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact").json_body(json!({
                "name": "Asha Rao",
                "email": "asha@example.com",
                "phone": "9876543210",
                "interest": "Plan: gym, nutrition (6 Months) - ₹12,500"
            }));
            then.status(200)
                .json_body(json!({ "message": "Form submitted successfully" }));
        })
        .await;

    let sink = HttpContactSink::new(server.url("/api/contact"), Duration::from_secs(5))?;
    sink.submit(&submission()).await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn test_bad_request_maps_to_validation_error() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(400)
                .json_body(json!({ "message": "Missing required fields" }));
        })
        .await;

    let sink = HttpContactSink::new(server.url("/api/contact"), Duration::from_secs(5))?;
    let err = sink.submit(&submission()).await.unwrap_err();

    match err {
        SiteError::ContactValidationError { message, .. } => {
            assert_eq!(message, "Missing required fields")
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_server_failure_maps_to_remote_status() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(500)
                .json_body(json!({ "message": "Error sending email" }));
        })
        .await;

    let sink = HttpContactSink::new(server.url("/api/contact"), Duration::from_secs(5))?;
    let err = sink.submit(&submission()).await.unwrap_err();

    match err {
        SiteError::RemoteStatusError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Error sending email");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn test_invalid_form_is_never_sent() -> Result<()> {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(200);
        })
        .await;

    let sink = HttpContactSink::new(server.url("/api/contact"), Duration::from_secs(5))?;
    let bad_email = ContactSubmission {
        email: "not-an-email".to_string(),
        ..submission()
    };
    let err = sink.submit(&bad_email).await.unwrap_err();

    assert!(matches!(err, SiteError::ContactValidationError { ref field, .. } if field == "email"));
    mock.assert_hits_async(0).await;
    Ok(())
}

#[tokio::test]
async fn test_only_200_counts_as_accepted() -> Result<()> {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path("/api/contact");
            then.status(201);
        })
        .await;

    let sink = HttpContactSink::new(server.url("/api/contact"), Duration::from_secs(5))?;
    let err = sink.submit(&submission()).await.unwrap_err();

    match err {
        SiteError::RemoteStatusError { status, message } => {
            assert_eq!(status, 201);
            assert_eq!(message, "Error submitting form");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    Ok(())
}
