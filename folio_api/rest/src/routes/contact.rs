use std::sync::Arc;

use anyhow::anyhow;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_contact_contracts::ContactService;
use folio_models::contact::ContactSubmission;

use super::{error, internal_server_error};
use crate::models::{contact::ApiContactMessage, ApiMessage};

pub fn router(service: Arc<impl ContactService>) -> Router<()> {
    Router::new()
        .route("/api/contact", routing::post(receive_message))
        .with_state(service)
}

async fn receive_message(
    service: State<Arc<impl ContactService>>,
    body: Bytes,
) -> Response {
    // the content type is ignored, any body that parses as json is accepted
    let body = match serde_json::from_slice::<serde_json::Value>(&body) {
        Ok(serde_json::Value::Null) => {
            return internal_server_error(anyhow!("Request body is null"))
        }
        Ok(body) => body,
        Err(err) => return internal_server_error(err),
    };

    // well-formed json of the wrong shape counts as missing fields
    let Some(submission) = serde_json::from_value::<ApiContactMessage>(body)
        .ok()
        .and_then(|message| ContactSubmission::try_from(message).ok())
    else {
        return missing_fields();
    };

    match service.receive_message(submission).await {
        Ok(()) => Json(ApiMessage {
            message: "Message sent successfully",
        })
        .into_response(),
        Err(err) => internal_server_error(err),
    }
}

fn missing_fields() -> Response {
    error(StatusCode::BAD_REQUEST, "Missing required fields")
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{header, Method, Request},
    };
    use folio_core_contact_contracts::MockContactService;
    use folio_demo::contact::MAX_SUBMISSION;
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;

    async fn post(service: MockContactService, body: impl Into<Body>) -> (StatusCode, Value) {
        post_with_content_type(service, Some("application/json"), body).await
    }

    async fn post_with_content_type(
        service: MockContactService,
        content_type: Option<&str>,
        body: impl Into<Body>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(Method::POST).uri("/api/contact");
        if let Some(content_type) = content_type {
            request = request.header(header::CONTENT_TYPE, content_type);
        }
        let request = request.body(body.into()).unwrap();

        let response = router(service.into()).oneshot(request).await.unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    fn max() -> Value {
        json!({
            "name": "Max Mustermann",
            "email": "max.mustermann@example.de",
            "text": "Hi! I saw your projects and would like to talk about a role on our team.",
        })
    }

    #[tokio::test]
    async fn ok() {
        // Arrange
        let service = MockContactService::new().with_receive_message(MAX_SUBMISSION.clone(), true);

        // Act
        let (status, body) = post(service, max().to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"message": "Message sent successfully"}));
    }

    #[tokio::test]
    async fn content_type_is_ignored() {
        for content_type in [None, Some("text/plain;charset=UTF-8")] {
            // Arrange
            let service =
                MockContactService::new().with_receive_message(MAX_SUBMISSION.clone(), true);

            // Act
            let (status, body) =
                post_with_content_type(service, content_type, max().to_string()).await;

            // Assert
            assert_eq!(status, StatusCode::OK, "{content_type:?}");
            assert_eq!(body, json!({"message": "Message sent successfully"}));
        }
    }

    #[tokio::test]
    async fn no_format_validation() {
        // Arrange
        let mut service = MockContactService::new();
        service
            .expect_receive_message()
            .once()
            .return_once(|_| Box::pin(std::future::ready(Ok(()))));

        // Act
        let (status, _) = post(
            service,
            json!({"name": "J", "email": "not-an-email", "text": "hi"}).to_string(),
        )
        .await;

        // Assert
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn missing_or_empty_fields() {
        for field in ["name", "email", "text"] {
            for value in [None, Some(Value::Null), Some(json!(""))] {
                // Arrange
                let mut body = max();
                match &value {
                    None => {
                        body.as_object_mut().unwrap().remove(field);
                    }
                    Some(value) => body[field] = value.clone(),
                }

                // Act
                let (status, body) = post(MockContactService::new(), body.to_string()).await;

                // Assert
                assert_eq!(status, StatusCode::BAD_REQUEST, "{field} = {value:?}");
                assert_eq!(body, json!({"error": "Missing required fields"}));
            }
        }
    }

    #[tokio::test]
    async fn wrong_field_type() {
        // Arrange
        let mut body = max();
        body["email"] = json!(42);

        // Act
        let (status, body) = post(MockContactService::new(), body.to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Missing required fields"}));
    }

    #[tokio::test]
    async fn wrong_body_shape() {
        for body in [json!([]), json!(42), json!("text")] {
            // Act
            let (status, response) = post(MockContactService::new(), body.to_string()).await;

            // Assert
            assert_eq!(status, StatusCode::BAD_REQUEST, "{body}");
            assert_eq!(response, json!({"error": "Missing required fields"}));
        }
    }

    #[tokio::test]
    async fn malformed_or_null_body() {
        for body in ["{\"name\": ", "", "null"] {
            // Act
            let (status, response) =
                post_with_content_type(MockContactService::new(), None, body).await;

            // Assert
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{body:?}");
            assert_eq!(response, json!({"error": "Failed to process request"}));
        }
    }

    #[tokio::test]
    async fn service_error() {
        // Arrange
        let service =
            MockContactService::new().with_receive_message(MAX_SUBMISSION.clone(), false);

        // Act
        let (status, body) = post(service, max().to_string()).await;

        // Assert
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Failed to process request"}));
    }
}
