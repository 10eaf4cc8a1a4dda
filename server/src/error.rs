use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

use crate::response::ApiResponse;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

// Malformed bodies and path segments get the same envelope as every other failure.
impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        ErrorStatus(Report::new(KernelError::Validation).attach_printable(rejection.body_text()))
    }
}

impl From<PathRejection> for ErrorStatus {
    fn from(rejection: PathRejection) -> Self {
        ErrorStatus(Report::new(KernelError::Validation).attach_printable(rejection.body_text()))
    }
}

impl ErrorStatus {
    fn status(&self) -> StatusCode {
        match self.0.current_context() {
            KernelError::ShopNotFound | KernelError::MemberNotFound => StatusCode::NOT_FOUND,
            KernelError::NoAvailableUmbrella
            | KernelError::NoActiveRental
            | KernelError::AlreadyRenting
            | KernelError::Concurrency => StatusCode::CONFLICT,
            KernelError::Validation => StatusCode::BAD_REQUEST,
            KernelError::Unauthorized => StatusCode::UNAUTHORIZED,
            KernelError::Timeout => StatusCode::REQUEST_TIMEOUT,
            KernelError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("{:?}", self.0);
        } else {
            tracing::debug!("{:?}", self.0);
        }
        let message = self.0.current_context().to_string();
        (status, ApiResponse::failure(message)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::body::Body;
    use axum::extract::{FromRequest, FromRequestParts, Path};
    use axum::http::{header, Request, StatusCode};
    use axum::response::IntoResponse;
    use axum::Json;
    use axum_extra::extract::WithRejection;
    use error_stack::Report;
    use kernel::KernelError;
    use serde_json::{json, Value};
    use uuid::Uuid;

    use super::ErrorStatus;

    async fn envelope(error: ErrorStatus) -> (StatusCode, Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn malformed_json_body_is_enveloped() {
        let request = Request::builder()
            .method("POST")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"name\":"))
            .unwrap();
        let rejection = WithRejection::<Json<Value>, ErrorStatus>::from_request(request, &())
            .await
            .map(|_| ())
            .unwrap_err();

        let (status, body) = envelope(rejection).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "success": false, "data": "Invalid input" }));
    }

    #[tokio::test]
    async fn path_rejection_is_enveloped() {
        let (mut parts, _) = Request::builder()
            .uri("/histories/rental/not-a-uuid")
            .body(())
            .unwrap()
            .into_parts();
        let rejection =
            WithRejection::<Path<Uuid>, ErrorStatus>::from_request_parts(&mut parts, &())
                .await
                .map(|_| ())
                .unwrap_err();

        let (status, body) = envelope(rejection).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
    }

    #[test]
    fn domain_faults_map_to_client_errors() {
        let cases = [
            (KernelError::ShopNotFound, StatusCode::NOT_FOUND),
            (KernelError::MemberNotFound, StatusCode::NOT_FOUND),
            (KernelError::NoAvailableUmbrella, StatusCode::CONFLICT),
            (KernelError::NoActiveRental, StatusCode::CONFLICT),
            (KernelError::AlreadyRenting, StatusCode::CONFLICT),
            (KernelError::Validation, StatusCode::BAD_REQUEST),
            (KernelError::Unauthorized, StatusCode::UNAUTHORIZED),
            (KernelError::Internal, StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (error, expected) in cases {
            let response = ErrorStatus::from(Report::new(error)).into_response();
            assert_eq!(response.status(), expected);
        }
    }
}
