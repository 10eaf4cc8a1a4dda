use crate::controller::Exhaust;
use crate::response::ApiResponse;
use axum::http::StatusCode;
use kernel::prelude::entity::MemberId;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RegisteredMemberResponse {
    id: Uuid,
    token: String,
}

pub struct Presenter;

impl Exhaust<(MemberId, String)> for Presenter {
    type To = (StatusCode, ApiResponse<RegisteredMemberResponse>);
    fn emit(&self, (member_id, token): (MemberId, String)) -> Self::To {
        let response = RegisteredMemberResponse {
            id: member_id.into(),
            token,
        };
        (StatusCode::CREATED, ApiResponse::success(response))
    }
}
