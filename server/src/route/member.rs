mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::member::request::{RegisterMemberRequest, Transformer};
use crate::route::member::response::Presenter;
use application::service::RegisterMemberService;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use error_stack::Report;
use kernel::KernelError;

pub trait MemberRouter {
    fn route_member(self) -> Self;
}

impl MemberRouter for Router<AppModule> {
    fn route_member(self) -> Self {
        self.route(
            "/members",
            post(
                |State(handler): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<RegisterMemberRequest>, ErrorStatus>| async move {
                    let transformed = match Controller::new(Transformer, Presenter).try_intake(req) {
                        Ok(transformed) => transformed,
                        Err(report) => return Err(ErrorStatus::from(report)),
                    };
                    transformed
                        .handle(|dto| async move {
                            let member_id = handler.pgpool().register_member(dto).await?;
                            let token = handler.authority().issue(&member_id)?;
                            Ok::<_, Report<KernelError>>((member_id, token))
                        })
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
