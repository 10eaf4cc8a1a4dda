mod request;
mod response;

use crate::auth::CurrentMember;
use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::history::request::{
    GetHistoryRequest, RentUmbrellaRequest, ReturnUmbrellaRequest, Transformer,
};
use crate::route::history::response::Presenter;
use application::service::{GetHistoryService, RentUmbrellaService, ReturnUmbrellaService};
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::Router;
use axum_extra::extract::WithRejection;
use uuid::Uuid;

pub trait HistoryRouter {
    fn route_history(self) -> Self;
}

impl HistoryRouter for Router<AppModule> {
    fn route_history(self) -> Self {
        self.route(
            "/histories",
            get(
                |State(handler): State<AppModule>, CurrentMember(member_id): CurrentMember| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetHistoryRequest::new(member_id))
                        .handle(|dto| handler.pgpool().history_list(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/histories/status",
            get(
                |State(handler): State<AppModule>, CurrentMember(member_id): CurrentMember| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(GetHistoryRequest::new(member_id))
                        .handle(|dto| handler.pgpool().rental_status(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/histories/rental/:shop_id",
            post(
                |State(handler): State<AppModule>,
                 CurrentMember(member_id): CurrentMember,
                 WithRejection(Path(shop_id), _): WithRejection<Path<Uuid>, ErrorStatus>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(RentUmbrellaRequest::new(member_id, shop_id))
                        .handle(|dto| handler.pgpool().rent_umbrella(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/histories/return/:shop_id",
            post(
                |State(handler): State<AppModule>,
                 CurrentMember(member_id): CurrentMember,
                 WithRejection(Path(shop_id), _): WithRejection<Path<Uuid>, ErrorStatus>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake(ReturnUmbrellaRequest::new(member_id, shop_id))
                        .handle(|dto| handler.pgpool().return_umbrella(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
