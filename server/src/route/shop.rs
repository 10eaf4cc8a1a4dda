mod request;
mod response;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::AppModule;
use crate::route::shop::request::{RegisterShopRequest, StockUmbrellaRequest, Transformer};
use crate::route::shop::response::Presenter;
use application::service::{RegisterShopService, StockUmbrellaService};
use axum::extract::{Path, State};
use axum::routing::post;
use axum::{Json, Router};
use axum_extra::extract::WithRejection;
use uuid::Uuid;

pub trait ShopRouter {
    fn route_shop(self) -> Self;
}

impl ShopRouter for Router<AppModule> {
    fn route_shop(self) -> Self {
        self.route(
            "/shops",
            post(
                |State(handler): State<AppModule>,
                 WithRejection(Json(req), _): WithRejection<Json<RegisterShopRequest>, ErrorStatus>| async move {
                    let transformed = match Controller::new(Transformer, Presenter).try_intake(req) {
                        Ok(transformed) => transformed,
                        Err(report) => return Err(ErrorStatus::from(report)),
                    };
                    transformed
                        .handle(|dto| handler.pgpool().register_shop(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
        .route(
            "/shops/:shop_id/umbrellas",
            post(
                |State(handler): State<AppModule>,
                 WithRejection(Path(shop_id), _): WithRejection<Path<Uuid>, ErrorStatus>,
                 WithRejection(Json(req), _): WithRejection<Json<StockUmbrellaRequest>, ErrorStatus>| async move {
                    Controller::new(Transformer, Presenter)
                        .intake((shop_id, req))
                        .handle(|dto| handler.pgpool().stock_umbrellas(dto))
                        .await
                        .map_err(ErrorStatus::from)
                },
            ),
        )
    }
}
