use crate::controller::Exhaust;
use crate::response::ApiResponse;
use axum::http::StatusCode;
use kernel::prelude::entity::{ShopId, UmbrellaId};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Serialize)]
pub struct RegisteredShopResponse {
    id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct StockedUmbrellaResponse {
    ids: Vec<Uuid>,
}

pub struct Presenter;

impl Exhaust<ShopId> for Presenter {
    type To = (StatusCode, ApiResponse<RegisteredShopResponse>);
    fn emit(&self, output: ShopId) -> Self::To {
        let response = RegisteredShopResponse { id: output.into() };
        (StatusCode::CREATED, ApiResponse::success(response))
    }
}

impl Exhaust<Vec<UmbrellaId>> for Presenter {
    type To = (StatusCode, ApiResponse<StockedUmbrellaResponse>);
    fn emit(&self, output: Vec<UmbrellaId>) -> Self::To {
        let response = StockedUmbrellaResponse {
            ids: output.into_iter().map(Uuid::from).collect(),
        };
        (StatusCode::CREATED, ApiResponse::success(response))
    }
}
