use crate::controller::Exhaust;
use crate::response::ApiResponse;
use application::transfer::HistoryDto;
use kernel::prelude::entity::Process;
use serde::Serialize;
use time::OffsetDateTime;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryResponse {
    member: String,
    from_shop: String,
    end_shop: String,
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    cleared_at: OffsetDateTime,
    process: Process,
}

impl From<HistoryDto> for HistoryResponse {
    fn from(value: HistoryDto) -> Self {
        Self {
            member: value.member,
            from_shop: value.from_shop,
            end_shop: value.end_shop,
            created_at: value.created_at,
            cleared_at: value.cleared_at,
            process: value.process,
        }
    }
}

/// `data` of the status query: the rental in progress, or `""` when there is none.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum StatusResponse {
    Renting(HistoryResponse),
    Idle(&'static str),
}

pub struct Presenter;

impl Exhaust<HistoryDto> for Presenter {
    type To = ApiResponse<HistoryResponse>;
    fn emit(&self, output: HistoryDto) -> Self::To {
        ApiResponse::success(output.into())
    }
}

impl Exhaust<Vec<HistoryDto>> for Presenter {
    type To = ApiResponse<Vec<HistoryResponse>>;
    fn emit(&self, output: Vec<HistoryDto>) -> Self::To {
        ApiResponse::success(output.into_iter().map(HistoryResponse::from).collect())
    }
}

impl Exhaust<Option<HistoryDto>> for Presenter {
    type To = ApiResponse<StatusResponse>;
    fn emit(&self, output: Option<HistoryDto>) -> Self::To {
        let status = match output {
            Some(history) => StatusResponse::Renting(history.into()),
            None => StatusResponse::Idle(""),
        };
        ApiResponse::success(status)
    }
}

#[cfg(test)]
mod test {
    use application::transfer::{HistoryDto, UNCLEARED_AT};
    use kernel::prelude::entity::Process;
    use serde_json::json;
    use time::macros::datetime;

    use super::Presenter;
    use crate::controller::Exhaust;

    fn renting() -> HistoryDto {
        HistoryDto {
            member: "M1".to_string(),
            from_shop: "S1".to_string(),
            end_shop: String::new(),
            created_at: datetime!(2024-06-01 09:30 UTC),
            cleared_at: UNCLEARED_AT,
            process: Process::Use,
        }
    }

    #[test]
    fn history_fields_are_camel_case_rfc3339() {
        let body = serde_json::to_value(Presenter.emit(renting())).unwrap();
        assert_eq!(
            body,
            json!({
                "success": true,
                "data": {
                    "member": "M1",
                    "fromShop": "S1",
                    "endShop": "",
                    "createdAt": "2024-06-01T09:30:00Z",
                    "clearedAt": "9999-12-31T23:59:00Z",
                    "process": "USE",
                }
            })
        );
    }

    #[test]
    fn status_without_rental_is_empty_string() {
        let body = serde_json::to_value(Presenter.emit(None::<HistoryDto>)).unwrap();
        assert_eq!(body, json!({ "success": true, "data": "" }));

        let body = serde_json::to_value(Presenter.emit(Some(renting()))).unwrap();
        assert_eq!(body["data"]["process"], "USE");
    }
}
