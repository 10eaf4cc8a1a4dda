use crate::controller::{Intake, TryIntake};
use application::transfer::{RegisterShopDto, StockUmbrellaDto};
use error_stack::Report;
use kernel::prelude::entity::{ShopId, ShopName};
use kernel::KernelError;
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct RegisterShopRequest {
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct StockUmbrellaRequest {
    amount: i32,
}

pub struct Transformer;

impl TryIntake<RegisterShopRequest> for Transformer {
    type To = RegisterShopDto;
    type Error = Report<KernelError>;
    fn emit(&self, RegisterShopRequest { name }: RegisterShopRequest) -> Result<Self::To, Self::Error> {
        Ok(RegisterShopDto {
            name: ShopName::parse(name)?,
        })
    }
}

impl Intake<(Uuid, StockUmbrellaRequest)> for Transformer {
    type To = StockUmbrellaDto;
    fn emit(&self, (shop_id, StockUmbrellaRequest { amount }): (Uuid, StockUmbrellaRequest)) -> Self::To {
        StockUmbrellaDto {
            shop_id: ShopId::new(shop_id),
            amount,
        }
    }
}

#[cfg(test)]
mod test {
    use kernel::KernelError;

    use super::{RegisterShopRequest, Transformer};
    use crate::controller::TryIntake;

    #[test]
    fn blank_shop_name_is_rejected() {
        let request: RegisterShopRequest = serde_json::from_str(r#"{"name":" "}"#).unwrap();
        let error = Transformer.emit(request).unwrap_err();
        assert!(matches!(error.current_context(), KernelError::Validation));

        let request: RegisterShopRequest = serde_json::from_str(r#"{"name":"Station"}"#).unwrap();
        let dto = Transformer.emit(request).unwrap();
        assert_eq!(AsRef::<String>::as_ref(&dto.name), "Station");
    }
}
