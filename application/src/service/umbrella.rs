use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{
    DatabaseConnection, DependOnDatabaseConnection, Transaction, TransactionOf,
};
use kernel::interface::query::{DependOnShopQuery, DependOnUmbrellaQuery, UmbrellaQuery};
use kernel::interface::update::{DependOnUmbrellaModifier, UmbrellaModifier};
use kernel::prelude::entity::{DestructUmbrella, Shop, Umbrella, UmbrellaAvailable, UmbrellaId};
use kernel::KernelError;

use crate::service::find_shop;
use crate::transfer::StockUmbrellaDto;

pub const MAX_STOCK_AMOUNT: i32 = 100;

#[async_trait::async_trait]
pub trait AllocateUmbrellaService: 'static + Sync + Send + DependOnUmbrellaQuery {
    /// Selects a free umbrella of the shop without changing it.
    /// Marking it unavailable is up to the caller, inside the same transaction.
    async fn acquire_free_umbrella(
        &self,
        con: &mut TransactionOf<Self>,
        shop: &Shop,
    ) -> error_stack::Result<Umbrella, KernelError> {
        self.umbrella_query()
            .find_free_by_shop(con, shop.id())
            .await?
            .ok_or_else(|| {
                Report::new(KernelError::NoAvailableUmbrella)
                    .attach_printable(format!("shop: {:?}", shop.id()))
            })
    }
}

impl<T> AllocateUmbrellaService for T where T: DependOnUmbrellaQuery {}

#[async_trait::async_trait]
pub trait StockUmbrellaService:
    'static + Sync + Send + DependOnShopQuery + DependOnUmbrellaModifier
{
    async fn stock_umbrellas(
        &self,
        dto: StockUmbrellaDto,
    ) -> error_stack::Result<Vec<UmbrellaId>, KernelError> {
        if !(1..=MAX_STOCK_AMOUNT).contains(&dto.amount) {
            return Err(Report::new(KernelError::Validation).attach_printable(format!(
                "amount must be between 1 and {MAX_STOCK_AMOUNT}: {}",
                dto.amount
            )));
        }
        let mut connection = self.database_connection().transact().await?;

        let shop = find_shop(self, &mut connection, &dto.shop_id).await?;
        let mut stocked = Vec::new();
        for _ in 0..dto.amount {
            let umbrella = Umbrella::new(
                UmbrellaId::new(Uuid::new_v4()),
                shop.id().clone(),
                UmbrellaAvailable::new(true),
            );
            self.umbrella_modifier()
                .create(&mut connection, &umbrella)
                .await?;
            let DestructUmbrella { id, .. } = umbrella.into_destruct();
            stocked.push(id);
        }
        connection.commit().await?;

        tracing::info!(shop = ?shop.id(), amount = dto.amount, "stocked umbrellas");
        Ok(stocked)
    }
}

impl<T> StockUmbrellaService for T where T: DependOnShopQuery + DependOnUmbrellaModifier {}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::prelude::entity::{ShopId, ShopName};
    use kernel::KernelError;

    use crate::mock::MockDatabase;
    use crate::service::{RegisterShopService, StockUmbrellaService};
    use crate::transfer::{RegisterShopDto, StockUmbrellaDto};

    #[tokio::test]
    async fn stocks_available_umbrellas() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let shop_id = db
            .register_shop(RegisterShopDto {
                name: ShopName::new("Myeongdong"),
            })
            .await?;

        let ids = db
            .stock_umbrellas(StockUmbrellaDto {
                shop_id: shop_id.clone(),
                amount: 3,
            })
            .await?;
        assert_eq!(ids.len(), 3);

        let store = db.snapshot().await;
        assert_eq!(store.umbrellas.len(), 3);
        assert!(store
            .umbrellas
            .iter()
            .all(|umbrella| umbrella.is_available() && umbrella.shop_id() == &shop_id));
        Ok(())
    }

    #[tokio::test]
    async fn unknown_shop_is_rejected() {
        let db = MockDatabase::default();
        let result = db
            .stock_umbrellas(StockUmbrellaDto {
                shop_id: ShopId::new(Uuid::new_v4()),
                amount: 1,
            })
            .await;
        let report = result.expect_err("stocking an unknown shop must fail");
        assert!(matches!(report.current_context(), KernelError::ShopNotFound));
    }

    #[tokio::test]
    async fn amount_out_of_range_is_rejected() -> error_stack::Result<(), KernelError> {
        let db = MockDatabase::default();
        let shop_id = db
            .register_shop(RegisterShopDto {
                name: ShopName::new("Myeongdong"),
            })
            .await?;

        for amount in [0, -1, 101] {
            let report = db
                .stock_umbrellas(StockUmbrellaDto {
                    shop_id: shop_id.clone(),
                    amount,
                })
                .await
                .expect_err("amount must be validated");
            assert!(matches!(report.current_context(), KernelError::Validation));
        }
        assert!(db.snapshot().await.umbrellas.is_empty());
        Ok(())
    }
}
