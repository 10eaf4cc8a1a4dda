use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::update::{DependOnShopModifier, ShopModifier};
use kernel::prelude::entity::{DestructShop, Shop, ShopId};
use kernel::KernelError;

use crate::transfer::RegisterShopDto;

#[async_trait::async_trait]
pub trait RegisterShopService: 'static + Sync + Send + DependOnShopModifier {
    async fn register_shop(&self, dto: RegisterShopDto) -> error_stack::Result<ShopId, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let shop = Shop::new(ShopId::new(Uuid::new_v4()), dto.name);
        self.shop_modifier().create(&mut connection, &shop).await?;
        connection.commit().await?;

        let DestructShop { id, .. } = shop.into_destruct();
        Ok(id)
    }
}

impl<T> RegisterShopService for T where T: DependOnShopModifier {}
