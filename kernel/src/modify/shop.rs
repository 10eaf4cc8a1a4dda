use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Shop;
use crate::KernelError;

#[async_trait::async_trait]
pub trait ShopModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        shop: &Shop,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnShopModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type ShopModifier: ShopModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn shop_modifier(&self) -> &Self::ShopModifier;
}
