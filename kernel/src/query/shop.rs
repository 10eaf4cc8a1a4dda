use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Shop, ShopId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait ShopQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &ShopId,
    ) -> error_stack::Result<Option<Shop>, KernelError>;
}

pub trait DependOnShopQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type ShopQuery: ShopQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn shop_query(&self) -> &Self::ShopQuery;
}
