use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{ShopId, Umbrella, UmbrellaId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait UmbrellaQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &UmbrellaId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError>;

    /// Picks the available umbrella with the lowest id in the shop.
    ///
    /// The returned row stays locked until the transaction ends, and rows already
    /// locked by other transactions are skipped.
    async fn find_free_by_shop(
        &self,
        con: &mut Self::Transaction,
        shop_id: &ShopId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError>;
}

pub trait DependOnUmbrellaQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type UmbrellaQuery: UmbrellaQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn umbrella_query(&self) -> &Self::UmbrellaQuery;
}
