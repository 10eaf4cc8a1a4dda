use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::History;
use crate::KernelError;

#[async_trait::async_trait]
pub trait HistoryModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        history: &History,
    ) -> error_stack::Result<(), KernelError>;
    /// Writes back `process`, `end_shop` and `cleared_at`. Other columns never change.
    async fn update(
        &self,
        con: &mut Self::Transaction,
        history: &History,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnHistoryModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type HistoryModifier: HistoryModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn history_modifier(&self) -> &Self::HistoryModifier;
}
