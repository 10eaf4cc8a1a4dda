use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{History, MemberId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait HistoryQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    /// Every history of the member, newest `created_at` first.
    async fn find_all_by_member(
        &self,
        con: &mut Self::Transaction,
        member_id: &MemberId,
    ) -> error_stack::Result<Vec<History>, KernelError>;
}

pub trait DependOnHistoryQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type HistoryQuery: HistoryQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn history_query(&self) -> &Self::HistoryQuery;
}
