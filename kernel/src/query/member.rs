use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::{Member, MemberId};
use crate::KernelError;

#[async_trait::async_trait]
pub trait MemberQuery: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn find_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError>;

    /// Same as [`MemberQuery::find_by_id`], but holds a row lock until the transaction ends.
    /// Rental state changes of one member are serialized through this lock.
    async fn lock_by_id(
        &self,
        con: &mut Self::Transaction,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError>;
}

pub trait DependOnMemberQuery: 'static + Sync + Send + DependOnDatabaseConnection {
    type MemberQuery: MemberQuery<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn member_query(&self) -> &Self::MemberQuery;
}
