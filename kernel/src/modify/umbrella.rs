use crate::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use crate::entity::Umbrella;
use crate::KernelError;

#[async_trait::async_trait]
pub trait UmbrellaModifier: 'static + Sync + Send {
    type Transaction: Transaction;
    async fn create(
        &self,
        con: &mut Self::Transaction,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError>;
    async fn update(
        &self,
        con: &mut Self::Transaction,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError>;
}

pub trait DependOnUmbrellaModifier: 'static + Sync + Send + DependOnDatabaseConnection {
    type UmbrellaModifier: UmbrellaModifier<
        Transaction = <Self::DatabaseConnection as DatabaseConnection>::Transaction,
    >;
    fn umbrella_modifier(&self) -> &Self::UmbrellaModifier;
}
