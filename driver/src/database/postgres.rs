use std::ops::{Deref, DerefMut};

use error_stack::ResultExt;
use sqlx::{PgConnection, Pool, Postgres};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnHistoryQuery, DependOnMemberQuery, DependOnShopQuery, DependOnUmbrellaQuery,
};
use kernel::interface::update::{
    DependOnHistoryModifier, DependOnMemberModifier, DependOnShopModifier,
    DependOnUmbrellaModifier,
};
use kernel::KernelError;

use crate::env;
use crate::error::ConvertError;

pub use self::{history::*, member::*, shop::*, umbrella::*};

mod history;
mod member;
mod shop;
mod umbrella;

static POSTGRES_URL: &str = "POSTGRES_URL";

pub struct PostgresDatabase {
    pool: Pool<Postgres>,
}

impl PostgresDatabase {
    pub async fn new() -> error_stack::Result<Self, KernelError> {
        let url = env(POSTGRES_URL)?;
        let pool = Pool::connect(&url).await.convert_error()?;
        tracing::debug!("connected to postgres");
        Ok(Self { pool })
    }

    pub async fn migrate(&self) -> error_stack::Result<(), KernelError> {
        sqlx::migrate!("../migrations")
            .run(&self.pool)
            .await
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to run migrations")?;
        tracing::info!("database schema is up to date");
        Ok(())
    }
}

pub struct PostgresTransaction(sqlx::Transaction<'static, Postgres>);

impl Deref for PostgresTransaction {
    type Target = PgConnection;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PostgresTransaction {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

#[async_trait::async_trait]
impl DatabaseConnection for PostgresDatabase {
    type Transaction = PostgresTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let transaction = self.pool.begin().await.convert_error()?;
        Ok(PostgresTransaction(transaction))
    }
}

#[async_trait::async_trait]
impl Transaction for PostgresTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        self.0.commit().await.convert_error()
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        self.0.rollback().await.convert_error()
    }
}

impl DependOnMemberQuery for PostgresDatabase {
    type MemberQuery = PostgresMemberRepository;
    fn member_query(&self) -> &Self::MemberQuery {
        &PostgresMemberRepository
    }
}

impl DependOnMemberModifier for PostgresDatabase {
    type MemberModifier = PostgresMemberRepository;
    fn member_modifier(&self) -> &Self::MemberModifier {
        &PostgresMemberRepository
    }
}

impl DependOnShopQuery for PostgresDatabase {
    type ShopQuery = PostgresShopRepository;
    fn shop_query(&self) -> &Self::ShopQuery {
        &PostgresShopRepository
    }
}

impl DependOnShopModifier for PostgresDatabase {
    type ShopModifier = PostgresShopRepository;
    fn shop_modifier(&self) -> &Self::ShopModifier {
        &PostgresShopRepository
    }
}

impl DependOnUmbrellaQuery for PostgresDatabase {
    type UmbrellaQuery = PostgresUmbrellaRepository;
    fn umbrella_query(&self) -> &Self::UmbrellaQuery {
        &PostgresUmbrellaRepository
    }
}

impl DependOnUmbrellaModifier for PostgresDatabase {
    type UmbrellaModifier = PostgresUmbrellaRepository;
    fn umbrella_modifier(&self) -> &Self::UmbrellaModifier {
        &PostgresUmbrellaRepository
    }
}

impl DependOnHistoryQuery for PostgresDatabase {
    type HistoryQuery = PostgresHistoryRepository;
    fn history_query(&self) -> &Self::HistoryQuery {
        &PostgresHistoryRepository
    }
}

impl DependOnHistoryModifier for PostgresDatabase {
    type HistoryModifier = PostgresHistoryRepository;
    fn history_modifier(&self) -> &Self::HistoryModifier {
        &PostgresHistoryRepository
    }
}
