use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::UmbrellaQuery;
use kernel::interface::update::UmbrellaModifier;
use kernel::prelude::entity::{ShopId, Umbrella, UmbrellaAvailable, UmbrellaId};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresUmbrellaRepository;

#[async_trait::async_trait]
impl UmbrellaQuery for PostgresUmbrellaRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &UmbrellaId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError> {
        PgUmbrellaInternal::find_by_id(con, id).await
    }

    async fn find_free_by_shop(
        &self,
        con: &mut PostgresTransaction,
        shop_id: &ShopId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError> {
        PgUmbrellaInternal::find_free_by_shop(con, shop_id).await
    }
}

#[async_trait::async_trait]
impl UmbrellaModifier for PostgresUmbrellaRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError> {
        PgUmbrellaInternal::create(con, umbrella).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError> {
        PgUmbrellaInternal::update(con, umbrella).await
    }
}

#[derive(sqlx::FromRow)]
struct UmbrellaRow {
    id: Uuid,
    shop_id: Uuid,
    available: bool,
}

impl From<UmbrellaRow> for Umbrella {
    fn from(value: UmbrellaRow) -> Self {
        Umbrella::new(
            UmbrellaId::new(value.id),
            ShopId::new(value.shop_id),
            UmbrellaAvailable::new(value.available),
        )
    }
}

pub(in crate::database) struct PgUmbrellaInternal;

impl PgUmbrellaInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &UmbrellaId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError> {
        let row = sqlx::query_as::<_, UmbrellaRow>(
            // language=postgresql
            r#"
            SELECT id, shop_id, available
            FROM umbrellas
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Umbrella::from))
    }

    async fn find_free_by_shop(
        con: &mut PgConnection,
        shop_id: &ShopId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError> {
        let row = sqlx::query_as::<_, UmbrellaRow>(
            // language=postgresql
            r#"
            SELECT id, shop_id, available
            FROM umbrellas
            WHERE shop_id = $1 AND available
            ORDER BY id
            LIMIT 1
            FOR UPDATE SKIP LOCKED
            "#,
        )
        .bind(shop_id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Umbrella::from))
    }

    async fn create(
        con: &mut PgConnection,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO umbrellas (id, shop_id, available)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(umbrella.id().as_ref())
        .bind(umbrella.shop_id().as_ref())
        .bind(umbrella.is_available())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(
        con: &mut PgConnection,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE umbrellas
            SET shop_id = $2, available = $3
            WHERE id = $1
            "#,
        )
        .bind(umbrella.id().as_ref())
        .bind(umbrella.shop_id().as_ref())
        .bind(umbrella.is_available())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
