use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::ShopQuery;
use kernel::interface::update::ShopModifier;
use kernel::prelude::entity::{Shop, ShopId, ShopName};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresShopRepository;

#[async_trait::async_trait]
impl ShopQuery for PostgresShopRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &ShopId,
    ) -> error_stack::Result<Option<Shop>, KernelError> {
        PgShopInternal::find_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl ShopModifier for PostgresShopRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        shop: &Shop,
    ) -> error_stack::Result<(), KernelError> {
        PgShopInternal::create(con, shop).await
    }
}

#[derive(sqlx::FromRow)]
struct ShopRow {
    id: Uuid,
    name: String,
}

impl From<ShopRow> for Shop {
    fn from(value: ShopRow) -> Self {
        Shop::new(ShopId::new(value.id), ShopName::new(value.name))
    }
}

pub(in crate::database) struct PgShopInternal;

impl PgShopInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &ShopId,
    ) -> error_stack::Result<Option<Shop>, KernelError> {
        let row = sqlx::query_as::<_, ShopRow>(
            // language=postgresql
            r#"
            SELECT id, name
            FROM shops
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Shop::from))
    }

    async fn create(con: &mut PgConnection, shop: &Shop) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO shops (id, name)
            VALUES ($1, $2)
            "#,
        )
        .bind(shop.id().as_ref())
        .bind(shop.name().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::ShopQuery;
    use kernel::interface::update::ShopModifier;
    use kernel::prelude::entity::{Shop, ShopId, ShopName};
    use kernel::KernelError;

    use crate::database::postgres::{PostgresDatabase, PostgresShopRepository};

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn create_and_find() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let id = ShopId::new(Uuid::new_v4());
        let shop = Shop::new(id.clone(), ShopName::new("Gangnam"));
        PostgresShopRepository.create(&mut con, &shop).await?;

        let found = PostgresShopRepository.find_by_id(&mut con, &id).await?;
        assert_eq!(found, Some(shop));
        Ok(())
    }
}
