use error_stack::Report;
use sqlx::PgConnection;
use time::OffsetDateTime;
use uuid::Uuid;

use kernel::interface::query::HistoryQuery;
use kernel::interface::update::HistoryModifier;
use kernel::prelude::entity::{
    ClearedAt, CreatedAt, History, HistoryCost, HistoryId, MemberId, Process, Shop, ShopId,
    ShopName, UmbrellaId,
};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresHistoryRepository;

#[async_trait::async_trait]
impl HistoryQuery for PostgresHistoryRepository {
    type Transaction = PostgresTransaction;

    async fn find_all_by_member(
        &self,
        con: &mut PostgresTransaction,
        member_id: &MemberId,
    ) -> error_stack::Result<Vec<History>, KernelError> {
        PgHistoryInternal::find_all_by_member(con, member_id).await
    }
}

#[async_trait::async_trait]
impl HistoryModifier for PostgresHistoryRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        history: &History,
    ) -> error_stack::Result<(), KernelError> {
        PgHistoryInternal::create(con, history).await
    }

    async fn update(
        &self,
        con: &mut PostgresTransaction,
        history: &History,
    ) -> error_stack::Result<(), KernelError> {
        PgHistoryInternal::update(con, history).await
    }
}

#[derive(sqlx::FromRow)]
struct HistoryRow {
    id: Uuid,
    cost: i32,
    process: String,
    member_id: Uuid,
    umbrella_id: Uuid,
    created_at: OffsetDateTime,
    cleared_at: Option<OffsetDateTime>,
    from_shop_id: Uuid,
    from_shop_name: String,
    end_shop_id: Option<Uuid>,
    end_shop_name: Option<String>,
}

impl TryFrom<HistoryRow> for History {
    type Error = Report<KernelError>;
    fn try_from(value: HistoryRow) -> Result<Self, Self::Error> {
        let process = value.process.parse::<Process>()?;
        let from_shop = Shop::new(
            ShopId::new(value.from_shop_id),
            ShopName::new(value.from_shop_name),
        );
        let end_shop = value
            .end_shop_id
            .zip(value.end_shop_name)
            .map(|(id, name)| Shop::new(ShopId::new(id), ShopName::new(name)));
        Ok(History::new(
            HistoryId::new(value.id),
            HistoryCost::new(value.cost),
            process,
            from_shop,
            end_shop,
            MemberId::new(value.member_id),
            UmbrellaId::new(value.umbrella_id),
            CreatedAt::new(value.created_at),
            value.cleared_at.map(ClearedAt::new),
        ))
    }
}

fn end_shop_id(history: &History) -> Option<Uuid> {
    history
        .end_shop()
        .as_ref()
        .map(|shop| Uuid::from(shop.id().clone()))
}

fn cleared_at(history: &History) -> Option<OffsetDateTime> {
    history.cleared_at().clone().map(OffsetDateTime::from)
}

pub(in crate::database) struct PgHistoryInternal;

impl PgHistoryInternal {
    async fn find_all_by_member(
        con: &mut PgConnection,
        member_id: &MemberId,
    ) -> error_stack::Result<Vec<History>, KernelError> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            // language=postgresql
            r#"
            SELECT h.id, h.cost, h.process, h.member_id, h.umbrella_id, h.created_at, h.cleared_at,
                   fs.id AS from_shop_id, fs.name AS from_shop_name,
                   es.id AS end_shop_id, es.name AS end_shop_name
            FROM histories h
            JOIN shops fs ON fs.id = h.from_shop_id
            LEFT JOIN shops es ON es.id = h.end_shop_id
            WHERE h.member_id = $1
            ORDER BY h.created_at DESC
            "#,
        )
        .bind(member_id.as_ref())
        .fetch_all(con)
        .await
        .convert_error()?;
        rows.into_iter().map(History::try_from).collect()
    }

    async fn create(con: &mut PgConnection, history: &History) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO histories (id, cost, process, from_shop_id, end_shop_id, member_id, umbrella_id, created_at, cleared_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(history.id().as_ref())
        .bind(history.cost().as_ref())
        .bind(history.process().as_str())
        .bind(history.from_shop().id().as_ref())
        .bind(end_shop_id(history))
        .bind(history.member_id().as_ref())
        .bind(history.umbrella_id().as_ref())
        .bind(history.created_at().as_ref())
        .bind(cleared_at(history))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }

    async fn update(con: &mut PgConnection, history: &History) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            UPDATE histories
            SET process = $2, end_shop_id = $3, cleared_at = $4
            WHERE id = $1
            "#,
        )
        .bind(history.id().as_ref())
        .bind(history.process().as_str())
        .bind(end_shop_id(history))
        .bind(cleared_at(history))
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use time::Duration;
    use uuid::Uuid;

    use kernel::interface::database::DatabaseConnection;
    use kernel::interface::query::HistoryQuery;
    use kernel::interface::update::{
        HistoryModifier, MemberModifier, ShopModifier, UmbrellaModifier,
    };
    use kernel::prelude::entity::{
        ClearedAt, CreatedAt, History, HistoryCost, HistoryId, Member, MemberId, MemberNickname,
        PhoneNumber, Process, Shop, ShopId, ShopName, Umbrella, UmbrellaAvailable, UmbrellaId,
    };
    use kernel::KernelError;

    use crate::database::postgres::{
        PostgresDatabase, PostgresHistoryRepository, PostgresMemberRepository,
        PostgresShopRepository, PostgresUmbrellaRepository,
    };

    #[test_with::env(POSTGRES_TEST)]
    #[tokio::test]
    async fn histories_are_listed_newest_first() -> error_stack::Result<(), KernelError> {
        let db = PostgresDatabase::new().await?;
        db.migrate().await?;
        let mut con = db.transact().await?;

        let member = Member::new(
            MemberId::new(Uuid::new_v4()),
            MemberNickname::new("history"),
            PhoneNumber::new("090-1234-5678"),
        );
        PostgresMemberRepository.create(&mut con, &member).await?;
        let from = Shop::new(ShopId::new(Uuid::new_v4()), ShopName::new("from"));
        let end = Shop::new(ShopId::new(Uuid::new_v4()), ShopName::new("end"));
        PostgresShopRepository.create(&mut con, &from).await?;
        PostgresShopRepository.create(&mut con, &end).await?;
        let umbrella = Umbrella::new(
            UmbrellaId::new(Uuid::new_v4()),
            from.id().clone(),
            UmbrellaAvailable::new(false),
        );
        PostgresUmbrellaRepository
            .create(&mut con, &umbrella)
            .await?;

        let created = time::OffsetDateTime::from(CreatedAt::<History>::now());
        let older = History::new(
            HistoryId::new(Uuid::new_v4()),
            HistoryCost::free(),
            Process::Clear,
            from.clone(),
            Some(end.clone()),
            member.id().clone(),
            umbrella.id().clone(),
            CreatedAt::new(created - Duration::hours(1)),
            Some(ClearedAt::new(created - Duration::minutes(30))),
        );
        let mut newer = History::new(
            HistoryId::new(Uuid::new_v4()),
            HistoryCost::free(),
            Process::Use,
            from.clone(),
            None,
            member.id().clone(),
            umbrella.id().clone(),
            CreatedAt::new(created),
            None,
        );
        PostgresHistoryRepository.create(&mut con, &older).await?;
        PostgresHistoryRepository.create(&mut con, &newer).await?;

        let found = PostgresHistoryRepository
            .find_all_by_member(&mut con, member.id())
            .await?;
        assert_eq!(found, vec![newer.clone(), older.clone()]);

        newer.substitute(|history| {
            *history.process = Process::Clear;
            *history.end_shop = Some(end.clone());
            *history.cleared_at = Some(ClearedAt::new(created));
        });
        PostgresHistoryRepository.update(&mut con, &newer).await?;

        let found = PostgresHistoryRepository
            .find_all_by_member(&mut con, member.id())
            .await?;
        assert_eq!(found, vec![newer, older]);
        Ok(())
    }
}
