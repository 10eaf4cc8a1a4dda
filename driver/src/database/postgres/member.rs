use sqlx::PgConnection;
use uuid::Uuid;

use kernel::interface::query::MemberQuery;
use kernel::interface::update::MemberModifier;
use kernel::prelude::entity::{Member, MemberId, MemberNickname, PhoneNumber};
use kernel::KernelError;

use crate::database::postgres::PostgresTransaction;
use crate::error::ConvertError;

pub struct PostgresMemberRepository;

#[async_trait::async_trait]
impl MemberQuery for PostgresMemberRepository {
    type Transaction = PostgresTransaction;

    async fn find_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError> {
        PgMemberInternal::find_by_id(con, id).await
    }

    async fn lock_by_id(
        &self,
        con: &mut PostgresTransaction,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError> {
        PgMemberInternal::lock_by_id(con, id).await
    }
}

#[async_trait::async_trait]
impl MemberModifier for PostgresMemberRepository {
    type Transaction = PostgresTransaction;

    async fn create(
        &self,
        con: &mut PostgresTransaction,
        member: &Member,
    ) -> error_stack::Result<(), KernelError> {
        PgMemberInternal::create(con, member).await
    }
}

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: Uuid,
    nickname: String,
    phone_number: String,
}

impl From<MemberRow> for Member {
    fn from(value: MemberRow) -> Self {
        Member::new(
            MemberId::new(value.id),
            MemberNickname::new(value.nickname),
            PhoneNumber::new(value.phone_number),
        )
    }
}

pub(in crate::database) struct PgMemberInternal;

impl PgMemberInternal {
    async fn find_by_id(
        con: &mut PgConnection,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError> {
        let row = sqlx::query_as::<_, MemberRow>(
            // language=postgresql
            r#"
            SELECT id, nickname, phone_number
            FROM members
            WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Member::from))
    }

    async fn lock_by_id(
        con: &mut PgConnection,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError> {
        let row = sqlx::query_as::<_, MemberRow>(
            // language=postgresql
            r#"
            SELECT id, nickname, phone_number
            FROM members
            WHERE id = $1
            FOR UPDATE
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(con)
        .await
        .convert_error()?;
        Ok(row.map(Member::from))
    }

    async fn create(con: &mut PgConnection, member: &Member) -> error_stack::Result<(), KernelError> {
        sqlx::query(
            // language=postgresql
            r#"
            INSERT INTO members (id, nickname, phone_number)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(member.id().as_ref())
        .bind(member.nickname().as_ref())
        .bind(member.phone_number().as_ref())
        .execute(con)
        .await
        .convert_error()?;
        Ok(())
    }
}
