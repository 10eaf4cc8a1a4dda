use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::update::{DependOnMemberModifier, MemberModifier};
use kernel::prelude::entity::{DestructMember, Member, MemberId};
use kernel::KernelError;

use crate::transfer::RegisterMemberDto;

#[async_trait::async_trait]
pub trait RegisterMemberService: 'static + Sync + Send + DependOnMemberModifier {
    async fn register_member(
        &self,
        dto: RegisterMemberDto,
    ) -> error_stack::Result<MemberId, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let member = Member::new(
            MemberId::new(Uuid::new_v4()),
            dto.nickname,
            dto.phone_number,
        );
        self.member_modifier()
            .create(&mut connection, &member)
            .await?;
        connection.commit().await?;

        let DestructMember { id, .. } = member.into_destruct();
        Ok(id)
    }
}

impl<T> RegisterMemberService for T where T: DependOnMemberModifier {}
