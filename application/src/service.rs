mod history;
mod member;
mod shop;
mod umbrella;

pub use self::{history::*, member::*, shop::*, umbrella::*};

use error_stack::Report;
use kernel::interface::database::{Transaction, TransactionOf};
use kernel::interface::query::{DependOnMemberQuery, DependOnShopQuery, MemberQuery, ShopQuery};
use kernel::prelude::entity::{Member, MemberId, Shop, ShopId};
use kernel::KernelError;

pub(crate) async fn find_shop<S>(
    service: &S,
    con: &mut TransactionOf<S>,
    id: &ShopId,
) -> error_stack::Result<Shop, KernelError>
where
    S: DependOnShopQuery + ?Sized,
{
    service
        .shop_query()
        .find_by_id(con, id)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::ShopNotFound).attach_printable(format!("shop: {id:?}"))
        })
}

pub(crate) async fn find_member<S>(
    service: &S,
    con: &mut TransactionOf<S>,
    id: &MemberId,
) -> error_stack::Result<Member, KernelError>
where
    S: DependOnMemberQuery + ?Sized,
{
    service
        .member_query()
        .find_by_id(con, id)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::MemberNotFound).attach_printable(format!("member: {id:?}"))
        })
}

pub(crate) async fn lock_member<S>(
    service: &S,
    con: &mut TransactionOf<S>,
    id: &MemberId,
) -> error_stack::Result<Member, KernelError>
where
    S: DependOnMemberQuery + ?Sized,
{
    service
        .member_query()
        .lock_by_id(con, id)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::MemberNotFound).attach_printable(format!("member: {id:?}"))
        })
}

/// Commits on success and rolls back on failure, keeping the original failure.
pub(crate) async fn settle<C, T>(
    connection: C,
    result: error_stack::Result<T, KernelError>,
) -> error_stack::Result<T, KernelError>
where
    C: Transaction,
    T: Send,
{
    match result {
        Ok(value) => {
            connection.commit().await?;
            Ok(value)
        }
        Err(report) => {
            if let Err(rollback) = connection.roll_back().await {
                tracing::error!("Failed to roll back: {rollback:?}");
            }
            Err(report)
        }
    }
}
