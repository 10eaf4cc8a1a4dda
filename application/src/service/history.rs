use error_stack::Report;
use uuid::Uuid;

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection};
use kernel::interface::query::{
    DependOnHistoryQuery, DependOnMemberQuery, DependOnShopQuery, DependOnUmbrellaQuery,
    HistoryQuery, UmbrellaQuery,
};
use kernel::interface::update::{
    DependOnHistoryModifier, DependOnUmbrellaModifier, HistoryModifier, UmbrellaModifier,
};
use kernel::prelude::entity::{
    ClearedAt, CreatedAt, History, HistoryCost, HistoryId, Process, UmbrellaAvailable,
};
use kernel::KernelError;

use crate::service::{find_member, find_shop, lock_member, settle, AllocateUmbrellaService};
use crate::transfer::{EndShop, GetHistoryDto, HistoryDto, RentUmbrellaDto, ReturnUmbrellaDto};

#[async_trait::async_trait]
pub trait RentUmbrellaService:
    'static
    + Sync
    + Send
    + DependOnShopQuery
    + DependOnMemberQuery
    + DependOnHistoryQuery
    + DependOnHistoryModifier
    + DependOnUmbrellaModifier
    + AllocateUmbrellaService
{
    async fn rent_umbrella(
        &self,
        dto: RentUmbrellaDto,
    ) -> error_stack::Result<HistoryDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let rented = async {
            let shop = find_shop(self, &mut connection, &dto.shop_id).await?;
            let member = lock_member(self, &mut connection, &dto.member_id).await?;

            let histories = self
                .history_query()
                .find_all_by_member(&mut connection, member.id())
                .await?;
            if histories.iter().any(History::is_active) {
                return Err(Report::new(KernelError::AlreadyRenting)
                    .attach_printable(format!("member: {:?}", member.id())));
            }

            let mut umbrella = self.acquire_free_umbrella(&mut connection, &shop).await?;
            let history = History::new(
                HistoryId::new(Uuid::new_v4()),
                HistoryCost::free(),
                Process::Use,
                shop,
                None,
                member.id().clone(),
                umbrella.id().clone(),
                CreatedAt::now(),
                None,
            );
            self.history_modifier()
                .create(&mut connection, &history)
                .await?;

            umbrella.substitute(|umbrella| *umbrella.available = UmbrellaAvailable::new(false));
            self.umbrella_modifier()
                .update(&mut connection, &umbrella)
                .await?;

            tracing::info!(
                member = ?member.id(),
                umbrella = ?umbrella.id(),
                shop = ?history.from_shop().id(),
                "umbrella rented"
            );
            Ok::<_, Report<KernelError>>(HistoryDto::assemble(&member, &history, EndShop::Stored))
        }
        .await;

        settle(connection, rented).await
    }
}

impl<T> RentUmbrellaService for T where
    T: DependOnShopQuery
        + DependOnMemberQuery
        + DependOnHistoryQuery
        + DependOnHistoryModifier
        + DependOnUmbrellaModifier
        + AllocateUmbrellaService
{
}

#[async_trait::async_trait]
pub trait ReturnUmbrellaService:
    'static
    + Sync
    + Send
    + DependOnShopQuery
    + DependOnMemberQuery
    + DependOnHistoryQuery
    + DependOnHistoryModifier
    + DependOnUmbrellaQuery
    + DependOnUmbrellaModifier
{
    async fn return_umbrella(
        &self,
        dto: ReturnUmbrellaDto,
    ) -> error_stack::Result<HistoryDto, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let returned = async {
            let shop = find_shop(self, &mut connection, &dto.shop_id).await?;
            let member = lock_member(self, &mut connection, &dto.member_id).await?;

            // Oldest still-active history comes last in newest-first order.
            let mut history = self
                .history_query()
                .find_all_by_member(&mut connection, member.id())
                .await?
                .into_iter()
                .filter(History::is_active)
                .last()
                .ok_or_else(|| {
                    Report::new(KernelError::NoActiveRental)
                        .attach_printable(format!("member: {:?}", member.id()))
                })?;

            let mut umbrella = self
                .umbrella_query()
                .find_by_id(&mut connection, history.umbrella_id())
                .await?
                .ok_or_else(|| {
                    Report::new(KernelError::Internal).attach_printable(format!(
                        "umbrella {:?} of history {:?} does not exist",
                        history.umbrella_id(),
                        history.id()
                    ))
                })?;

            history.substitute(|history| *history.process = Process::Clear);
            umbrella.substitute(|umbrella| {
                *umbrella.available = UmbrellaAvailable::new(true);
                if *umbrella.shop_id != *shop.id() {
                    *umbrella.shop_id = shop.id().clone();
                }
            });
            history.substitute(|history| {
                *history.cleared_at = Some(ClearedAt::now());
                *history.end_shop = Some(shop.clone());
            });

            self.history_modifier()
                .update(&mut connection, &history)
                .await?;
            self.umbrella_modifier()
                .update(&mut connection, &umbrella)
                .await?;

            tracing::info!(
                member = ?member.id(),
                umbrella = ?umbrella.id(),
                from = ?history.from_shop().id(),
                to = ?shop.id(),
                "umbrella returned"
            );
            Ok::<_, Report<KernelError>>(HistoryDto::assemble(
                &member,
                &history,
                EndShop::Returned(&shop),
            ))
        }
        .await;

        settle(connection, returned).await
    }
}

impl<T> ReturnUmbrellaService for T where
    T: DependOnShopQuery
        + DependOnMemberQuery
        + DependOnHistoryQuery
        + DependOnHistoryModifier
        + DependOnUmbrellaQuery
        + DependOnUmbrellaModifier
{
}

#[async_trait::async_trait]
pub trait GetHistoryService:
    'static + Sync + Send + DependOnMemberQuery + DependOnHistoryQuery
{
    async fn history_list(
        &self,
        dto: GetHistoryDto,
    ) -> error_stack::Result<Vec<HistoryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let member = find_member(self, &mut connection, &dto.member_id).await?;
        let histories = self
            .history_query()
            .find_all_by_member(&mut connection, member.id())
            .await?;

        Ok(histories
            .iter()
            .map(|history| HistoryDto::assemble(&member, history, EndShop::Stored))
            .collect())
    }

    /// The rental currently in progress, if any.
    async fn rental_status(
        &self,
        dto: GetHistoryDto,
    ) -> error_stack::Result<Option<HistoryDto>, KernelError> {
        let mut connection = self.database_connection().transact().await?;

        let member = find_member(self, &mut connection, &dto.member_id).await?;
        let histories = self
            .history_query()
            .find_all_by_member(&mut connection, member.id())
            .await?;

        match histories.first() {
            Some(recent) if recent.is_active() => Ok(Some(HistoryDto::assemble(
                &member,
                recent,
                EndShop::Pending,
            ))),
            _ => Ok(None),
        }
    }
}

impl<T> GetHistoryService for T where T: DependOnMemberQuery + DependOnHistoryQuery {}
