use std::cmp::Reverse;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use error_stack::Report;

use time::OffsetDateTime;
use tokio::sync::{Mutex, OwnedMutexGuard};

use kernel::interface::database::{DatabaseConnection, Transaction};
use kernel::interface::query::{
    DependOnHistoryQuery, DependOnMemberQuery, DependOnShopQuery, DependOnUmbrellaQuery,
    HistoryQuery, MemberQuery, ShopQuery, UmbrellaQuery,
};
use kernel::interface::update::{
    DependOnHistoryModifier, DependOnMemberModifier, DependOnShopModifier,
    DependOnUmbrellaModifier, HistoryModifier, MemberModifier, ShopModifier, UmbrellaModifier,
};
use kernel::prelude::entity::{History, Member, MemberId, Shop, ShopId, Umbrella, UmbrellaId};
use kernel::KernelError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    pub members: Vec<Member>,
    pub shops: Vec<Shop>,
    pub umbrellas: Vec<Umbrella>,
    pub histories: Vec<History>,
}

/// Keeps everything in one locked store. A transaction holds the lock for its whole
/// lifetime and works on a copy that only replaces the store on commit.
#[derive(Clone, Default)]
pub struct MockDatabase {
    store: Arc<Mutex<Store>>,
    umbrella_modifier: MockUmbrellaModifier,
}

impl MockDatabase {
    /// Every later `UmbrellaModifier::update` fails with `Internal`.
    pub fn break_umbrella_updates(&self) {
        self.umbrella_modifier.broken.store(true, Ordering::SeqCst);
    }

    pub async fn snapshot(&self) -> Store {
        self.store.lock().await.clone()
    }

    pub async fn alter(&self, f: impl FnOnce(&mut Store)) {
        f(&mut *self.store.lock().await)
    }
}

pub struct MockTransaction {
    guard: OwnedMutexGuard<Store>,
    working: Store,
}

#[async_trait::async_trait]
impl DatabaseConnection for MockDatabase {
    type Transaction = MockTransaction;
    async fn transact(&self) -> error_stack::Result<Self::Transaction, KernelError> {
        let guard = Arc::clone(&self.store).lock_owned().await;
        let working = guard.clone();
        Ok(MockTransaction { guard, working })
    }
}

#[async_trait::async_trait]
impl Transaction for MockTransaction {
    async fn commit(self) -> error_stack::Result<(), KernelError> {
        let MockTransaction { mut guard, working } = self;
        *guard = working;
        Ok(())
    }

    async fn roll_back(self) -> error_stack::Result<(), KernelError> {
        Ok(())
    }
}

pub struct MockRepository;

#[async_trait::async_trait]
impl MemberQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError> {
        Ok(con
            .working
            .members
            .iter()
            .find(|member| member.id() == id)
            .cloned())
    }

    async fn lock_by_id(
        &self,
        con: &mut MockTransaction,
        id: &MemberId,
    ) -> error_stack::Result<Option<Member>, KernelError> {
        MemberQuery::find_by_id(self, con, id).await
    }
}

#[async_trait::async_trait]
impl MemberModifier for MockRepository {
    type Transaction = MockTransaction;
    async fn create(
        &self,
        con: &mut MockTransaction,
        member: &Member,
    ) -> error_stack::Result<(), KernelError> {
        con.working.members.push(member.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl ShopQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &ShopId,
    ) -> error_stack::Result<Option<Shop>, KernelError> {
        Ok(con
            .working
            .shops
            .iter()
            .find(|shop| shop.id() == id)
            .cloned())
    }
}

#[async_trait::async_trait]
impl ShopModifier for MockRepository {
    type Transaction = MockTransaction;
    async fn create(
        &self,
        con: &mut MockTransaction,
        shop: &Shop,
    ) -> error_stack::Result<(), KernelError> {
        con.working.shops.push(shop.clone());
        Ok(())
    }
}

#[async_trait::async_trait]
impl UmbrellaQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_by_id(
        &self,
        con: &mut MockTransaction,
        id: &UmbrellaId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError> {
        Ok(con
            .working
            .umbrellas
            .iter()
            .find(|umbrella| umbrella.id() == id)
            .cloned())
    }

    async fn find_free_by_shop(
        &self,
        con: &mut MockTransaction,
        shop_id: &ShopId,
    ) -> error_stack::Result<Option<Umbrella>, KernelError> {
        Ok(con
            .working
            .umbrellas
            .iter()
            .filter(|umbrella| umbrella.shop_id() == shop_id && umbrella.is_available())
            .min_by_key(|umbrella| umbrella.id().clone())
            .cloned())
    }
}

#[derive(Clone, Default)]
pub struct MockUmbrellaModifier {
    broken: Arc<AtomicBool>,
}

#[async_trait::async_trait]
impl UmbrellaModifier for MockUmbrellaModifier {
    type Transaction = MockTransaction;
    async fn create(
        &self,
        con: &mut MockTransaction,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError> {
        con.working.umbrellas.push(umbrella.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        umbrella: &Umbrella,
    ) -> error_stack::Result<(), KernelError> {
        if self.broken.load(Ordering::SeqCst) {
            return Err(Report::new(KernelError::Internal)
                .attach_printable(format!("umbrella update refused: {:?}", umbrella.id())));
        }
        if let Some(stored) = con
            .working
            .umbrellas
            .iter_mut()
            .find(|stored| stored.id() == umbrella.id())
        {
            *stored = umbrella.clone();
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl HistoryQuery for MockRepository {
    type Transaction = MockTransaction;
    async fn find_all_by_member(
        &self,
        con: &mut MockTransaction,
        member_id: &MemberId,
    ) -> error_stack::Result<Vec<History>, KernelError> {
        // Reversed first so that equal timestamps still come out newest first.
        let mut histories = con
            .working
            .histories
            .iter()
            .rev()
            .filter(|history| history.member_id() == member_id)
            .cloned()
            .collect::<Vec<_>>();
        histories
            .sort_by_key(|history| Reverse(OffsetDateTime::from(history.created_at().clone())));
        Ok(histories)
    }
}

#[async_trait::async_trait]
impl HistoryModifier for MockRepository {
    type Transaction = MockTransaction;
    async fn create(
        &self,
        con: &mut MockTransaction,
        history: &History,
    ) -> error_stack::Result<(), KernelError> {
        con.working.histories.push(history.clone());
        Ok(())
    }

    async fn update(
        &self,
        con: &mut MockTransaction,
        history: &History,
    ) -> error_stack::Result<(), KernelError> {
        if let Some(stored) = con
            .working
            .histories
            .iter_mut()
            .find(|stored| stored.id() == history.id())
        {
            *stored = history.clone();
        }
        Ok(())
    }
}

impl DependOnMemberQuery for MockDatabase {
    type MemberQuery = MockRepository;
    fn member_query(&self) -> &Self::MemberQuery {
        &MockRepository
    }
}

impl DependOnMemberModifier for MockDatabase {
    type MemberModifier = MockRepository;
    fn member_modifier(&self) -> &Self::MemberModifier {
        &MockRepository
    }
}

impl DependOnShopQuery for MockDatabase {
    type ShopQuery = MockRepository;
    fn shop_query(&self) -> &Self::ShopQuery {
        &MockRepository
    }
}

impl DependOnShopModifier for MockDatabase {
    type ShopModifier = MockRepository;
    fn shop_modifier(&self) -> &Self::ShopModifier {
        &MockRepository
    }
}

impl DependOnUmbrellaQuery for MockDatabase {
    type UmbrellaQuery = MockRepository;
    fn umbrella_query(&self) -> &Self::UmbrellaQuery {
        &MockRepository
    }
}

impl DependOnUmbrellaModifier for MockDatabase {
    type UmbrellaModifier = MockUmbrellaModifier;
    fn umbrella_modifier(&self) -> &Self::UmbrellaModifier {
        &self.umbrella_modifier
    }
}

impl DependOnHistoryQuery for MockDatabase {
    type HistoryQuery = MockRepository;
    fn history_query(&self) -> &Self::HistoryQuery {
        &MockRepository
    }
}

impl DependOnHistoryModifier for MockDatabase {
    type HistoryModifier = MockRepository;
    fn history_modifier(&self) -> &Self::HistoryModifier {
        &MockRepository
    }
}
