mod cleared_at;
mod cost;
mod id;
mod process;

pub use self::{cleared_at::*, cost::*, id::*, process::*};
use crate::entity::{CreatedAt, MemberId, Shop, UmbrellaId};
use destructure::{Destructure, Mutation};
use vodca::References;

/// One rental of one umbrella by one member.
///
/// A history starts as [`Process::Use`] with neither `end_shop` nor `cleared_at`,
/// and moves to [`Process::Clear`] exactly once, when the umbrella comes back.
#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct History {
    id: HistoryId,
    cost: HistoryCost,
    process: Process,
    from_shop: Shop,
    end_shop: Option<Shop>,
    member_id: MemberId,
    umbrella_id: UmbrellaId,
    created_at: CreatedAt<History>,
    cleared_at: Option<ClearedAt>,
}

impl History {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: HistoryId,
        cost: HistoryCost,
        process: Process,
        from_shop: Shop,
        end_shop: Option<Shop>,
        member_id: MemberId,
        umbrella_id: UmbrellaId,
        created_at: CreatedAt<History>,
        cleared_at: Option<ClearedAt>,
    ) -> Self {
        Self {
            id,
            cost,
            process,
            from_shop,
            end_shop,
            member_id,
            umbrella_id,
            created_at,
            cleared_at,
        }
    }

    pub fn is_active(&self) -> bool {
        self.process != Process::Clear
    }
}
