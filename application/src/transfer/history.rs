use time::macros::datetime;
use time::OffsetDateTime;

use kernel::prelude::entity::{History, Member, MemberId, Process, Shop, ShopId};

/// Shown as `cleared_at` while an umbrella is still out.
pub const UNCLEARED_AT: OffsetDateTime = datetime!(9999-12-31 23:59 UTC);

/// Where the `end_shop` name of an assembled history comes from.
#[derive(Debug, Clone, Copy)]
pub enum EndShop<'a> {
    /// Whatever the history recorded, or empty.
    Stored,
    /// The shop the umbrella was just returned to.
    Returned(&'a Shop),
    /// Always empty.
    Pending,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub struct HistoryDto {
    pub member: String,
    pub from_shop: String,
    pub end_shop: String,
    pub created_at: OffsetDateTime,
    pub cleared_at: OffsetDateTime,
    pub process: Process,
}

impl HistoryDto {
    pub fn assemble(member: &Member, history: &History, end_shop: EndShop<'_>) -> Self {
        let end_shop = match end_shop {
            EndShop::Returned(shop) => Some(shop),
            EndShop::Stored => history.end_shop().as_ref(),
            EndShop::Pending => None,
        };
        Self {
            member: member.nickname().clone().into(),
            from_shop: history.from_shop().name().clone().into(),
            end_shop: end_shop
                .map(|shop| shop.name().clone().into())
                .unwrap_or_default(),
            created_at: history.created_at().clone().into(),
            cleared_at: history
                .cleared_at()
                .clone()
                .map(OffsetDateTime::from)
                .unwrap_or(UNCLEARED_AT),
            process: *history.process(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RentUmbrellaDto {
    pub member_id: MemberId,
    pub shop_id: ShopId,
}

#[derive(Debug, Clone)]
pub struct ReturnUmbrellaDto {
    pub member_id: MemberId,
    pub shop_id: ShopId,
}

#[derive(Debug, Clone)]
pub struct GetHistoryDto {
    pub member_id: MemberId,
}
