use kernel::prelude::entity::ShopId;

#[derive(Debug, Clone)]
pub struct StockUmbrellaDto {
    pub shop_id: ShopId,
    pub amount: i32,
}
