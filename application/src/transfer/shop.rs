use kernel::prelude::entity::ShopName;

#[derive(Debug, Clone)]
pub struct RegisterShopDto {
    pub name: ShopName,
}
