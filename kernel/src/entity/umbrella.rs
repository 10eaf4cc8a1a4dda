mod available;
mod id;

pub use self::{available::*, id::*};
use crate::entity::ShopId;
use destructure::{Destructure, Mutation};
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure, Mutation)]
pub struct Umbrella {
    id: UmbrellaId,
    shop_id: ShopId,
    available: UmbrellaAvailable,
}

impl Umbrella {
    pub fn new(id: UmbrellaId, shop_id: ShopId, available: UmbrellaAvailable) -> Self {
        Self {
            id,
            shop_id,
            available,
        }
    }

    pub fn is_available(&self) -> bool {
        *self.available.as_ref()
    }
}
