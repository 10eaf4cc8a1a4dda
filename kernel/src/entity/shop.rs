mod id;
mod name;

pub use self::{id::*, name::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Shop {
    id: ShopId,
    name: ShopName,
}

impl Shop {
    pub fn new(id: ShopId, name: ShopName) -> Self {
        Self { id, name }
    }
}
