use vodca::{AsRefln, Fromln};

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct HistoryCost(i32);

impl HistoryCost {
    pub fn new(cost: impl Into<i32>) -> Self {
        Self(cost.into())
    }

    /// Rentals are not charged yet.
    pub fn free() -> Self {
        Self(0)
    }
}
