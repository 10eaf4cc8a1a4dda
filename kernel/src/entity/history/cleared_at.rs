use time::OffsetDateTime;
use vodca::{AsRefln, Fromln};

use crate::entity::common::now_in_micros;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln)]
pub struct ClearedAt(OffsetDateTime);

impl ClearedAt {
    pub fn new(time: impl Into<OffsetDateTime>) -> Self {
        Self(time.into())
    }

    pub fn now() -> Self {
        Self(now_in_micros())
    }
}
