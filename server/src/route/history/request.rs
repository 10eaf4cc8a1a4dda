use crate::controller::Intake;
use application::transfer::{GetHistoryDto, RentUmbrellaDto, ReturnUmbrellaDto};
use kernel::prelude::entity::{MemberId, ShopId};
use uuid::Uuid;

#[derive(Debug)]
pub struct RentUmbrellaRequest {
    member_id: MemberId,
    shop_id: Uuid,
}

impl RentUmbrellaRequest {
    pub fn new(member_id: MemberId, shop_id: Uuid) -> Self {
        Self { member_id, shop_id }
    }
}

#[derive(Debug)]
pub struct ReturnUmbrellaRequest {
    member_id: MemberId,
    shop_id: Uuid,
}

impl ReturnUmbrellaRequest {
    pub fn new(member_id: MemberId, shop_id: Uuid) -> Self {
        Self { member_id, shop_id }
    }
}

#[derive(Debug)]
pub struct GetHistoryRequest {
    member_id: MemberId,
}

impl GetHistoryRequest {
    pub fn new(member_id: MemberId) -> Self {
        Self { member_id }
    }
}

pub struct Transformer;

impl Intake<RentUmbrellaRequest> for Transformer {
    type To = RentUmbrellaDto;
    fn emit(&self, RentUmbrellaRequest { member_id, shop_id }: RentUmbrellaRequest) -> Self::To {
        RentUmbrellaDto {
            member_id,
            shop_id: ShopId::new(shop_id),
        }
    }
}

impl Intake<ReturnUmbrellaRequest> for Transformer {
    type To = ReturnUmbrellaDto;
    fn emit(
        &self,
        ReturnUmbrellaRequest { member_id, shop_id }: ReturnUmbrellaRequest,
    ) -> Self::To {
        ReturnUmbrellaDto {
            member_id,
            shop_id: ShopId::new(shop_id),
        }
    }
}

impl Intake<GetHistoryRequest> for Transformer {
    type To = GetHistoryDto;
    fn emit(&self, GetHistoryRequest { member_id }: GetHistoryRequest) -> Self::To {
        GetHistoryDto { member_id }
    }
}
