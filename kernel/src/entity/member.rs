mod id;
mod nickname;
mod phone_number;

pub use self::{id::*, nickname::*, phone_number::*};
use destructure::Destructure;
use vodca::References;

#[derive(Debug, Clone, Eq, PartialEq, References, Destructure)]
pub struct Member {
    id: MemberId,
    nickname: MemberNickname,
    phone_number: PhoneNumber,
}

impl Member {
    pub fn new(id: MemberId, nickname: MemberNickname, phone_number: PhoneNumber) -> Self {
        Self {
            id,
            nickname,
            phone_number,
        }
    }
}
