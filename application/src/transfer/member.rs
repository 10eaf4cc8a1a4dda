use kernel::prelude::entity::{MemberNickname, PhoneNumber};

#[derive(Debug, Clone)]
pub struct RegisterMemberDto {
    pub nickname: MemberNickname,
    pub phone_number: PhoneNumber,
}
