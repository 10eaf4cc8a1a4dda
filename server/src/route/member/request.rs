use crate::controller::TryIntake;
use application::transfer::RegisterMemberDto;
use error_stack::Report;
use kernel::prelude::entity::{MemberNickname, PhoneNumber};
use kernel::KernelError;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterMemberRequest {
    nickname: String,
    phone_number: String,
}

pub struct Transformer;

impl TryIntake<RegisterMemberRequest> for Transformer {
    type To = RegisterMemberDto;
    type Error = Report<KernelError>;
    fn emit(
        &self,
        RegisterMemberRequest {
            nickname,
            phone_number,
        }: RegisterMemberRequest,
    ) -> Result<Self::To, Self::Error> {
        Ok(RegisterMemberDto {
            nickname: MemberNickname::parse(nickname)?,
            phone_number: PhoneNumber::parse(phone_number)?,
        })
    }
}
