use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct MemberNickname(String);

impl MemberNickname {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self(nickname.into())
    }

    pub fn parse(raw: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(Report::new(KernelError::Validation)
                .attach_printable("nickname must not be blank"));
        }
        Ok(Self(raw))
    }
}

#[cfg(test)]
mod test {
    use super::MemberNickname;

    #[test]
    fn blank_is_rejected() {
        assert!(MemberNickname::parse("").is_err());
        assert!(MemberNickname::parse("   ").is_err());
        assert!(MemberNickname::parse("rainy").is_ok());
    }
}
