use error_stack::Report;
use vodca::{AsRefln, Fromln};

use crate::KernelError;

#[derive(Debug, Clone, Eq, PartialEq, Fromln, AsRefln)]
pub struct ShopName(String);

impl ShopName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn parse(raw: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(
                Report::new(KernelError::Validation).attach_printable("shop name must not be blank")
            );
        }
        Ok(Self(raw))
    }
}
