use std::ops::RangeInclusive;

use error_stack::Report;
use serde::{Deserialize, Serialize};
use vodca::{AsRefln, Fromln};

use crate::KernelError;

/// A phone number in `NN(N)-NNN(N)-NNNN` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Fromln, AsRefln, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    pub fn parse(raw: impl Into<String>) -> error_stack::Result<Self, KernelError> {
        let raw = raw.into();
        if !is_well_formed(&raw) {
            return Err(Report::new(KernelError::Validation)
                .attach_printable(format!("phone number does not match format: {raw}")));
        }
        Ok(Self(raw))
    }
}

fn is_well_formed(raw: &str) -> bool {
    let groups = raw.split('-').collect::<Vec<_>>();
    let [area, exchange, line] = groups.as_slice() else {
        return false;
    };
    let digits = |group: &str, len: RangeInclusive<usize>| {
        len.contains(&group.len()) && group.bytes().all(|b| b.is_ascii_digit())
    };
    digits(area, 2..=3) && digits(exchange, 3..=4) && digits(line, 4..=4)
}
