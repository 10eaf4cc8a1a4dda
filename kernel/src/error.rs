use std::fmt::Display;

use error_stack::Context;

#[derive(Debug)]
pub enum KernelError {
    ShopNotFound,
    MemberNotFound,
    NoAvailableUmbrella,
    NoActiveRental,
    AlreadyRenting,
    Validation,
    Unauthorized,
    Concurrency,
    Timeout,
    Internal,
}

impl Display for KernelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            KernelError::ShopNotFound => write!(f, "Shop not found"),
            KernelError::MemberNotFound => write!(f, "Member not found"),
            KernelError::NoAvailableUmbrella => write!(f, "No available umbrella in shop"),
            KernelError::NoActiveRental => write!(f, "No active rental to return"),
            KernelError::AlreadyRenting => write!(f, "Member already has an active rental"),
            KernelError::Validation => write!(f, "Invalid input"),
            KernelError::Unauthorized => write!(f, "Unauthorized"),
            KernelError::Concurrency => write!(f, "Concurrency error"),
            KernelError::Timeout => write!(f, "Process timed out"),
            KernelError::Internal => write!(f, "Internal kernel error"),
        }
    }
}

impl Context for KernelError {}
