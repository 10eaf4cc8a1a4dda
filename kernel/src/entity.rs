mod common;
mod history;
mod member;
mod shop;
mod umbrella;

pub use self::{common::*, history::*, member::*, shop::*, umbrella::*};
