mod history;
mod member;
mod shop;
mod umbrella;

pub use self::{history::*, member::*, shop::*, umbrella::*};
