mod history;
mod member;
mod shop;

pub use self::{history::*, member::*, shop::*};
