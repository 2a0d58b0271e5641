pub mod pager;

pub use pager::{Failure, Pager, PagerAction, PagerPhase};
