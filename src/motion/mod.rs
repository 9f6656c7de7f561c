//! Browser-independent motion logic: range mapping, springs, reveal latch
//! and pointer follower state. The components wire these to DOM events.

mod pointer;
mod range;
mod reveal;
mod spring;

pub use pointer::*;
pub use range::RangeMap;
pub use reveal::RevealLatch;
pub use spring::{Spring, Spring2};
