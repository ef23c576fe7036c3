pub use crate::action::*;
pub use crate::board::*;
pub use crate::console::*;
pub use crate::observer::*;
pub use crate::search::*;

#[cfg(test)]
pub use crate::test::*;

pub use std::time::Duration;
