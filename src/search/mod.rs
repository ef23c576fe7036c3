use crate::prelude::*;

use enum_iterator::Sequence;

mod iddfs;
pub use iddfs::*;

mod greedy;
pub use greedy::*;

mod astar;
pub use astar::*;

// A searcher owns nothing but the board size. Frontier and bookkeeping
// live inside a single `search` call, so runs never interfere.
pub trait Searcher: Sized {
    fn init(n: usize) -> Self;

    fn search(&self, observer: &mut impl Observer) -> anyhow::Result<Option<State>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum Strategy {
    Iddfs,
    Greedy,
    AStar,
}

impl Strategy {
    pub fn run(self, n: usize, observer: &mut impl Observer) -> anyhow::Result<Option<State>> {
        match self {
            Strategy::Iddfs => Iddfs::init(n).search(observer),
            Strategy::Greedy => Greedy::init(n).search(observer),
            Strategy::AStar => AStar::init(n).search(observer),
        }
    }
}

impl core::fmt::Display for Strategy {
    fn fmt(&self, out: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            Strategy::Iddfs => write!(out, "ids"),
            Strategy::Greedy => write!(out, "greedy"),
            Strategy::AStar => write!(out, "a*"),
        }
    }
}
