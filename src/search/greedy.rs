use crate::prelude::*;

use core::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};

pub struct Greedy {
    n: usize,
}

struct Entry {
    h: usize,
    seq: u64,
    state: State,
}

// (h, seq) is a total order: the insertion counter never repeats, so ties
// on h break first-in-first-out regardless of heap internals.
impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.h, self.seq).cmp(&(other.h, other.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Entry {}

impl Searcher for Greedy {
    fn init(n: usize) -> Self {
        Greedy { n }
    }

    fn search(&self, observer: &mut impl Observer) -> anyhow::Result<Option<State>> {
        let start = State::empty(self.n);

        let mut seq = 0u64;
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(Entry {
            h: start.heuristic(),
            seq,
            state: start,
        }));

        let mut explored = HashSet::new();

        while let Some(Reverse(entry)) = frontier.pop() {
            observer.observe(
                &entry.state,
                StepMetrics::Greedy {
                    h: entry.h,
                    depth: entry.state.depth(),
                },
            );

            if entry.state.is_goal() {
                return Ok(Some(entry.state));
            }

            explored.insert(entry.state.clone());

            for action in entry.state.actions() {
                let child = entry.state.apply(action)?;
                if explored.contains(&child) {
                    continue;
                }

                seq += 1;
                frontier.push(Reverse(Entry {
                    h: child.heuristic(),
                    seq,
                    state: child,
                }));
            }
        }

        Ok(None)
    }
}
