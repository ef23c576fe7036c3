use crate::prelude::*;

use core::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};

pub struct AStar {
    n: usize,
}

struct Entry {
    f: usize,
    seq: u64,
    state: State,
    g: usize,
    h: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.f, self.seq).cmp(&(other.f, other.seq))
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

impl Searcher for AStar {
    fn init(n: usize) -> Self {
        AStar { n }
    }

    fn search(&self, observer: &mut impl Observer) -> anyhow::Result<Option<State>> {
        let start = State::empty(self.n);
        let h = start.heuristic();

        let mut seq = 0u64;
        let mut frontier = BinaryHeap::new();
        frontier.push(Reverse(Entry {
            f: h,
            seq,
            state: start,
            g: 0,
            h,
        }));

        // Best g at which each state was finalized. A popped entry that
        // lost this race is stale and skipped without expansion.
        let mut best_g: HashMap<State, usize> = HashMap::new();

        while let Some(Reverse(entry)) = frontier.pop() {
            observer.observe(
                &entry.state,
                StepMetrics::AStar {
                    f: entry.f,
                    g: entry.g,
                    h: entry.h,
                    depth: entry.state.depth(),
                },
            );

            if entry.state.is_goal() {
                return Ok(Some(entry.state));
            }

            if best_g.get(&entry.state).map_or(false, |&g| g <= entry.g) {
                continue;
            }
            best_g.insert(entry.state.clone(), entry.g);

            for action in entry.state.actions() {
                let child = entry.state.apply(action)?;
                let g = entry.g + 1;
                if best_g.get(&child).map_or(false, |&known| known <= g) {
                    continue;
                }

                let h = child.heuristic();
                seq += 1;
                frontier.push(Reverse(Entry {
                    f: g + h,
                    seq,
                    state: child,
                    g,
                    h,
                }));
            }
        }

        Ok(None)
    }
}
