use crate::prelude::*;

use core::fmt;

// Searches hand every visited state to an observer before continuing. The
// call blocks the search until it returns; ordering guarantees never
// depend on how long the observer takes.
pub trait Observer {
    fn observe(&mut self, state: &State, metrics: StepMetrics);
}

impl<F> Observer for F
where
    F: FnMut(&State, StepMetrics),
{
    fn observe(&mut self, state: &State, metrics: StepMetrics) {
        (self)(state, metrics)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepMetrics {
    Iddfs { depth: usize, limit: usize },
    Greedy { h: usize, depth: usize },
    AStar { f: usize, g: usize, h: usize, depth: usize },
}

impl fmt::Display for StepMetrics {
    fn fmt(&self, out: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StepMetrics::Iddfs { depth, limit } => {
                write!(out, "depth {} / limit {}", depth, limit)
            }
            StepMetrics::Greedy { h, depth } => write!(out, "h={} placed={}", h, depth),
            StepMetrics::AStar { f, g, h, depth } => {
                write!(out, "f={} g={} h={} placed={}", f, g, h, depth)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closures_are_observers() {
        let state = State::empty(2);

        let mut steps = 0;
        let mut observer = |_: &State, _: StepMetrics| steps += 1;
        observer.observe(&state, StepMetrics::Greedy { h: 2, depth: 0 });
        observer.observe(&state, StepMetrics::Greedy { h: 2, depth: 0 });
        drop(observer);

        assert_eq!(steps, 2);
    }

    #[test]
    fn metrics_render_as_status_lines() {
        assert_eq!(
            StepMetrics::Iddfs { depth: 2, limit: 3 }.to_string(),
            "depth 2 / limit 3",
        );
        assert_eq!(
            StepMetrics::Greedy { h: 1, depth: 3 }.to_string(),
            "h=1 placed=3",
        );
        assert_eq!(
            StepMetrics::AStar { f: 4, g: 1, h: 3, depth: 1 }.to_string(),
            "f=4 g=1 h=3 placed=1",
        );
    }
}
