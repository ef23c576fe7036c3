use crate::prelude::*;

pub struct Iddfs {
    n: usize,
}

// Cutoff means the limit stopped the descent somewhere, so a deeper sweep
// may still succeed; Failure means the subtree is exhausted outright.
enum Dls {
    Found(State),
    Cutoff,
    Failure,
}

impl Iddfs {
    fn depth_limited(
        &self,
        state: &State,
        limit: usize,
        observer: &mut impl Observer,
    ) -> anyhow::Result<Dls> {
        observer.observe(
            state,
            StepMetrics::Iddfs {
                depth: state.depth(),
                limit,
            },
        );

        if state.is_goal() {
            return Ok(Dls::Found(state.clone()));
        }
        if limit == 0 {
            return Ok(Dls::Cutoff);
        }

        let mut cutoff = false;
        for action in state.actions() {
            let child = state.apply(action)?;
            match self.depth_limited(&child, limit - 1, observer)? {
                Dls::Found(goal) => return Ok(Dls::Found(goal)),
                Dls::Cutoff => cutoff = true,
                Dls::Failure => {}
            }
        }

        Ok(if cutoff { Dls::Cutoff } else { Dls::Failure })
    }
}

impl Searcher for Iddfs {
    fn init(n: usize) -> Self {
        Iddfs { n }
    }

    fn search(&self, observer: &mut impl Observer) -> anyhow::Result<Option<State>> {
        let start = State::empty(self.n);

        // A solution sits at depth n, so limits past n are never needed.
        for limit in 0..=self.n {
            log::info!("ids: trying limit {}", limit);
            match self.depth_limited(&start, limit, observer)? {
                Dls::Found(goal) => return Ok(Some(goal)),
                Dls::Cutoff => {}
                // Exhausted below the limit without a single cutoff, so
                // deeper sweeps would only repeat the same tree.
                Dls::Failure => return Ok(None),
            }
        }

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn limit_zero_on_the_initial_state_is_a_cutoff() {
        let ids = Iddfs::init(4);
        let mut sink = |_: &State, _: StepMetrics| {};

        let outcome = ids
            .depth_limited(&State::empty(4), 0, &mut sink)
            .unwrap();
        assert!(matches!(outcome, Dls::Cutoff));
    }

    #[test]
    fn a_sufficient_limit_finds_the_diagonal_first() {
        let ids = Iddfs::init(4);
        let mut sink = |_: &State, _: StepMetrics| {};

        let outcome = ids
            .depth_limited(&State::empty(4), 4, &mut sink)
            .unwrap();
        match outcome {
            Dls::Found(goal) => assert_eq!(goal.columns(), &[0, 1, 2, 3]),
            _ => panic!("expected a solution at limit 4"),
        }
    }

    #[test]
    fn the_sweep_finds_the_diagonal_solution() {
        let mut sink = |_: &State, _: StepMetrics| {};
        let goal = Iddfs::init(4).search(&mut sink).unwrap().unwrap();
        assert_eq!(goal.columns(), &[0, 1, 2, 3]);
    }

    #[test]
    fn the_sweep_revisits_the_tree_once_per_limit() {
        let mut events = Vec::new();
        let mut observer =
            |state: &State, metrics: StepMetrics| events.push((state.clone(), metrics));
        Iddfs::init(4).search(&mut observer).unwrap();

        // Limits 0..4 emit 1, 5, 17, and 41 steps; the limit-4 pass dives
        // straight down the leftmost branch to the goal in 5 more.
        assert_eq!(events.len(), 1 + 5 + 17 + 41 + 5);
        assert_eq!(
            events[0].1,
            StepMetrics::Iddfs { depth: 0, limit: 0 },
        );
    }

    #[test]
    fn a_trivial_board_solves_at_limit_zero() {
        let mut events = Vec::new();
        let mut observer =
            |state: &State, metrics: StepMetrics| events.push((state.clone(), metrics));

        let goal = Iddfs::init(0).search(&mut observer).unwrap().unwrap();
        assert_eq!(goal.depth(), 0);
        assert_eq!(events.len(), 1);
    }
}
