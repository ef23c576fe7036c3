use crate::prelude::*;

pub struct ConsoleObserver {
    strategy: Strategy,
    delay: Duration,
}

impl ConsoleObserver {
    pub fn new(strategy: Strategy, delay: Duration) -> Self {
        ConsoleObserver { strategy, delay }
    }
}

impl Observer for ConsoleObserver {
    fn observe(&mut self, state: &State, metrics: StepMetrics) {
        log::info!("{}: {}", self.strategy, metrics);
        log::debug!("{}:\n{}", self.strategy, state);

        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
    }
}
