mod action;
mod board;
mod console;
mod observer;
mod search;

#[cfg(test)]
mod test;

mod prelude;
use prelude::*;

const BOARD_SIZE: usize = 4;
const STEP_DELAY: Duration = Duration::from_millis(100);

fn main() -> anyhow::Result<()> {
    simple_logger::SimpleLogger::new()
        .with_level(log::LevelFilter::Info)
        .init()?;

    for strategy in enum_iterator::all::<Strategy>() {
        log::info!("{}: searching a {}x{} board", strategy, BOARD_SIZE, BOARD_SIZE);

        let mut observer = ConsoleObserver::new(strategy, STEP_DELAY);
        match strategy.run(BOARD_SIZE, &mut observer)? {
            Some(goal) => {
                log::info!(
                    "{}: found solution (placed={}, columns {:?})",
                    strategy,
                    goal.depth(),
                    goal.columns()
                );
                println!("{}", goal);
            }
            None => log::info!("{}: no solution", strategy),
        }
    }

    Ok(())
}
