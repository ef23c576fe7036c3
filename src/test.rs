use crate::prelude::*;

pub fn state_with_rooks(n: usize, cols: &[usize]) -> State {
    State::from_columns(n, cols).unwrap()
}
