use crate::prelude::*;

use smallvec::SmallVec;

// One rook per filled row; cols[row] is that rook's column. Rows fill in
// index order, so cols.len() is both the search depth and the path cost.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct State {
    n: usize,
    cols: Vec<usize>,
}

impl State {
    pub fn empty(n: usize) -> State {
        State { n, cols: Vec::new() }
    }

    pub fn from_columns(n: usize, cols: &[usize]) -> anyhow::Result<State> {
        let mut state = State::empty(n);
        for &col in cols {
            let row = state.depth();
            state = state.apply(Action { row, col })?;
        }
        Ok(state)
    }

    pub fn size(&self) -> usize {
        self.n
    }

    pub fn depth(&self) -> usize {
        self.cols.len()
    }

    pub fn columns(&self) -> &[usize] {
        &self.cols
    }

    pub fn occupied(&self, row: usize, col: usize) -> bool {
        self.cols.get(row) == Some(&col)
    }

    pub fn column_used(&self, col: usize) -> bool {
        self.cols.contains(&col)
    }

    pub fn is_goal(&self) -> bool {
        self.depth() == self.size()
    }

    pub fn heuristic(&self) -> usize {
        self.size() - self.depth()
    }

    pub fn actions(&self) -> SmallVec<[Action; 8]> {
        if self.is_goal() {
            return SmallVec::new();
        }

        let row = self.depth();
        (0..self.n)
            .filter(|col| !self.column_used(*col))
            .map(|col| Action { row, col })
            .collect()
    }

    pub fn apply(&self, action: Action) -> Result<State, InvalidAction> {
        if action.row != self.depth() {
            return Err(InvalidAction::RowOutOfOrder {
                row: action.row,
                next: self.depth(),
            });
        }
        if action.col >= self.n {
            return Err(InvalidAction::ColumnOutOfRange {
                col: action.col,
                size: self.n,
            });
        }
        if self.column_used(action.col) {
            return Err(InvalidAction::ColumnTaken { col: action.col });
        }

        let mut child = self.clone();
        child.cols.push(action.col);
        Ok(child)
    }
}

impl core::fmt::Display for State {
    fn fmt(&self, out: &mut core::fmt::Formatter) -> core::fmt::Result {
        for row in 0..self.n {
            for col in 0..self.n {
                if col > 0 {
                    write!(out, " ")?;
                }
                write!(out, "{}", if self.occupied(row, col) { 'R' } else { '.' })?;
            }
            writeln!(out)?;
        }
        Ok(())
    }
}
