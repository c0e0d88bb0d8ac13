pub mod budgeting;
pub mod mmr;

pub use budgeting::{select_within_budget, ExactDp, GreedyRatio, SelectionStrategy, DP_CELL_LIMIT};
pub use mmr::mmr_select;
