use std::cmp::Ordering;

use crate::text::rough_token_count;

/// Above this many DP cells (items × budget) the exact knapsack is abandoned
/// for the greedy ratio approximation.
pub const DP_CELL_LIMIT: usize = 2_000_000;

/// Budget-constrained subset selection over (value, cost) items.
///
/// Contract shared by every strategy: pick each item at most once, keep total
/// cost ≤ `budget`, maximize total value (exactly or approximately), and
/// return indices sorted ascending. Costs must be ≥ 1; an item whose cost
/// exceeds the whole budget can never be chosen.
pub trait SelectionStrategy {
    fn choose(&self, values: &[f64], costs: &[usize], budget: usize) -> Vec<usize>;
}

/// Exact 0/1 knapsack: iterative DP over flat (item, cost) tables with an
/// explicit keep table for the backtrace. No recursion, so large budgets
/// cannot exhaust the stack.
#[derive(Debug, Default)]
pub struct ExactDp;

impl SelectionStrategy for ExactDp {
    fn choose(&self, values: &[f64], costs: &[usize], budget: usize) -> Vec<usize> {
        let n = values.len();
        let width = budget + 1;
        let mut best = vec![0.0_f64; (n + 1) * width];
        let mut keep = vec![false; (n + 1) * width];

        for i in 1..=n {
            let (value, cost) = (values[i - 1], costs[i - 1]);
            for cap in 0..width {
                let without = best[(i - 1) * width + cap];
                best[i * width + cap] = without;
                if cost <= cap {
                    let with = best[(i - 1) * width + (cap - cost)] + value;
                    if with > without {
                        best[i * width + cap] = with;
                        keep[i * width + cap] = true;
                    }
                }
            }
        }

        let mut cap = budget;
        let mut chosen = Vec::new();
        for i in (1..=n).rev() {
            if keep[i * width + cap] {
                chosen.push(i - 1);
                cap -= costs[i - 1];
            }
        }
        chosen.reverse();
        chosen
    }
}

/// Linear-time approximation: sort by value-to-cost ratio (raw value breaks
/// ties, full ties keep ascending index via the stable sort) and accept items
/// while they fit.
#[derive(Debug, Default)]
pub struct GreedyRatio;

impl SelectionStrategy for GreedyRatio {
    fn choose(&self, values: &[f64], costs: &[usize], budget: usize) -> Vec<usize> {
        let mut order: Vec<usize> = (0..values.len()).collect();
        order.sort_by(|&a, &b| {
            let ratio_a = values[a] / costs[a] as f64;
            let ratio_b = values[b] / costs[b] as f64;
            ratio_b
                .partial_cmp(&ratio_a)
                .unwrap_or(Ordering::Equal)
                .then_with(|| values[b].partial_cmp(&values[a]).unwrap_or(Ordering::Equal))
        });

        let mut chosen = Vec::new();
        let mut used = 0;
        for i in order {
            if used + costs[i] <= budget {
                chosen.push(i);
                used += costs[i];
            }
        }
        chosen.sort_unstable();
        chosen
    }
}

/// Select pool sentences maximizing total relevance within the token budget.
///
/// Costs are `rough_token_count` per sentence (always ≥ 1) and the budget is
/// clamped to ≥ 1. Exact DP is used while the state space stays under
/// [`DP_CELL_LIMIT`]; past that the greedy ratio strategy substitutes
/// transparently. May legitimately return an empty selection when nothing
/// fits; the caller decides how to recover.
pub fn select_within_budget(sentences: &[String], values: &[f64], budget: usize) -> Vec<usize> {
    let costs: Vec<usize> = sentences.iter().map(|s| rough_token_count(s)).collect();
    let budget = budget.max(1);

    if budget.saturating_mul(costs.len()) > DP_CELL_LIMIT {
        tracing::debug!(
            items = costs.len(),
            budget,
            "knapsack state space over limit, using greedy ratio selection"
        );
        GreedyRatio.choose(values, &costs, budget)
    } else {
        ExactDp.choose(values, &costs, budget)
    }
}
