// src/order/cycle.rs

//! Cycle diagnostics.
//!
//! The sort itself only notices a cycle because some tasks never reach
//! in-degree zero. This pass runs afterwards, on the leftover tasks only,
//! to name the tasks that actually sit on a cycle.

use petgraph::algo::tarjan_scc;
use petgraph::graphmap::DiGraphMap;

use crate::order::graph::DependencyGraph;
use crate::task::TaskName;

/// Names of tasks that are part of a cycle, sorted and deduplicated.
///
/// `remaining` is the in-degree vector left behind by the sort: any task
/// with a non-zero entry was never scheduled. Those are either on a cycle
/// or downstream of one; only the former are returned.
pub fn cycle_members(graph: &DependencyGraph<'_>, remaining: &[usize]) -> Vec<TaskName> {
    let mut leftover: DiGraphMap<usize, ()> = DiGraphMap::new();

    for (pos, deg) in remaining.iter().enumerate() {
        if *deg > 0 {
            leftover.add_node(pos);
        }
    }

    let nodes: Vec<usize> = leftover.nodes().collect();
    for pos in nodes {
        for &dependent in graph.dependents_of(pos) {
            if leftover.contains_node(dependent) {
                leftover.add_edge(pos, dependent, ());
            }
        }
    }

    let mut members: Vec<TaskName> = tarjan_scc(&leftover)
        .into_iter()
        .filter(|scc| match scc.as_slice() {
            [single] => leftover.contains_edge(*single, *single),
            _ => true,
        })
        .flatten()
        .map(|pos| graph.task(pos).name.clone())
        .collect();

    members.sort();
    members.dedup();
    members
}
