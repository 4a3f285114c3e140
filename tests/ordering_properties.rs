mod common;

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;
use taskorder::order::OrderingEngine;
use taskorder::task::Task;
use taskorder_test_utils::builders::TaskBuilder;

use common::{assert_respects_dependencies, positions};

const EFFORTS: [f64; 4] = [0.0, 0.5, 1.0, 2.0];

// Strategy for an acyclic task set. Task i may only depend on tasks 0..i,
// and the list is rotated so input position says nothing about the graph.
// Due dates and efforts come from small ranges so ties are common.
fn task_set_strategy(max_tasks: usize) -> impl Strategy<Value = Vec<Task>> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let per_task = (
            proptest::collection::vec(any::<usize>(), 0..4),
            0..5u32,
            0..EFFORTS.len(),
        );
        (
            proptest::collection::vec(per_task, num_tasks),
            0..num_tasks,
        )
            .prop_map(move |(raw, rotation)| {
                let mut tasks: Vec<Task> = raw
                    .into_iter()
                    .enumerate()
                    .map(|(i, (potential_deps, day, effort_idx))| {
                        let mut builder = TaskBuilder::new(&format!("task_{i}"))
                            .due(&format!("2024-01-{:02}", day + 1))
                            .effort(EFFORTS[effort_idx]);

                        let valid: HashSet<usize> = if i > 0 {
                            potential_deps.into_iter().map(|d| d % i).collect()
                        } else {
                            HashSet::new()
                        };
                        for dep in valid {
                            builder = builder.after(&format!("task_{dep}"));
                        }
                        builder.build()
                    })
                    .collect();
                tasks.rotate_left(rotation);
                tasks
            })
    })
}

proptest! {
    #[test]
    fn order_is_a_permutation_of_the_input(tasks in task_set_strategy(12)) {
        let order = OrderingEngine::new().sort(&tasks).expect("acyclic input must sort");

        prop_assert_eq!(order.len(), tasks.len());
        let names: HashSet<&str> = tasks.iter().map(|t| t.name.as_str()).collect();
        let ordered: HashSet<&str> = order.iter().map(|n| n.as_str()).collect();
        prop_assert_eq!(ordered.len(), order.len());
        prop_assert_eq!(ordered, names);
    }

    #[test]
    fn every_dependency_comes_first(tasks in task_set_strategy(12)) {
        let order = OrderingEngine::new().sort(&tasks).expect("acyclic input must sort");
        assert_respects_dependencies(&tasks, &order);
    }

    #[test]
    fn sorting_twice_gives_the_same_order(tasks in task_set_strategy(12)) {
        let engine = OrderingEngine::new();
        let first = engine.sort(&tasks).expect("acyclic input must sort");
        let second = engine.sort(&tasks).expect("acyclic input must sort");
        prop_assert_eq!(first, second);
    }

    #[test]
    fn batches_are_sorted_by_due_date_then_effort(tasks in task_set_strategy(12)) {
        let by_name: HashMap<&str, &Task> =
            tasks.iter().map(|t| (t.name.as_str(), t)).collect();
        let plan = OrderingEngine::new().plan(&tasks).expect("acyclic input must sort");

        for batch in plan.batches() {
            for pair in batch.windows(2) {
                let a = by_name[pair[0].as_str()];
                let b = by_name[pair[1].as_str()];
                prop_assert!(
                    (a.due_date, a.effort) <= (b.due_date, b.effort),
                    "{} ({}, {}) placed before {} ({}, {})",
                    a.name, a.due_date, a.effort, b.name, b.due_date, b.effort
                );
            }
        }
    }

    #[test]
    fn each_batch_is_exactly_the_next_frontier(tasks in task_set_strategy(12)) {
        let by_name: HashMap<&str, &Task> =
            tasks.iter().map(|t| (t.name.as_str(), t)).collect();
        let plan = OrderingEngine::new().plan(&tasks).expect("acyclic input must sort");

        // Batch index of every task.
        let level: HashMap<&str, usize> = plan
            .batches()
            .iter()
            .enumerate()
            .flat_map(|(idx, batch)| batch.iter().map(move |n| (n.as_str(), idx)))
            .collect();

        for (name, idx) in level.iter() {
            let deps = &by_name[name].dependencies;
            if *idx == 0 {
                prop_assert!(deps.is_empty(), "{} has deps but is in the first batch", name);
            } else {
                // All prerequisites earlier, and the last one exactly one batch earlier.
                let deepest = deps.iter().map(|d| level[d.as_str()]).max();
                prop_assert_eq!(deepest, Some(idx - 1));
            }
        }

        let order = plan.order();
        prop_assert_eq!(positions(&order).len(), tasks.len());
    }
}
