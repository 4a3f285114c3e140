#![allow(dead_code)]

use std::collections::HashMap;

use taskorder::task::Task;

/// Position of each name in an order.
pub fn positions(order: &[String]) -> HashMap<&str, usize> {
    order
        .iter()
        .enumerate()
        .map(|(idx, name)| (name.as_str(), idx))
        .collect()
}

/// Assert every dependency edge is respected by `order`.
pub fn assert_respects_dependencies(tasks: &[Task], order: &[String]) {
    let pos = positions(order);
    for task in tasks {
        for dep in &task.dependencies {
            assert!(
                pos[dep.as_str()] < pos[task.name.as_str()],
                "{dep} must come before {} in {order:?}",
                task.name
            );
        }
    }
}
