// src/order/graph.rs

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::errors::{ValidationError, Violation};
use crate::task::Task;
use crate::types::ErrorReporting;

/// Dependency graph for one sort call.
///
/// Nodes are positions in the input slice. For every task we keep the
/// tasks that depend on it (outgoing edges) and the number of prerequisites
/// it has (in-degree). Built fresh for each call and dropped afterwards.
#[derive(Debug)]
pub struct DependencyGraph<'a> {
    tasks: &'a [Task],
    dependents: Vec<Vec<usize>>,
    in_degree: Vec<usize>,
}

impl<'a> DependencyGraph<'a> {
    /// Build the graph, checking that names are unique and that every
    /// dependency resolves to a task in the same slice.
    ///
    /// With [`ErrorReporting::First`] the first violation aborts the build.
    /// With [`ErrorReporting::All`] every violation is collected.
    pub fn build(tasks: &'a [Task], reporting: ErrorReporting) -> Result<Self, ValidationError> {
        let mut violations = Vec::new();

        let mut index: HashMap<&'a str, usize> = HashMap::with_capacity(tasks.len());
        let mut reported_duplicates: HashSet<&str> = HashSet::new();

        for (pos, task) in tasks.iter().enumerate() {
            if index.contains_key(task.name.as_str()) {
                if reported_duplicates.insert(task.name.as_str()) {
                    let violation = Violation::DuplicateName {
                        name: task.name.clone(),
                    };
                    if reporting == ErrorReporting::First {
                        return Err(ValidationError::single(violation));
                    }
                    violations.push(violation);
                }
                continue;
            }
            index.insert(task.name.as_str(), pos);
        }

        let mut dependents = vec![Vec::new(); tasks.len()];
        let mut in_degree = vec![0usize; tasks.len()];
        let mut edges = 0;

        for (pos, task) in tasks.iter().enumerate() {
            for dep in task.dependencies.iter() {
                match index.get(dep.as_str()) {
                    Some(&dep_pos) => {
                        // Edge direction: dependency -> dependent.
                        dependents[dep_pos].push(pos);
                        in_degree[pos] += 1;
                        edges += 1;
                    }
                    None => {
                        let violation = Violation::UnknownDependency {
                            task: task.name.clone(),
                            dependency: dep.clone(),
                        };
                        if reporting == ErrorReporting::First {
                            return Err(ValidationError::single(violation));
                        }
                        violations.push(violation);
                    }
                }
            }
        }

        if let Some(err) = ValidationError::new(violations) {
            return Err(err);
        }

        debug!(tasks = tasks.len(), edges, "dependency graph built");

        Ok(Self {
            tasks,
            dependents,
            in_degree,
        })
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn task(&self, pos: usize) -> &'a Task {
        &self.tasks[pos]
    }

    /// Tasks that list the task at `pos` as a dependency.
    pub fn dependents_of(&self, pos: usize) -> &[usize] {
        self.dependents
            .get(pos)
            .map(|d| d.as_slice())
            .unwrap_or(&[])
    }

    /// Initial in-degree of every task, indexed by position.
    pub fn in_degrees(&self) -> &[usize] {
        &self.in_degree
    }

    /// Tasks with no prerequisites, in input order.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.in_degree
            .iter()
            .enumerate()
            .filter(|(_, deg)| **deg == 0)
            .map(|(pos, _)| pos)
    }
}
