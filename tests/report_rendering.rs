use taskorder::order::OrderingEngine;
use taskorder::report::{render_dry_run, render_errors, render_plan};
use taskorder_test_utils::builders::{TaskBuilder, TaskSetBuilder};

#[test]
fn plan_text_lists_positions_due_dates_and_effort() {
    let tasks = TaskSetBuilder::new()
        .with_task(TaskBuilder::new("review").due("2024-01-02").effort(1.5).after("draft"))
        .with_task(TaskBuilder::new("draft").due("2024-01-05").effort(3.0))
        .build();
    let plan = OrderingEngine::new().plan(&tasks).unwrap();

    let text = render_plan(&plan, &tasks, false);

    assert!(text.starts_with("Recommended order (2 tasks):\n"));
    assert!(text.contains("  1. draft   due 2024-01-05  effort 3\n"));
    assert!(text.contains("  2. review  due 2024-01-02  effort 1.5\n"));
    assert!(!text.contains("Batch"));
}

#[test]
fn grouped_plan_text_has_one_heading_per_batch() {
    let tasks = TaskSetBuilder::new()
        .with_task(TaskBuilder::new("a"))
        .with_task(TaskBuilder::new("b"))
        .with_task(TaskBuilder::new("c").after("a"))
        .build();
    let plan = OrderingEngine::new().plan(&tasks).unwrap();

    let text = render_plan(&plan, &tasks, true);

    assert_eq!(text.matches("Batch ").count(), 2);
    assert!(text.contains("Batch 2:\n    3. c"));
}

#[test]
fn error_text_includes_cycle_members() {
    let tasks = TaskSetBuilder::new()
        .with_task(TaskBuilder::new("x").after("y"))
        .with_task(TaskBuilder::new("y").after("x"))
        .build();
    let err = OrderingEngine::new().sort(&tasks).unwrap_err();

    let text = render_errors(&err);

    assert_eq!(
        text,
        "error: Cyclic dependency detected.\n  tasks on the cycle: x, y\n"
    );
}

#[test]
fn dry_run_lists_tasks_and_dependencies() {
    let file = TaskSetBuilder::new()
        .with_task(TaskBuilder::new("a").effort(2.0))
        .with_task(TaskBuilder::new("b").after("a"))
        .build_file();

    let text = render_dry_run(&file);

    assert!(text.contains("tasks (2):"));
    assert!(text.contains("  - b\n      effort: 0\n      due: 2024-01-01\n      after: [\"a\"]\n"));
    assert!(text.contains("config.error_reporting = First"));
}
