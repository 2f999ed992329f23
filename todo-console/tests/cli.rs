use assert_cmd::Command;
use predicates::prelude::*;

fn todo_console() -> Command {
    Command::cargo_bin("todo-console").expect("binary should be built")
}

#[test]
fn add_view_and_exit() {
    todo_console()
        .write_stdin("1\nBuy milk\n\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Success! Task created with ID 1"))
        .stdout(predicate::str::contains("Title: Buy milk"))
        .stdout(predicate::str::contains("Description: [No description]"))
        .stdout(predicate::str::contains("Total tasks: 1"))
        .stdout(predicate::str::contains(
            "All tasks have been cleared from memory. Goodbye!",
        ));
}

#[test]
fn view_with_no_tasks_shows_hint() {
    todo_console()
        .write_stdin("2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No tasks found. Add your first task to get started!",
        ));
}

#[test]
fn toggle_marks_task_completed() {
    todo_console()
        .write_stdin("1\nWrite report\ndraft due Friday\n5\n1\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current status: Pending"))
        .stdout(predicate::str::contains("Task ID 1 marked as Completed"));
}

#[test]
fn delete_unknown_id_reports_not_found() {
    todo_console()
        .write_stdin("4\n99\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task ID 99 not found"));
}

#[test]
fn invalid_menu_choice_is_reported() {
    todo_console()
        .write_stdin("0\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Error: Invalid choice. Please try again.",
        ));
}
