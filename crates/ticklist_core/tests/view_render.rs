use ticklist_core::{format_plain, render, Task, EMPTY_STATE_MESSAGE};

#[test]
fn empty_list_renders_empty_state_and_zero_count() {
    let list = render(&[]);
    assert!(list.is_empty());
    assert_eq!(list.count(), 0);

    let text = format_plain(&list, false);
    assert!(text.contains(EMPTY_STATE_MESSAGE));
    assert!(text.contains("0 tasks"));
}

#[test]
fn non_empty_list_hides_empty_state_and_shows_count() {
    let tasks = vec![Task::new("Buy milk")];
    let list = render(&tasks);
    assert_eq!(list.count(), 1);

    let text = format_plain(&list, false);
    assert!(!text.contains(EMPTY_STATE_MESSAGE));
    assert!(text.contains("1 task\n"));
    assert!(text.contains("Buy milk"));
}

#[test]
fn rows_follow_snapshot_order_and_carry_display_fields() {
    let tasks = vec![Task::new("first"), Task::new("second"), Task::new("third")];
    let list = render(&tasks);

    assert_eq!(list.count(), 3);
    for (row, task) in list.rows.iter().zip(&tasks) {
        assert_eq!(row.id, task.id);
        assert_eq!(row.text, task.text);
        assert_eq!(row.created_at, task.created_at);
        assert_eq!(row.id_handle().len(), 8);
    }

    let text = format_plain(&list, false);
    let first_pos = text.find("first").unwrap();
    let second_pos = text.find("second").unwrap();
    let third_pos = text.find("third").unwrap();
    assert!(first_pos < second_pos && second_pos < third_pos);
}

#[test]
fn completed_rows_use_checked_marker_and_strikethrough_when_colored() {
    let mut done = Task::new("done deal");
    done.completed = true;
    let tasks = vec![Task::new("pending"), done];
    let list = render(&tasks);

    let plain = format_plain(&list, false);
    assert!(plain.contains("[ ] pending"));
    assert!(plain.contains("[x] done deal"));
    assert!(!plain.contains('\x1b'));

    let colored = format_plain(&list, true);
    assert!(colored.contains("\x1b[9;2mdone deal\x1b[0m"));
    assert!(!colored.contains("\x1b[9;2mpending"));
}

#[test]
fn render_neutralizes_control_bytes_in_task_text() {
    let tasks = vec![Task::new("evil\x1b[2Jtext")];
    let list = render(&tasks);

    assert!(!list.rows[0].text.contains('\x1b'));
    let text = format_plain(&list, false);
    assert!(!text.contains('\x1b'));
}
