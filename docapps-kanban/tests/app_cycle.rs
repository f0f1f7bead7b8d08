//! The Kanban app driven through the host contract

use docapps_config::{load_settings, ConfigError, ConfigSource, KanbanSettings};
use docapps_host::{AppHost, Dispatch};
use docapps_kanban::{Board, BoardOperation, KanbanApp, KanbanError};
use std::cell::RefCell;

#[test_log::test]
fn test_drag_and_drop_reaches_host_as_markdown() {
    let edits = RefCell::new(Vec::new());
    let sink = |data: String, ctx: &String| edits.borrow_mut().push((data, ctx.clone()));
    let mut host = AppHost::new(
        KanbanApp::default(),
        "* Todo\n  * Buy milk\n  * **Call mom**\n* Done",
        "block-42".to_string(),
        sink,
    );

    let drop: BoardOperation = serde_json::from_str(
        r#"{"op":"move_item","from_list":0,"from_item":1,"to_list":1,"to_item":0}"#,
    )
    .unwrap();
    assert_eq!(host.dispatch(drop), Ok(Dispatch::Edited));

    let edits = edits.borrow();
    assert_eq!(edits.len(), 1);
    assert_eq!(
        edits[0].0,
        "* Todo\n  * Buy milk\n* Done\n  * **Call mom**"
    );
    assert_eq!(edits[0].1, "block-42");
}

#[test_log::test]
fn test_unreadable_data_renders_as_empty_board() {
    let mut host = AppHost::new(
        KanbanApp::default(),
        "just some prose",
        (),
        |_: String, _: &()| {},
    );
    assert_eq!(host.model(), Board::new());

    host.dispatch(BoardOperation::AddList { name: "Todo".into() })
        .unwrap();
    assert_eq!(host.data(), "* Todo");
}

#[test_log::test]
fn test_stale_drop_is_rejected_without_edit() {
    let calls = RefCell::new(0);
    let mut host = AppHost::new(
        KanbanApp::default(),
        "* Todo\n  * A",
        (),
        |_: String, _: &()| *calls.borrow_mut() += 1,
    );

    let result = host.dispatch(BoardOperation::RemoveItem { list: 0, item: 1 });
    assert_eq!(
        result,
        Err(KanbanError::ItemIndexOutOfRange {
            list: 0,
            index: 1,
            len: 1
        })
    );
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(host.data(), "* Todo\n  * A");
}

#[test_log::test]
fn test_configured_style_is_used_for_output() {
    let settings =
        load_settings(&[ConfigSource::toml("[kanban]\nbullet = \"-\"\nindent = 4\n")]).unwrap();
    let mut host = AppHost::new(
        KanbanApp::new(&settings.kanban).unwrap(),
        "* Todo",
        (),
        |_: String, _: &()| {},
    );

    host.dispatch(BoardOperation::AddItem {
        list: 0,
        name: "Write docs".into(),
        importance: 1,
    })
    .unwrap();
    assert_eq!(host.data(), "- Todo\n    - *Write docs*");
}

#[test_log::test]
fn test_reordering_to_same_position_is_unchanged() {
    let mut host = AppHost::new(
        KanbanApp::default(),
        "* Todo\n  * A\n  * B",
        (),
        |_: String, _: &()| panic!("no edit expected"),
    );
    let result = host.dispatch(BoardOperation::MoveItem {
        from_list: 0,
        from_item: 1,
        to_list: 0,
        to_item: 1,
    });
    assert_eq!(result, Ok(Dispatch::Unchanged));
}

#[test_log::test]
fn test_hand_built_settings_are_checked_before_mounting() {
    let plus = KanbanSettings {
        bullet: '+',
        indent: 2,
    };
    assert!(matches!(
        KanbanApp::new(&plus),
        Err(ConfigError::ValidationError { ref key, .. }) if key == "kanban.bullet"
    ));

    let flat = KanbanSettings {
        bullet: '*',
        indent: 0,
    };
    assert!(matches!(
        KanbanApp::new(&flat),
        Err(ConfigError::ValidationError { ref key, .. }) if key == "kanban.indent"
    ));
}

#[test_log::test]
fn test_edit_with_hand_built_style_keeps_the_board() {
    let app = KanbanApp::new(&KanbanSettings {
        bullet: '-',
        indent: 1,
    })
    .unwrap();
    let mut host = AppHost::new(app, "* Todo\n  * A", (), |_: String, _: &()| {});

    host.dispatch(BoardOperation::AddItem {
        list: 0,
        name: "B".into(),
        importance: 0,
    })
    .unwrap();

    let board = host.model();
    assert_eq!(host.data(), "- Todo\n - A\n - B");
    assert_eq!(board.len(), 1);
    let names: Vec<&str> = board.list_at(0).items().map(|item| item.name()).collect();
    assert_eq!(names, ["A", "B"]);
}
