//! Integration tests for the load / apply / save cycle

use docapps_common::{ErrorSeverity, Severity};
use docapps_host::{App, AppHost, Dispatch};
use std::cell::RefCell;
use thiserror::Error;

/// A checklist stored as one line per entry, `[x]` marking done entries.
struct Checklist;

#[derive(Debug, PartialEq)]
struct Entry {
    done: bool,
    text: String,
}

enum Action {
    Toggle(usize),
    Add(String),
}

#[derive(Debug, Error, PartialEq)]
enum ChecklistError {
    #[error("no entry at index {0}")]
    NoSuchEntry(usize),
}

impl Severity for ChecklistError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Warning
    }
}

impl App for Checklist {
    const NAME: &'static str = "checklist";
    type Model = Vec<Entry>;
    type Action = Action;
    type Error = ChecklistError;

    fn load(&self, data: &str) -> Vec<Entry> {
        data.lines()
            .filter_map(|line| {
                if let Some(text) = line.strip_prefix("[x] ") {
                    Some(Entry { done: true, text: text.to_string() })
                } else {
                    line.strip_prefix("[ ] ").map(|text| Entry {
                        done: false,
                        text: text.to_string(),
                    })
                }
            })
            .collect()
    }

    fn apply(&self, model: &mut Vec<Entry>, action: Action) -> Result<(), ChecklistError> {
        match action {
            Action::Toggle(index) => {
                let entry = model
                    .get_mut(index)
                    .ok_or(ChecklistError::NoSuchEntry(index))?;
                entry.done = !entry.done;
            }
            Action::Add(text) => model.push(Entry { done: false, text }),
        }
        Ok(())
    }

    fn save(&self, model: &Vec<Entry>) -> Result<String, ChecklistError> {
        Ok(model
            .iter()
            .map(|e| format!("[{}] {}", if e.done { 'x' } else { ' ' }, e.text))
            .collect::<Vec<_>>()
            .join("\n"))
    }
}

#[test_log::test]
fn test_each_dispatch_starts_from_latest_host_data() {
    let edits = RefCell::new(Vec::new());
    let sink = |data: String, doc: &String| edits.borrow_mut().push((data, doc.clone()));
    let mut host = AppHost::new(Checklist, "[ ] milk", "doc-1".to_string(), sink);

    assert_eq!(host.dispatch(Action::Toggle(0)), Ok(Dispatch::Edited));

    // another collaborator edits the blob; the host notifies us
    host.update("[x] milk\n[ ] eggs");
    assert_eq!(host.dispatch(Action::Toggle(1)), Ok(Dispatch::Edited));
    assert_eq!(host.dispatch(Action::Add("bread".into())), Ok(Dispatch::Edited));

    let edits = edits.borrow();
    assert_eq!(edits.len(), 3);
    assert_eq!(edits[0].0, "[x] milk");
    assert_eq!(edits[1].0, "[x] milk\n[x] eggs");
    assert_eq!(edits[2].0, "[x] milk\n[x] eggs\n[ ] bread");
    assert!(edits.iter().all(|(_, doc)| doc == "doc-1"));
}

#[test_log::test]
fn test_rejected_action_is_returned_and_not_forwarded() {
    let calls = RefCell::new(0usize);
    let mut host = AppHost::new(Checklist, "[ ] milk", (), |_: String, _: &()| {
        *calls.borrow_mut() += 1
    });

    assert_eq!(
        host.dispatch(Action::Toggle(3)),
        Err(ChecklistError::NoSuchEntry(3))
    );
    assert_eq!(*calls.borrow(), 0);
    assert_eq!(host.model().len(), 1);
}
