//! # DocApps Host
//!
//! The contract between an embeddable app and the document that embeds it.
//!
//! The host owns the serialized state. It hands the app a `data` string and
//! an edit callback; the app turns user interactions into a new `data`
//! string and pushes it back through the callback together with an opaque
//! context value it never looks at.
//!
//! ```rust
//! use docapps_host::{App, AppHost, Dispatch};
//! use std::cell::RefCell;
//! use std::convert::Infallible;
//!
//! struct Counter;
//!
//! impl App for Counter {
//!     const NAME: &'static str = "counter";
//!     type Model = u32;
//!     type Action = u32;
//!     type Error = Infallible;
//!
//!     fn load(&self, data: &str) -> u32 {
//!         data.trim().parse().unwrap_or(0)
//!     }
//!
//!     fn apply(&self, model: &mut u32, by: u32) -> Result<(), Infallible> {
//!         *model += by;
//!         Ok(())
//!     }
//!
//!     fn save(&self, model: &u32) -> Result<String, Infallible> {
//!         Ok(model.to_string())
//!     }
//! }
//!
//! let edits = RefCell::new(Vec::new());
//! let sink = |data: String, block: &u32| edits.borrow_mut().push((data, *block));
//! let mut host = AppHost::new(Counter, "41", 7u32, sink);
//!
//! assert_eq!(host.dispatch(1)?, Dispatch::Edited);
//! assert_eq!(edits.borrow().as_slice(), &[("42".to_string(), 7)]);
//! # Ok::<(), Infallible>(())
//! ```

mod app;
mod host;
mod sink;

pub use app::App;
pub use host::{AppHost, Dispatch};
pub use sink::EditSink;
