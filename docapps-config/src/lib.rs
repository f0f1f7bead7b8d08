//! DocApps settings management using Figment
//!
//! Every embeddable app reads its behaviour knobs from one [`AppSettings`]
//! value. The host decides where settings come from (a preferences file, a
//! document property, a remote profile) and hands the raw documents over as
//! [`ConfigSource`] values; this crate layers them on top of the defaults.
//!
//! # Precedence
//!
//! Later sources override earlier ones:
//!
//! 1. Built-in defaults ([`AppSettings::default`])
//! 2. Each [`ConfigSource`] in the order given
//!
//! No environment variables or files are read here.
//!
//! # Example
//!
//! ```
//! use docapps_config::{load_settings, ConfigSource};
//!
//! let settings = load_settings(&[ConfigSource::toml(
//!     r#"
//!     [kanban]
//!     bullet = "-"
//!
//!     [youtube]
//!     privacy_enhanced = true
//!     "#,
//! )])?;
//!
//! assert_eq!(settings.kanban.bullet, '-');
//! assert_eq!(settings.kanban.indent, 2);
//! assert!(settings.youtube.privacy_enhanced);
//! # Ok::<(), docapps_config::ConfigError>(())
//! ```

mod error;
mod provider;
mod types;

pub use error::{ConfigError, ConfigResult};
pub use provider::{load_settings, ConfigFormat, ConfigSource};
pub use types::{AppSettings, FirstPlayer, KanbanSettings, ReversiSettings, YoutubeSettings};
