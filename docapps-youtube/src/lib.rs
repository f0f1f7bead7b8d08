//! YouTube embed
//!
//! Turns whatever link a user pastes into a [`VideoRef`], and a
//! [`VideoRef`] into the iframe URL the host renders.
//!
//! ```rust
//! use docapps_youtube::{parse_video_url, EmbedOptions};
//!
//! let video = parse_video_url("https://youtu.be/dQw4w9WgXcQ?t=1m30s")?;
//! assert_eq!(video.id(), "dQw4w9WgXcQ");
//! assert_eq!(video.start(), Some(90));
//! assert_eq!(
//!     video.embed_url(&EmbedOptions::default()),
//!     "https://www.youtube.com/embed/dQw4w9WgXcQ?start=90"
//! );
//! # Ok::<(), docapps_youtube::YoutubeError>(())
//! ```

mod app;
mod embed;
mod error;
mod video;

pub use app::{YoutubeAction, YoutubeApp};
pub use embed::EmbedOptions;
pub use error::{Result, YoutubeError};
pub use video::{parse_timestamp, parse_video_url, VideoRef};
