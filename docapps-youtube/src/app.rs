//! The YouTube embed as an embeddable app

use crate::embed::EmbedOptions;
use crate::error::YoutubeError;
use crate::video::{parse_video_url, VideoRef};
use docapps_config::YoutubeSettings;
use docapps_host::App;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum YoutubeAction {
    /// The user pasted a link into the prompt
    SetUrl { url: String },
    /// Back to the empty prompt
    Clear,
}

/// Host-facing embed: the stored data is the video's canonical watch URL,
/// or empty while no video is set.
#[derive(Debug, Clone, Default)]
pub struct YoutubeApp {
    embed: EmbedOptions,
}

impl YoutubeApp {
    pub fn new(settings: &YoutubeSettings) -> Self {
        Self {
            embed: EmbedOptions::from(settings),
        }
    }

    pub fn embed_options(&self) -> &EmbedOptions {
        &self.embed
    }

    /// What the host should render: an iframe `src`, or `None` for the prompt
    pub fn embed_url(&self, model: &Option<VideoRef>) -> Option<String> {
        model.as_ref().map(|video| video.embed_url(&self.embed))
    }
}

impl App for YoutubeApp {
    const NAME: &'static str = "youtube";
    type Model = Option<VideoRef>;
    type Action = YoutubeAction;
    type Error = YoutubeError;

    fn load(&self, data: &str) -> Option<VideoRef> {
        if data.trim().is_empty() {
            debug!("no video set");
            return None;
        }

        parse_video_url(data)
            .inspect_err(|e| warn!(error = %e, "stored link is unreadable, showing the prompt"))
            .ok()
    }

    fn apply(&self, model: &mut Option<VideoRef>, action: YoutubeAction) -> Result<(), YoutubeError> {
        match action {
            YoutubeAction::SetUrl { url } => {
                *model = Some(parse_video_url(&url)?);
            }
            YoutubeAction::Clear => *model = None,
        }
        Ok(())
    }

    fn save(&self, model: &Option<VideoRef>) -> Result<String, YoutubeError> {
        Ok(model.as_ref().map(VideoRef::watch_url).unwrap_or_default())
    }
}
