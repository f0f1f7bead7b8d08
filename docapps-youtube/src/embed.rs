//! Iframe URLs for the player

use crate::video::VideoRef;
use docapps_config::YoutubeSettings;
use url::form_urlencoded;

/// How the player is embedded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmbedOptions {
    /// Serve the player from `youtube-nocookie.com`
    pub privacy_enhanced: bool,
    pub autoplay: bool,
}

impl From<&YoutubeSettings> for EmbedOptions {
    fn from(settings: &YoutubeSettings) -> Self {
        Self {
            privacy_enhanced: settings.privacy_enhanced,
            autoplay: settings.autoplay,
        }
    }
}

impl VideoRef {
    /// The `src` for the player iframe
    pub fn embed_url(&self, options: &EmbedOptions) -> String {
        let host = if options.privacy_enhanced {
            "www.youtube-nocookie.com"
        } else {
            "www.youtube.com"
        };

        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(start) = self.start() {
            query.append_pair("start", &start.to_string());
        }
        if options.autoplay {
            query.append_pair("autoplay", "1");
        }
        let query = query.finish();

        if query.is_empty() {
            format!("https://{host}/embed/{}", self.id())
        } else {
            format!("https://{host}/embed/{}?{query}", self.id())
        }
    }
}
