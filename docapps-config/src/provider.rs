//! Settings provider using Figment

use crate::{error::ConfigResult, types::AppSettings};
use docapps_common::Pretty;
use figment::{
    providers::{Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use tracing::{debug, trace};

/// Document format of a [`ConfigSource`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Yaml,
    Json,
}

/// One settings document supplied by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub format: ConfigFormat,
    pub contents: String,
}

impl ConfigSource {
    pub fn new(format: ConfigFormat, contents: impl Into<String>) -> Self {
        Self {
            format,
            contents: contents.into(),
        }
    }

    pub fn toml(contents: impl Into<String>) -> Self {
        Self::new(ConfigFormat::Toml, contents)
    }

    pub fn yaml(contents: impl Into<String>) -> Self {
        Self::new(ConfigFormat::Yaml, contents)
    }

    pub fn json(contents: impl Into<String>) -> Self {
        Self::new(ConfigFormat::Json, contents)
    }

    fn merge_into(&self, figment: Figment) -> Figment {
        match self.format {
            ConfigFormat::Toml => figment.merge(Toml::string(&self.contents)),
            ConfigFormat::Yaml => figment.merge(Yaml::string(&self.contents)),
            ConfigFormat::Json => figment.merge(Json::string(&self.contents)),
        }
    }
}

/// Load settings from the defaults overlaid with `sources`, in order.
///
/// Keys missing from every source keep their default value. The result is
/// validated before it is returned.
pub fn load_settings(sources: &[ConfigSource]) -> ConfigResult<AppSettings> {
    debug!("Loading settings from {} source(s)", sources.len());

    let figment = sources.iter().fold(
        Figment::from(Serialized::defaults(AppSettings::default())),
        |figment, source| {
            trace!("Merging {:?} settings document", source.format);
            source.merge_into(figment)
        },
    );

    let settings: AppSettings = figment.extract()?;
    settings.validate()?;

    debug!("Settings loaded: {}", Pretty(&settings));
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ConfigError, FirstPlayer};

    #[test]
    fn test_no_sources_yields_defaults() {
        let settings = load_settings(&[]).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn test_yaml_source() {
        let settings = load_settings(&[ConfigSource::yaml(
            "reversi:\n  first_player: white\nyoutube:\n  autoplay: true\n",
        )])
        .unwrap();
        assert_eq!(settings.reversi.first_player, FirstPlayer::White);
        assert!(settings.youtube.autoplay);
        assert_eq!(settings.kanban.bullet, '*');
    }

    #[test]
    fn test_malformed_document_is_a_parse_error() {
        let err = load_settings(&[ConfigSource::json("{ not json")]).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }
}
