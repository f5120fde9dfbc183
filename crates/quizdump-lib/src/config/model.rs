use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Settings that may come from a configuration file or `QUIZDUMP_*` environment variables.
///
/// Every field is optional; command line flags take precedence and built-in defaults fill the
/// remaining gaps.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub quality: Option<QualityPreference>,
    #[serde(default)]
    pub media_types: Option<MediaTypePreference>,
    #[serde(default)]
    pub directory: Option<PathBuf>,
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub client_type: Option<String>,
    #[serde(default)]
    pub verify_existing: Option<bool>,
}

impl Config {
    /// Keys accepted from configuration files and `QUIZDUMP_*` environment variables.
    pub const FIELDS: [&'static str; 6] = [
        "quality",
        "media_types",
        "directory",
        "endpoint",
        "client_type",
        "verify_existing",
    ];
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum QualityPreference {
    High,
    Low,
    #[default]
    Both,
}

impl QualityPreference {
    pub const VARIANTS: [&'static str; 3] = ["high", "low", "both"];
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaTypePreference {
    Image,
    Video,
    #[default]
    Both,
}

impl MediaTypePreference {
    pub const VARIANTS: [&'static str; 3] = ["image", "video", "both"];
}

/// Which quality tiers and media kinds a run should download.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DownloadPreferences {
    pub quality: QualityPreference,
    pub media_type: MediaTypePreference,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidPreference {
    pub kind: &'static str,
    pub value: String,
    pub allowed: &'static [&'static str],
}

impl fmt::Display for InvalidPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid {} supplied: {:?}, should be one of [{}]",
            self.kind,
            self.value,
            self.allowed.join("; ")
        )
    }
}

impl std::error::Error for InvalidPreference {}

impl FromStr for QualityPreference {
    type Err = InvalidPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Self::High),
            "low" => Ok(Self::Low),
            "both" => Ok(Self::Both),
            _ => Err(InvalidPreference {
                kind: "quality",
                value: s.to_string(),
                allowed: &Self::VARIANTS,
            }),
        }
    }
}

impl FromStr for MediaTypePreference {
    type Err = InvalidPreference;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "both" => Ok(Self::Both),
            _ => Err(InvalidPreference {
                kind: "media type",
                value: s.to_string(),
                allowed: &Self::VARIANTS,
            }),
        }
    }
}
