//! Parsed release-name metadata.

use mkvtool_core::Fields;

/// Every field name [`ReleaseInfo::to_fields`] produces.
pub const FIELD_NAMES: &[&str] = &[
    "title",
    "year",
    "season",
    "episode",
    "resolution",
    "quality",
    "codec",
    "audio",
    "group",
    "region",
    "container",
    "language",
    "website",
    "size",
    "extended",
    "hardcoded",
    "proper",
    "repack",
    "unrated",
    "widescreen",
    "sbs",
    "threed",
    "excess",
];

/// Metadata recovered from a release-style file name.
///
/// Text fields are empty and numeric fields are `None` when the name
/// carries no such information.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReleaseInfo {
    pub title: String,
    pub year: Option<u32>,
    pub season: Option<u32>,
    pub episode: Option<u32>,
    pub resolution: String,
    pub quality: String,
    pub codec: String,
    pub audio: String,
    pub group: String,
    pub region: String,
    /// Lowercased extension, e.g. `mkv`.
    pub container: String,
    pub language: String,
    pub website: String,
    pub size: String,
    pub extended: bool,
    pub hardcoded: bool,
    pub proper: bool,
    pub repack: bool,
    pub unrated: bool,
    pub widescreen: bool,
    /// Matched text (`SBS` or `Half-SBS`), empty when absent.
    pub sbs: String,
    pub threed: bool,
    /// Leftover words no pattern claimed.
    pub excess: Vec<String>,
}

impl ReleaseInfo {
    /// Convert to a mask field map.
    ///
    /// Every name in [`FIELD_NAMES`] is present. Missing numbers become `0`
    /// and missing text becomes `""`, so both read as unset when rendering.
    /// Flags render as their conventional release tag.
    pub fn to_fields(&self) -> Fields {
        let number = |value: Option<u32>| value.map(i64::from).unwrap_or(0);
        let flag = |set: bool, tag: &str| if set { tag.to_string() } else { String::new() };

        let mut fields = Fields::new();
        fields.insert("title", self.title.as_str());
        fields.insert("year", number(self.year));
        fields.insert("season", number(self.season));
        fields.insert("episode", number(self.episode));
        fields.insert("resolution", self.resolution.as_str());
        fields.insert("quality", self.quality.as_str());
        fields.insert("codec", self.codec.as_str());
        fields.insert("audio", self.audio.as_str());
        fields.insert("group", self.group.as_str());
        fields.insert("region", self.region.as_str());
        fields.insert("container", self.container.as_str());
        fields.insert("language", self.language.as_str());
        fields.insert("website", self.website.as_str());
        fields.insert("size", self.size.as_str());
        fields.insert("extended", flag(self.extended, "EXTENDED"));
        fields.insert("hardcoded", flag(self.hardcoded, "HC"));
        fields.insert("proper", flag(self.proper, "PROPER"));
        fields.insert("repack", flag(self.repack, "REPACK"));
        fields.insert("unrated", flag(self.unrated, "UNRATED"));
        fields.insert("widescreen", flag(self.widescreen, "WS"));
        fields.insert("sbs", self.sbs.as_str());
        fields.insert("threed", flag(self.threed, "3D"));
        fields.insert("excess", self.excess.join(" "));
        fields
    }
}
