//! Regular expressions recognising release-name fragments.
//!
//! Every pattern exposes the interesting text in capture group 1. Patterns
//! with two numeric groups (season and episode) use group 2 as well.

use std::sync::LazyLock;

use regex::Regex;

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("release-name pattern must compile")
}

/// `[site.org] Title ...`: only recognised at the very start.
pub(crate) static WEBSITE: LazyLock<Regex> = LazyLock::new(|| compile(r"^\[ ?([^\]]+?) ?\]"));

/// Season and episode in one marker: `S01E02`, `s1.e12`, `1x02`.
pub(crate) static SEASON_EPISODE: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    vec![
        compile(r"(?i)\bS(\d{1,2})[ ._-]?E(\d{1,3})\b"),
        compile(r"(?i)\b(\d{1,2})x(\d{2,3})\b"),
    ]
});

/// Season-only marker used by season packs: `S03`, `Season 3`.
pub(crate) static SEASON: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(?:S|Season[ ._]?)(\d{1,2})\b"));

pub(crate) static YEAR: LazyLock<Regex> = LazyLock::new(|| compile(r"\b((?:19|20)\d{2})\b"));

pub(crate) static RESOLUTION: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(\d{3,4}[pi]|4K)\b"));

pub(crate) static QUALITY: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"(?i)\b((?:PPV\.)?[HP]DTV|(?:HD)?CAM|B[DR]Rip|(?:HD-?)?TS|(?:PPV )?WEB-?DL(?: DVDRip)?|HDRip|DVDRip|CamRip|WEB-?Rip|BluRay|DvDScr|telesync)\b",
    )
});

pub(crate) static CODEC: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(xvid|[hx]\.?26[45]|hevc|avc|av1)\b"));

pub(crate) static AUDIO: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"\b(MP3|DDP?5\.?1|Dual[\- ]Audio|LiNE|DTS(?:-HD)?|TrueHD|AAC[.-]LC|AAC(?:\.?2\.0)?|AC3(?:\.5\.1)?)\b",
    )
});

pub(crate) static REGION: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(R[0-9])\b"));

pub(crate) static LANGUAGE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(rus\.eng|ita\.eng)\b"));

pub(crate) static SIZE: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\b(\d+(?:\.\d+)?(?:GB|MB))\b"));

pub(crate) static EXTENDED: LazyLock<Regex> =
    LazyLock::new(|| compile(r"\b(EXTENDED(?:.CUT)?)\b"));
pub(crate) static HARDCODED: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(HC)\b"));
pub(crate) static PROPER: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(PROPER)\b"));
pub(crate) static REPACK: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(REPACK)\b"));
pub(crate) static UNRATED: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(UNRATED)\b"));
pub(crate) static WIDESCREEN: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(WS)\b"));
pub(crate) static SBS: LazyLock<Regex> = LazyLock::new(|| compile(r"\b((?:Half-)?SBS)\b"));
pub(crate) static THREE_D: LazyLock<Regex> = LazyLock::new(|| compile(r"\b(3D)\b"));

/// Container extension, matched against the full file name.
pub(crate) static CONTAINER: LazyLock<Regex> =
    LazyLock::new(|| compile(r"(?i)\.(mkv|mka|mks|avi|mp4|m4v|webm)$"));

/// Trailing `-GROUP` on the name without its extension.
pub(crate) static GROUP: LazyLock<Regex> =
    LazyLock::new(|| compile(r"-([^-\s.\[\]()]+)(?:\[[^\]]*\])?$"));
