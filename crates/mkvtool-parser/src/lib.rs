//! # mkvtool-parser
//!
//! Recovers structured metadata from release-style file names so they can
//! be fed to the mask renderer in `mkvtool-core`.
//!
//! ## Quick Start
//!
//! ```
//! use mkvtool_parser::parse;
//!
//! let info = parse("The.Matrix.1999.1080p.BluRay.x264-GROUP.mkv");
//!
//! assert_eq!(info.title, "The Matrix");
//! assert_eq!(info.year, Some(1999));
//! assert_eq!(info.group, "GROUP");
//! assert_eq!(info.container, "mkv");
//! ```
//!
//! ## Rendering
//!
//! ```
//! use mkvtool_core::render_mask;
//! use mkvtool_parser::extract_fields;
//!
//! let fields = extract_fields("Series Title S01E02 (2022) [1080p].mkv");
//! let name = render_mask(&fields, "%{title} S%02.2{season}E%02.2{episode}").unwrap();
//! assert_eq!(name, "Series Title S01E02");
//! ```
//!
//! Extraction never fails: fields that cannot be found keep their unset
//! sentinel (`0` or `""`) and only surface as errors when a mask asks for
//! them.

mod patterns;
mod release;

pub use release::{ReleaseInfo, FIELD_NAMES};

use mkvtool_core::Fields;
use regex::Regex;

use crate::patterns::*;

/// Characters that separate words in release names.
const SEPARATORS: &[char] = &[' ', '.', '-', '_', '[', ']', '(', ')', '{', '}', ','];

/// Parse a release-style file name.
pub fn parse(file_name: &str) -> ReleaseInfo {
    let mut info = ReleaseInfo::default();
    let (stem, container) = split_container(file_name);
    info.container = container;

    // Underscores are word characters to the regex engine; treat them as
    // spaces so `\b` boundaries hold.
    let normalized = stem.replace('_', " ");
    let mut scan = Scanner::new(&normalized);

    if let Some(hit) = scan.claim(&WEBSITE, Pick::First) {
        info.website = hit.value;
    }

    for re in SEASON_EPISODE.iter() {
        if let Some(hit) = scan.claim(re, Pick::First) {
            info.season = hit.value.parse().ok();
            info.episode = hit.second.and_then(|e| e.parse().ok());
            break;
        }
    }
    if info.season.is_none() {
        info.season = scan
            .claim(&SEASON, Pick::First)
            .and_then(|hit| hit.value.parse().ok());
    }

    // Titles may themselves contain a year, the release year comes last.
    info.year = scan
        .claim(&YEAR, Pick::Last)
        .and_then(|hit| hit.value.parse().ok());

    info.resolution = scan.text(&RESOLUTION);
    info.quality = scan.text(&QUALITY);
    info.codec = scan.text(&CODEC);
    info.audio = scan.text(&AUDIO);
    info.region = scan.text(&REGION);
    info.language = scan.text(&LANGUAGE);
    info.size = scan.text(&SIZE);
    info.extended = scan.flag(&EXTENDED);
    info.hardcoded = scan.flag(&HARDCODED);
    info.proper = scan.flag(&PROPER);
    info.repack = scan.flag(&REPACK);
    info.unrated = scan.flag(&UNRATED);
    info.widescreen = scan.flag(&WIDESCREEN);
    info.sbs = scan.text(&SBS);
    info.threed = scan.flag(&THREE_D);

    if let Some(hit) = scan.claim(&GROUP, Pick::Last) {
        info.group = hit.value;
    }

    info.title = scan.take_title();
    info.excess = scan.excess();
    info
}

/// Parse a file name straight into mask fields.
///
/// Every name in [`FIELD_NAMES`] is present in the result.
pub fn extract_fields(file_name: &str) -> Fields {
    parse(file_name).to_fields()
}

fn split_container(file_name: &str) -> (&str, String) {
    match CONTAINER.captures(file_name) {
        Some(caps) => {
            let start = caps.get(0).map_or(file_name.len(), |m| m.start());
            (&file_name[..start], caps[1].to_lowercase())
        }
        None => (file_name, String::new()),
    }
}

#[derive(Debug, Clone, Copy)]
enum Pick {
    First,
    Last,
}

struct Hit {
    start: usize,
    end: usize,
    value: String,
    second: Option<String>,
}

/// Tracks which bytes of the name have been claimed by a pattern and where
/// the title can live.
struct Scanner<'a> {
    text: &'a str,
    claimed: Vec<bool>,
    title_start: usize,
    title_end: usize,
}

impl<'a> Scanner<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            text,
            claimed: vec![false; text.len()],
            title_start: 0,
            title_end: text.len(),
        }
    }

    /// Claim one unclaimed match of `re`.
    ///
    /// A match at the start of the remaining title area pushes the title
    /// start past it; any later match ends the title.
    fn claim(&mut self, re: &Regex, pick: Pick) -> Option<Hit> {
        let hit = {
            let claimed = &self.claimed;
            let mut hits = re.captures_iter(self.text).filter_map(|caps| {
                let whole = caps.get(0)?;
                let value = caps.get(1)?;
                if claimed[whole.range()].iter().any(|taken| *taken) {
                    return None;
                }
                Some(Hit {
                    start: whole.start(),
                    end: whole.end(),
                    value: value.as_str().to_string(),
                    second: caps.get(2).map(|m| m.as_str().to_string()),
                })
            });
            match pick {
                Pick::First => hits.next(),
                Pick::Last => hits.last(),
            }
        }?;

        self.mark(hit.start, hit.end);
        if hit.start <= self.title_start {
            self.title_start = self.title_start.max(hit.end);
        } else {
            self.title_end = self.title_end.min(hit.start);
        }
        Some(hit)
    }

    fn text(&mut self, re: &Regex) -> String {
        self.claim(re, Pick::First)
            .map(|hit| hit.value)
            .unwrap_or_default()
    }

    fn flag(&mut self, re: &Regex) -> bool {
        self.claim(re, Pick::First).is_some()
    }

    fn mark(&mut self, start: usize, end: usize) {
        self.claimed[start..end].fill(true);
    }

    fn take_title(&mut self) -> String {
        let start = self.title_start.min(self.text.len());
        let end = self.title_end.max(start);
        self.mark(start, end);
        clean_title(&self.text[start..end])
    }

    fn excess(&self) -> Vec<String> {
        let mut words = Vec::new();
        let mut current = String::new();
        for (i, c) in self.text.char_indices() {
            if self.claimed[i] || SEPARATORS.contains(&c) {
                if !current.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
            } else {
                current.push(c);
            }
        }
        if !current.is_empty() {
            words.push(current);
        }
        words
    }
}

/// Dots only separate words when the name has no spaces at all.
fn clean_title(raw: &str) -> String {
    let spaced = if raw.contains(' ') {
        raw.to_string()
    } else {
        raw.replace('.', " ")
    };
    spaced
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, '-' | '(' | '[' | '.'))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
