//! Track listing.

use super::{each_file, readable, Context};
use anyhow::Result;
use mkvtool_core::MediaFile;
use std::path::PathBuf;

/// Marks the default track in the table.
const DEFAULT_MARKER: &str = "<=====";

pub fn show(ctx: &Context, files: &[PathBuf], show_uid: bool, json: bool) -> Result<()> {
    let tools = ctx.toolset()?;
    let files = readable(files);
    let titled = files.len() > 1;

    each_file(files, |file| {
        let media = mkvtool_av::probe(&tools.mkvmerge, file)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&media)?);
        } else {
            if titled {
                println!("{}", file.display());
            }
            print!("{}", render_table(&media, show_uid));
        }
        Ok(())
    })
}

/// Render the tracks of `file` as a bordered text table.
pub fn render_table(file: &MediaFile, show_uid: bool) -> String {
    let mut header = vec!["NUMBER"];
    if show_uid {
        header.push("UID");
    }
    header.extend(["TYPE", "NAME", "LANGUAGE", "CODEC", "DEFAULT"]);
    // Leading numeric columns are right-aligned.
    let numeric = if show_uid { 2 } else { 1 };

    let rows: Vec<Vec<String>> = file
        .tracks
        .iter()
        .map(|track| {
            let mut row = vec![track.index.to_string()];
            if show_uid {
                row.push(track.uid.to_string());
            }
            row.extend([
                track.track_type.to_string(),
                track.name.clone(),
                track.language.clone(),
                track.codec.clone(),
                if track.is_default {
                    DEFAULT_MARKER.to_string()
                } else {
                    String::new()
                },
            ]);
            row
        })
        .collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(i, title)| {
            rows.iter()
                .map(|row| row[i].chars().count())
                .chain(std::iter::once(title.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let border = format!(
        "+{}+\n",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );
    let line = |cells: &[String]| {
        let padded: Vec<String> = cells
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                if i < numeric {
                    format!("{:>width$}", cell, width = widths[i])
                } else {
                    format!("{:<width$}", cell, width = widths[i])
                }
            })
            .collect();
        format!("| {} |\n", padded.join(" | "))
    };

    let header: Vec<String> = header.iter().map(|s| s.to_string()).collect();
    let mut out = border.clone();
    out.push_str(&line(&header));
    out.push_str(&border);
    for row in &rows {
        out.push_str(&line(row));
    }
    out.push_str(&border);
    out
}
