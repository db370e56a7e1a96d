//! Commands that drive mkvtoolnix, run against shell-script stand-ins.
#![cfg(unix)]

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::{tempdir, TempDir};

const IDENTIFICATION: &str = r#"{
  "container": {"recognized": true, "supported": true, "type": "Matroska"},
  "errors": [],
  "tracks": [
    {"codec": "AVC/H.264/MPEG-4p10", "id": 0, "type": "video",
     "properties": {"language": "und", "default_track": true, "uid": 101}},
    {"codec": "AAC", "id": 1, "type": "audio",
     "properties": {"language": "eng", "default_track": true, "uid": 102}},
    {"codec": "SubRip/SRT", "id": 2, "type": "subtitles",
     "properties": {"language": "eng", "track_name": "English (Forced)", "uid": 103}},
    {"codec": "SubRip/SRT", "id": 3, "type": "subtitles",
     "properties": {"language": "eng", "track_name": "English", "uid": 104}},
    {"codec": "SubRip/SRT", "id": 4, "type": "subtitles",
     "properties": {"language": "spa", "default_track": true, "uid": 105}}
  ]
}"#;

/// A scratch directory holding fake mkvtoolnix programs, a config file
/// pointing at them and an (empty) media file.
struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new() -> Self {
        let dir = tempdir().unwrap();
        let fixture = Self { dir };
        let log = fixture.log_path();

        fixture.script(
            "mkvmerge",
            &format!(
                "if [ \"$1\" = \"-J\" ]; then\ncat <<'JSON'\n{}\nJSON\nexit 0\nfi\necho \"mkvmerge $*\" >> {:?}\n",
                IDENTIFICATION, log
            ),
        );
        fixture.script(
            "mkvextract",
            &format!("echo \"mkvextract $*\" >> {:?}\n", log),
        );
        fixture.script(
            "mkvpropedit",
            &format!("echo \"mkvpropedit $*\" >> {:?}\n", log),
        );

        let bin = fixture.dir.path().join("bin");
        fs::write(
            fixture.config_path(),
            format!(
                "[tools]\nmkvmerge_path = {:?}\nmkvextract_path = {:?}\nmkvpropedit_path = {:?}\n",
                bin.join("mkvmerge"),
                bin.join("mkvextract"),
                bin.join("mkvpropedit"),
            ),
        )
        .unwrap();
        fs::write(fixture.media(), b"").unwrap();

        fixture
    }

    fn script(&self, name: &str, body: &str) {
        let bin = self.dir.path().join("bin");
        fs::create_dir_all(&bin).unwrap();
        let path = bin.join(name);
        fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("mkvtool.toml")
    }

    fn log_path(&self) -> PathBuf {
        self.dir.path().join("calls.log")
    }

    fn media(&self) -> PathBuf {
        self.dir.path().join("show.mkv")
    }

    fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.log_path())
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[allow(deprecated)]
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("mkvtool").unwrap();
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env_remove("RUST_LOG")
            .arg("--config")
            .arg(self.config_path());
        cmd
    }

    fn path(&self) -> &Path {
        self.dir.path()
    }
}

#[test]
fn test_show_table() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("show")
        .arg(fx.media())
        .assert()
        .success()
        .stdout(predicate::str::contains("| NUMBER | TYPE"))
        .stdout(predicate::str::contains("English (Forced)"))
        .stdout(predicate::str::contains("<=====").count(3));
}

#[test]
fn test_show_uid() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["show", "--uid"])
        .arg(fx.media())
        .assert()
        .success()
        .stdout(predicate::str::contains("UID"))
        .stdout(predicate::str::contains("105"));
}

#[test]
fn test_show_json() {
    let fx = Fixture::new();
    let output = fx
        .cmd()
        .args(["show", "--json"])
        .arg(fx.media())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["tracks"].as_array().unwrap().len(), 5);
    assert_eq!(json["tracks"][4]["language"], "spa");
    assert_eq!(json["tracks"][2]["type"], "subtitles");
}

#[test]
fn test_setdefault_by_language() {
    let fx = Fixture::new();
    let media = fx.media();
    fx.cmd()
        .args(["setdefaultbylang", "-l", "eng", "-i", "forced"])
        .arg(&media)
        .assert()
        .success();

    let file = media.display();
    assert_eq!(
        fx.calls(),
        vec![
            format!(
                "mkvpropedit {file} --edit track:3 --set flag-default=0 \
                 --edit track:4 --set flag-default=0 --edit track:5 --set flag-default=0"
            ),
            format!("mkvpropedit {file} --edit track:4 --set flag-default=1"),
        ]
    );
}

#[test]
fn test_setdefault_by_language_from_config() {
    let fx = Fixture::new();
    let mut config = fs::read_to_string(fx.config_path()).unwrap();
    config.push_str("\n[subtitles]\nlanguages = [\"por\", \"spa\"]\n");
    fs::write(fx.config_path(), config).unwrap();

    fx.cmd()
        .arg("setdefaultbylang")
        .arg(fx.media())
        .assert()
        .success();

    let calls = fx.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[1].ends_with("--edit track:5 --set flag-default=1"));
}

#[test]
fn test_setdefault_by_language_no_match() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["setdefaultbylang", "-l", "jpn", "-l", "kor"])
        .arg(fx.media())
        .assert()
        .failure()
        .stderr(predicate::str::contains("no track with language(s): jpn,kor"));

    assert!(fx.calls().is_empty());
}

#[test]
fn test_setdefault_dry_run_prints_commands() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["-n", "setdefault", "-t", "2"])
        .arg(fx.media())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry-run mode"))
        .stdout(predicate::str::contains(
            r#""--edit" "track:3" "--set" "flag-default=0" "--edit" "track:4""#,
        ))
        .stdout(predicate::str::contains(r#""--edit" "track:3" "--set" "flag-default=1""#));

    assert!(fx.calls().is_empty());
}

#[test]
fn test_setdefault_missing_track() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["setdefault", "-t", "9"])
        .arg(fx.media())
        .assert()
        .failure()
        .stderr(predicate::str::contains("track #9 not found in file"));

    assert!(fx.calls().is_empty());
}

#[test]
fn test_setdefault_continues_after_failures() {
    let fx = Fixture::new();
    let missing = fx.path().join("missing.mkv");
    fx.cmd()
        .args(["setdefault", "-t", "3"])
        .arg(&missing)
        .arg(fx.media())
        .assert()
        .success()
        .stderr(predicate::str::contains("is not readable. Skipping."));

    assert_eq!(fx.calls().len(), 2);
}

#[test]
fn test_only_extracts_and_muxes() {
    let fx = Fixture::new();
    let output = fx.path().join("out.mkv");
    fx.cmd()
        .args(["only", "-l", "por", "-l", "spa"])
        .arg(fx.media())
        .arg(&output)
        .assert()
        .success();

    let calls = fx.calls();
    assert_eq!(calls.len(), 2);
    assert!(calls[0].starts_with(&format!("mkvextract {} tracks 4:", fx.media().display())));
    assert!(calls[1].starts_with(&format!(
        "mkvmerge -o {} -S {} --language 0:spa ",
        output.display(),
        fx.media().display()
    )));
}

#[test]
fn test_merge_without_subs_dry_run() {
    let fx = Fixture::new();
    fx.cmd()
        .args(["--dry-run", "merge", "-o", "out.mkv", "--subs", "false"])
        .arg(fx.media())
        .arg("extra.srt")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""-S""#))
        .stdout(predicate::str::contains(r#""extra.srt" "-o" "out.mkv""#));
}

#[test]
fn test_remux() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("remux")
        .arg(fx.media())
        .arg("copy.mkv")
        .assert()
        .success();

    assert_eq!(
        fx.calls(),
        vec![format!("mkvmerge {} -o copy.mkv", fx.media().display())]
    );
}

#[test]
fn test_check_tools_uses_configured_paths() {
    let fx = Fixture::new();
    fx.cmd()
        .arg("check-tools")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ mkvmerge"))
        .stdout(predicate::str::contains("All required tools are available!"));
}
