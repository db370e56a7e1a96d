//! Subprocess execution.
//!
//! Every mkvtoolnix invocation goes through a [`Runner`], so the same
//! action code can execute commands, print them, or record them.

use crate::{Error, Result};
use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Executes one external command.
pub trait Runner {
    /// Run `program` with `args`, waiting for it to finish.
    fn run(&self, program: &Path, args: &[String]) -> Result<()>;
}

/// Spawns the program with inherited stdio.
///
/// mkvtoolnix exits with 1 when it only emitted warnings; that counts as
/// success.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandRunner;

impl Runner for CommandRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<()> {
        let tool = tool_name(program);

        #[cfg(feature = "tracing")]
        tracing::debug!("Running: {}", command_line(program, args));

        let status = Command::new(program).args(args).status().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found(&tool)
            } else {
                Error::Io(e)
            }
        })?;

        // 0 for success, 1 for warnings (still OK), 2 for errors
        if !status.success() && status.code() != Some(1) {
            return Err(Error::tool_failed(tool, status.to_string()));
        }

        Ok(())
    }
}

/// Prints the quoted command line instead of running it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DryRunRunner;

impl Runner for DryRunRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<()> {
        println!("{}", command_line(program, args));
        Ok(())
    }
}

/// Records every command without running anything.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands seen so far, in order.
    pub fn calls(&self) -> Vec<(PathBuf, Vec<String>)> {
        self.calls.borrow().clone()
    }
}

impl Runner for RecordingRunner {
    fn run(&self, program: &Path, args: &[String]) -> Result<()> {
        self.calls
            .borrow_mut()
            .push((program.to_path_buf(), args.to_vec()));
        Ok(())
    }
}

/// Render a command with every element double-quoted.
pub fn command_line(program: &Path, args: &[String]) -> String {
    std::iter::once(program.to_string_lossy().into_owned())
        .chain(args.iter().cloned())
        .map(|part| format!("{:?}", part))
        .collect::<Vec<_>>()
        .join(" ")
}

fn tool_name(program: &Path) -> String {
    program
        .file_name()
        .unwrap_or(program.as_os_str())
        .to_string_lossy()
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_line_quotes_everything() {
        let line = command_line(
            Path::new("/usr/bin/mkvmerge"),
            &["-o".to_string(), "my file.mkv".to_string()],
        );
        assert_eq!(line, r#""/usr/bin/mkvmerge" "-o" "my file.mkv""#);
    }

    #[test]
    fn test_command_line_escapes_quotes() {
        let line = command_line(Path::new("mkvpropedit"), &[r#"a"b"#.to_string()]);
        assert_eq!(line, r#""mkvpropedit" "a\"b""#);
    }

    #[test]
    fn test_tool_name_strips_directories() {
        assert_eq!(tool_name(Path::new("/opt/bin/mkvextract")), "mkvextract");
        assert_eq!(tool_name(Path::new("mkvmerge")), "mkvmerge");
    }

    #[test]
    fn test_recording_runner_keeps_order() {
        let runner = RecordingRunner::new();
        runner.run(Path::new("a"), &["1".to_string()]).unwrap();
        runner.run(Path::new("b"), &[]).unwrap();

        let calls = runner.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], (PathBuf::from("a"), vec!["1".to_string()]));
        assert_eq!(calls[1].0, PathBuf::from("b"));
    }

    #[test]
    fn test_command_runner_missing_program() {
        let err = CommandRunner
            .run(Path::new("nonexistent_tool_12345"), &[])
            .unwrap_err();
        assert!(matches!(err, Error::ToolNotFound { .. }));
    }

    #[test]
    fn test_dry_run_never_fails() {
        DryRunRunner
            .run(Path::new("nonexistent_tool_12345"), &["x".to_string()])
            .unwrap();
    }
}
