//! Session state and the command interpreter
//!
//! One `Session` per process. It owns the current-directory pointer and
//! the read-eval-print loop; every command executes to completion before
//! the next prompt. `process_command` is the single error boundary: a
//! failing handler becomes one printed line, never a dead session.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{DateTime, Local};
use tracing::debug;

use crate::confirm::ConfirmSource;
use crate::errors::{AppError, AppResult};
use crate::fs::{self, ops};

/// What the loop should do after one dispatched line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Interactive shell session.
///
/// Invariant: `current_dir` always names an existing directory after any
/// command completes; a failed `cd` leaves it untouched.
pub struct Session {
    current_dir: PathBuf,
}

impl Session {
    pub fn new(start_dir: PathBuf) -> Self {
        Self {
            current_dir: start_dir,
        }
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    /// Blocking read-eval-print loop over stdin/stdout. Returns when the
    /// user types `exit` or stdin reaches end of file.
    pub fn run(&mut self, confirm: &mut dyn ConfirmSource) -> io::Result<()> {
        let mut stdout = io::stdout();
        writeln!(
            stdout,
            "fileman: console file manager. Type 'help' for the command list."
        )?;

        let mut line = String::new();
        loop {
            write!(stdout, "{} > ", self.current_dir.display())?;
            stdout.flush()?;

            line.clear();
            if io::stdin().read_line(&mut line)? == 0 {
                // EOF behaves like exit
                break;
            }
            if self.process_command(line.trim(), &mut stdout, confirm)? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Parse one input line and dispatch it. Handler errors are rendered
    /// here and the loop continues; only a failure of the output channel
    /// itself propagates.
    pub fn process_command(
        &mut self,
        line: &str,
        out: &mut dyn Write,
        confirm: &mut dyn ConfirmSource,
    ) -> io::Result<Flow> {
        if line == "exit" {
            return Ok(Flow::Exit);
        }

        let mut parts = line.split(' ');
        let name = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        debug!(command = name, argc = args.len(), "dispatching");

        let result = match name {
            "ls" => self.cmd_ls(&args, out),
            "cd" => self.cmd_cd(&args),
            "mkdir" => self.cmd_mkdir(&args, out),
            "rm" => self.cmd_rm(&args, out),
            "mv" => self.cmd_mv(&args, out, confirm),
            "cp" => self.cmd_cp(&args, out, confirm),
            "finfo" => self.cmd_finfo(&args, out),
            "find" => self.cmd_find(&args, out),
            "help" => self.cmd_help(out),
            _ => {
                writeln!(out, "Unknown command. Type 'help' for the command list.")?;
                Ok(())
            }
        };

        if let Err(err) = result {
            writeln!(out, "{err}")?;
        }
        Ok(Flow::Continue)
    }

    fn cmd_ls(&self, args: &[&str], out: &mut dyn Write) -> AppResult<()> {
        let detailed = args.first() == Some(&"-i");

        // An unreadable directory renders the same as an empty one.
        let entries = match ops::read_directory(&self.current_dir) {
            Ok(entries) => entries,
            Err(err) => {
                debug!(%err, "listing failed");
                Vec::new()
            }
        };

        if entries.is_empty() {
            writeln!(out, "Directory is empty.")?;
            return Ok(());
        }

        for entry in entries {
            if detailed {
                writeln!(
                    out,
                    "{} - {} байт - {}",
                    entry.name,
                    entry.size,
                    format_time(entry.modified)
                )?;
            } else {
                writeln!(out, "{}", entry.name)?;
            }
        }
        Ok(())
    }

    fn cmd_cd(&mut self, args: &[&str]) -> AppResult<()> {
        let token = first_arg(args, "directory path")?;
        let target = fs::path::resolve(&self.current_dir, token);

        // ".." is applied unconditionally (a no-op at the root); any other
        // target must be an existing directory.
        if token == ".." || target.is_dir() {
            self.current_dir = target;
            Ok(())
        } else {
            Err(AppError::NotFound("Directory".into()))
        }
    }

    fn cmd_mkdir(&self, args: &[&str], out: &mut dyn Write) -> AppResult<()> {
        let name = first_arg(args, "directory name")?;
        let path = self.current_dir.join(name);

        if path.exists() {
            return Err(AppError::AlreadyExists(format!("Directory '{name}'")));
        }
        ops::create_directory(&path)?;
        writeln!(out, "Created directory: {name}")?;
        Ok(())
    }

    fn cmd_rm(&self, args: &[&str], out: &mut dyn Write) -> AppResult<()> {
        let name = first_arg(args, "file or directory name")?;
        let path = self.current_dir.join(name);

        if !path.exists() {
            return Err(AppError::NotFound("File or directory".into()));
        }
        if path.is_dir() && !ops::is_empty_dir(&path)? {
            return Err(AppError::NotEmptyDirectory(name.to_string()));
        }
        ops::delete_entry(&path)?;
        writeln!(out, "Removed: {name}")?;
        Ok(())
    }

    fn cmd_mv(
        &self,
        args: &[&str],
        out: &mut dyn Write,
        confirm: &mut dyn ConfirmSource,
    ) -> AppResult<()> {
        let (src, dst) = two_args(args, "source and destination")?;
        let src_path = self.current_dir.join(src);
        let dst_path = self.current_dir.join(dst);

        if !src_path.exists() {
            return Err(AppError::NotFound("Source file".into()));
        }
        if dst_path.exists() && !confirm_overwrite(dst, confirm) {
            // Declined overwrite is a normal abort, not an error.
            return Ok(());
        }
        ops::rename_entry(&src_path, &dst_path)?;
        writeln!(out, "Moved: {src} -> {dst}")?;
        Ok(())
    }

    fn cmd_cp(
        &self,
        args: &[&str],
        out: &mut dyn Write,
        confirm: &mut dyn ConfirmSource,
    ) -> AppResult<()> {
        let (src, dst) = two_args(args, "source and destination")?;
        let src_path = self.current_dir.join(src);
        let dst_path = self.current_dir.join(dst);

        if !src_path.exists() {
            return Err(AppError::NotFound("Source file".into()));
        }
        if dst_path.exists() && !confirm_overwrite(dst, confirm) {
            return Ok(());
        }
        ops::copy_bytes(&src_path, &dst_path)?;
        writeln!(out, "Copied: {src} -> {dst}")?;
        Ok(())
    }

    fn cmd_finfo(&self, args: &[&str], out: &mut dyn Write) -> AppResult<()> {
        let name = first_arg(args, "file name")?;
        let path = self.current_dir.join(name);

        if !path.exists() {
            return Err(AppError::NotFound("File".into()));
        }
        let (size, modified) = ops::read_metadata(&path)?;
        writeln!(out, "Name: {name}")?;
        writeln!(out, "Size: {size} байт")?;
        writeln!(out, "Last modified: {}", format_time(modified))?;
        Ok(())
    }

    fn cmd_find(&self, args: &[&str], out: &mut dyn Write) -> AppResult<()> {
        let name = first_arg(args, "file name to search for")?;

        // Matches stream out as the traversal reaches them; the first
        // write failure is kept and reported after the walk.
        let mut write_err: Option<io::Error> = None;
        fs::search::search_file(&self.current_dir, name, &mut |path| {
            if write_err.is_none() {
                if let Err(err) = writeln!(out, "Found: {}", path.display()) {
                    write_err = Some(err);
                }
            }
        });
        match write_err {
            Some(err) => Err(err.into()),
            None => Ok(()),
        }
    }

    fn cmd_help(&self, out: &mut dyn Write) -> AppResult<()> {
        writeln!(out, "Supported commands:")?;
        writeln!(out, "ls                        - list files in the current directory")?;
        writeln!(out, "ls -i                     - list files with size and modification time")?;
        writeln!(out, "cd [path]                 - change the current directory")?;
        writeln!(out, "mkdir [name]              - create a new directory")?;
        writeln!(out, "rm [name]                 - remove a file or an empty directory")?;
        writeln!(out, "mv [source] [destination] - move or rename a file/directory")?;
        writeln!(out, "cp [source] [destination] - copy a file")?;
        writeln!(out, "finfo [name]              - show file information")?;
        writeln!(out, "find [name]               - search the subtree for an exact file name")?;
        writeln!(out, "help                      - show this command list")?;
        writeln!(out, "exit                      - quit")?;
        Ok(())
    }
}

fn first_arg<'a>(args: &[&'a str], what: &'static str) -> AppResult<&'a str> {
    args.first()
        .copied()
        .filter(|a| !a.is_empty())
        .ok_or(AppError::MissingArgument(what))
}

fn two_args<'a>(args: &[&'a str], what: &'static str) -> AppResult<(&'a str, &'a str)> {
    match args {
        &[src, dst, ..] if !src.is_empty() && !dst.is_empty() => Ok((src, dst)),
        _ => Err(AppError::MissingArgument(what)),
    }
}

fn confirm_overwrite(dst: &str, confirm: &mut dyn ConfirmSource) -> bool {
    confirm.confirm(&format!("File {dst} already exists. Overwrite? (y/n): "))
}

fn format_time(time: Option<SystemTime>) -> String {
    match time {
        Some(t) => DateTime::<Local>::from(t)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}
