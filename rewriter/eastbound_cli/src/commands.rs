//! The rewrite command: move `const` east across C++ source files.
//!
//! Supports in-place rewriting (the default), `--stdout` for printing the
//! rewritten text, and `--check` for CI-style verification without writing
//! anything. Per-file failures are reported and counted; processing always
//! continues with the remaining files.

use std::io::Write;

use eastbound_rewrite::rewrite;

/// Parsed command-line options.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    /// Print rewritten text to stdout instead of writing files.
    pub stdout: bool,
    /// Write nothing; report files that would change.
    pub check: bool,
    /// Input files, in argument order.
    pub files: Vec<String>,
}

/// Result of processing a single file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileOutcome {
    /// File already in east-const form.
    Unchanged,
    /// File was rewritten (or its rewritten text printed).
    Rewritten,
    /// File would be rewritten (in check mode).
    WouldRewrite,
    /// File could not be processed. Contains the error message.
    Failed(String),
}

/// Parse command-line arguments into [`Options`].
///
/// Flags and file paths may be interleaved. Returns an error message for
/// unknown flags, conflicting modes, or an empty file list.
pub fn parse_args(args: &[String]) -> Result<Options, String> {
    let mut options = Options::default();

    for arg in args {
        match arg.as_str() {
            "--stdout" => options.stdout = true,
            "--check" => options.check = true,
            arg if arg.starts_with('-') => return Err(format!("Unknown option: {arg}")),
            _ => options.files.push(arg.clone()),
        }
    }

    if options.stdout && options.check {
        return Err("Cannot use --check with --stdout".to_string());
    }
    if options.files.is_empty() {
        return Err("error: no input files".to_string());
    }

    Ok(options)
}

/// Rewrite a single file according to `options`.
///
/// In `--stdout` mode the rewritten text is written to `out` whether or
/// not it differs from the input, so multiple files concatenate in
/// argument order; the other modes never touch `out`.
pub fn process_file(path: &str, options: &Options, out: &mut impl Write) -> FileOutcome {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => return FileOutcome::Failed(format!("error: cannot read '{path}': {e}")),
    };

    let rewritten = match rewrite(&content) {
        Ok(rewritten) => rewritten,
        Err(e) => {
            tracing::debug!(offset = e.offset(), "lex error");
            return FileOutcome::Failed(format!("error: {path}: {e}"));
        }
    };

    if options.stdout {
        if let Err(e) = write!(out, "{rewritten}") {
            return FileOutcome::Failed(format!("error: cannot write output: {e}"));
        }
        return if rewritten == content {
            FileOutcome::Unchanged
        } else {
            FileOutcome::Rewritten
        };
    }

    if rewritten == content {
        return FileOutcome::Unchanged;
    }

    if options.check {
        return FileOutcome::WouldRewrite;
    }

    if let Err(e) = std::fs::write(path, &rewritten) {
        return FileOutcome::Failed(format!("error: cannot write '{path}': {e}"));
    }

    FileOutcome::Rewritten
}

/// Process every file and return the process exit code.
///
/// - `0` — all files processed; nothing left to change.
/// - `1` — check mode found files that would be rewritten.
/// - `2` — at least one file failed (I/O or lexical error).
pub fn run(options: &Options) -> i32 {
    let mut changed = 0usize;
    let mut unchanged = 0usize;
    let mut failed = 0usize;
    let mut stdout = std::io::stdout();

    for path in &options.files {
        match process_file(path, options, &mut stdout) {
            FileOutcome::Rewritten => {
                tracing::debug!(%path, "rewritten");
                if !options.stdout {
                    println!("Rewrote: {path}");
                }
                changed += 1;
            }
            FileOutcome::WouldRewrite => {
                tracing::debug!(%path, "would rewrite");
                println!("Would rewrite: {path}");
                changed += 1;
            }
            FileOutcome::Unchanged => {
                tracing::debug!(%path, "unchanged");
                unchanged += 1;
            }
            FileOutcome::Failed(message) => {
                tracing::warn!(%path, "failed");
                eprintln!("{message}");
                failed += 1;
            }
        }
    }

    if !options.stdout && options.files.len() > 1 {
        let verb = if options.check { "would be rewritten" } else { "rewritten" };
        println!("{changed} {verb}, {unchanged} unchanged, {failed} failed");
    }

    if failed > 0 {
        return 2;
    }
    if options.check && changed > 0 {
        return 1;
    }
    0
}
