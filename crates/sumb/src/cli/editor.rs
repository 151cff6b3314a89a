use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;
use sumbapp::error::{Result, SumbError};

const FALLBACK_EDITOR: &str = "vi";

/// The editor command line: `$EDITOR`, then `$VISUAL`, then plain `vi`.
pub fn editor_command() -> String {
    pick_editor(|name| env::var(name).ok())
}

fn pick_editor(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(lookup)
        .find(|cmd| !cmd.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_EDITOR.to_string())
}

/// Opens a file in the user's editor and waits for it to close.
/// Returns the contents of the file after editing.
fn open_in_editor(path: &Path) -> Result<String> {
    let editor = editor_command();

    // $EDITOR may carry arguments, e.g. "code --wait".
    let mut parts = editor.split_whitespace();
    let program = parts.next().unwrap_or(FALLBACK_EDITOR);
    let status = Command::new(program)
        .args(parts)
        .arg(path)
        .status()
        .map_err(|e| {
            SumbError::Api(format!(
                "Failed to launch editor '{}' ({}). Set $EDITOR, or pass the note text as arguments.",
                editor, e
            ))
        })?;

    if !status.success() {
        return Err(SumbError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(SumbError::Io)
}

/// Opens an editor on `initial` and returns the edited note body.
pub fn edit_body(initial: &str) -> Result<String> {
    let temp_file = env::temp_dir().join(format!("sumb_note_{}.txt", std::process::id()));
    fs::write(&temp_file, initial).map_err(SumbError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(normalize_buffer(&result?))
}

/// Editors append a final newline; the note body should not grow one per edit.
pub fn normalize_buffer(buffer: &str) -> String {
    buffer
        .strip_suffix("\r\n")
        .or_else(|| buffer.strip_suffix('\n'))
        .unwrap_or(buffer)
        .to_string()
}
