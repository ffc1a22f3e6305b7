use crate::error::Result;
use rustyline::{error::ReadlineError, Editor};
use std::{
    io::BufRead,
    path::{Path, PathBuf},
};

pub const PROMPT: &str = "cmd> ";

/// A blocking supplier of input lines. `None` means end of stream.
pub trait LineSource {
    fn next_line(&mut self) -> Result<Option<String>>;
}

/// Lines from any buffered reader, terminators removed.
pub struct ReaderSource<R: BufRead> {
    reader: R,
    buf: String,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self) -> Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        let line = self.buf.trim_end_matches(&['\n', '\r'][..]);
        Ok(Some(line.to_string()))
    }
}

/// Interactive line editing with history that survives restarts.
pub struct EditorSource {
    editor: Editor<()>,
    history_path: PathBuf,
}

impl EditorSource {
    pub fn new(history_path: &Path) -> Self {
        let mut editor = Editor::<()>::new();
        if editor.load_history(history_path).is_err() {
            log::debug!("[editor_source] no previous history at {:?}", history_path);
        }
        Self {
            editor,
            history_path: history_path.to_path_buf(),
        }
    }

    pub fn save_history(&mut self) {
        if let Err(e) = self.editor.save_history(&self.history_path) {
            log::warn!(
                "[editor_source] could not save history {:?}: {}",
                self.history_path,
                e
            );
        }
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.editor.readline(PROMPT) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

impl Drop for EditorSource {
    fn drop(&mut self) {
        self.save_history();
    }
}
