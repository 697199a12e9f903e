//! Transcript log and recall history.
//!
//! The transcript is the append-only list of executed commands and their
//! outputs; only the most recent entry mutates, and only while its output is
//! still streaming. The recall buffer holds raw input lines for arrow-key
//! navigation and is a small cursor state machine: `browsing` (no cursor,
//! live input) or `recalling` (cursor into the buffer).

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub command: String,
    pub output: String,
    pub streaming: bool,
}

#[derive(Debug, Default)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: &str, output: String) {
        self.entries.push(TranscriptEntry {
            command: command.to_string(),
            output,
            streaming: false,
        });
    }

    /// Start an entry whose output will arrive line by line.
    pub fn push_streaming(&mut self, command: &str) {
        self.entries.push(TranscriptEntry {
            command: command.to_string(),
            output: String::new(),
            streaming: true,
        });
    }

    /// Append a revealed line to the entry currently streaming.
    pub fn append_streamed_line(&mut self, line: &str) {
        if let Some(last) = self.entries.last_mut() {
            if last.streaming {
                if !last.output.is_empty() {
                    last.output.push('\n');
                }
                last.output.push_str(line);
            }
        }
    }

    pub fn finish_streaming(&mut self) {
        if let Some(last) = self.entries.last_mut() {
            last.streaming = false;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&TranscriptEntry> {
        self.entries.last()
    }
}

/// What a recall step asks the caller to do with the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Recall {
    /// Keep the input buffer as it is.
    Unchanged,
    /// Replace the input buffer with this recalled line.
    Set(String),
    /// Back to browsing: empty the input buffer.
    ClearInput,
}

#[derive(Debug, Default)]
pub struct RecallBuffer {
    commands: Vec<String>,
    cursor: Option<usize>,
}

impl RecallBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an executed line and return to browsing.
    pub fn push(&mut self, command: &str) {
        self.commands.push(command.to_string());
        self.cursor = None;
    }

    /// Up-arrow: move toward the oldest entry, with a floor at index 0.
    pub fn up(&mut self) -> Recall {
        if self.commands.is_empty() {
            return Recall::Unchanged;
        }
        let index = match self.cursor {
            None => self.commands.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(index);
        Recall::Set(self.commands[index].clone())
    }

    /// Down-arrow: move toward the newest entry; moving past the end returns
    /// to browsing with an empty input buffer.
    pub fn down(&mut self) -> Recall {
        match self.cursor {
            None => Recall::Unchanged,
            Some(i) if i + 1 >= self.commands.len() => {
                self.cursor = None;
                Recall::ClearInput
            }
            Some(i) => {
                self.cursor = Some(i + 1);
                Recall::Set(self.commands[i + 1].clone())
            }
        }
    }

    pub fn is_browsing(&self) -> bool {
        self.cursor.is_none()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
