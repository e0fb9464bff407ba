use gtk::prelude::*;

use crate::note::Note;

/// Where a note window is in its life.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteState {
    Uninitialized,
    Loaded,
    Editing,
    Closing,
    Terminated,
}

/// Something that can hand over the full current text of a note.
pub trait TextSource {
    fn full_text(&self) -> String;
}

impl TextSource for str {
    fn full_text(&self) -> String {
        self.to_string()
    }
}

impl TextSource for String {
    fn full_text(&self) -> String {
        self.clone()
    }
}

impl TextSource for gtk::TextBuffer {
    fn full_text(&self) -> String {
        let (start, end) = self.bounds();
        self.text(&start, &end, false).to_string()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteEvent {
    /// The text widget's content changed.
    Changed,
    /// The user asked to close the window.
    CloseRequested,
}

/// Keeps one note's file in step with its text widget.
#[derive(Debug)]
pub struct NoteController {
    note: Note,
    state: NoteState,
    initial_text: String,
}

impl NoteController {
    pub fn new(note: Note) -> Self {
        NoteController {
            note,
            state: NoteState::Uninitialized,
            initial_text: String::new(),
        }
    }

    /// Read the note from disk once. Returns the text the widget should start with.
    pub fn load(&mut self) -> &str {
        if self.state == NoteState::Uninitialized {
            self.initial_text = self.note.load().unwrap_or_default();
            self.state = NoteState::Loaded;
            log::debug!(
                "Loaded note {} ({} bytes)",
                self.note.id,
                self.initial_text.len()
            );
        }
        &self.initial_text
    }

    pub fn note(&self) -> &Note {
        &self.note
    }

    pub fn state(&self) -> NoteState {
        self.state
    }

    /// Dispatch one event, pulling the current text from `source`.
    pub fn handle<S: TextSource + ?Sized>(&mut self, event: NoteEvent, source: &S) -> NoteState {
        match (event, self.state) {
            (_, NoteState::Uninitialized | NoteState::Closing | NoteState::Terminated) => {
                log::debug!("Ignoring {:?} in state {:?}", event, self.state);
            }
            (NoteEvent::Changed, _) => {
                self.state = NoteState::Editing;
                self.persist(&source.full_text());
            }
            (NoteEvent::CloseRequested, _) => {
                self.state = NoteState::Closing;
                self.persist(&source.full_text());
                self.state = NoteState::Terminated;
                log::debug!("Note {} closed", self.note.id);
            }
        }
        self.state
    }

    fn persist(&self, text: &str) {
        if let Err(e) = self.note.save(text) {
            log::error!("Failed to save note: {}", e);
        }
    }
}
