use crate::error::{ApiError, ApiResult};
use crate::models::{Book, Character};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub const LOADING_MESSAGES: [&str; 6] = [
    "Sharpening quills...",
    "Mixing metaphorical ink...",
    "Convincing characters to behave...",
    "Battling clichés...",
    "Summoning muses...",
    "Where we're going, we don't need chapters...",
];

/// Tags one in-flight generation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubmissionId(pub Uuid);

impl SubmissionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SubmissionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum SessionAction {
    BookSubmitted(SubmissionId),
    BookResolved {
        id: SubmissionId,
        result: ApiResult<Book>,
    },
    CharacterSubmitted(SubmissionId),
    CharacterResolved {
        id: SubmissionId,
        result: ApiResult<Character>,
    },
}

/// Everything generated during one page session.
///
/// The book slice and the character slice never affect each other. The book is
/// last-resolution-wins; characters are append-only in resolution order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub book: Option<Book>,
    pub book_error: Option<ApiError>,
    pub characters: Vec<Character>,
    pub character_error: Option<ApiError>,
    pub pending_books: Vec<SubmissionId>,
    pub pending_characters: Vec<SubmissionId>,
}

impl Session {
    pub fn apply(&mut self, action: SessionAction) {
        match action {
            SessionAction::BookSubmitted(id) => {
                self.pending_books.push(id);
                self.book_error = None;
            }
            SessionAction::BookResolved { id, result } => {
                self.pending_books.retain(|p| *p != id);
                match result {
                    Ok(book) => {
                        self.book = Some(book);
                        self.book_error = None;
                    }
                    // The previous book stays on screen.
                    Err(e) => self.book_error = Some(e),
                }
            }
            SessionAction::CharacterSubmitted(id) => {
                self.pending_characters.push(id);
                self.character_error = None;
            }
            SessionAction::CharacterResolved { id, result } => {
                self.pending_characters.retain(|p| *p != id);
                match result {
                    Ok(character) => {
                        self.characters.push(character);
                        self.character_error = None;
                    }
                    Err(e) => self.character_error = Some(e),
                }
            }
        }
    }

    pub fn is_busy(&self) -> bool {
        !self.pending_books.is_empty() || !self.pending_characters.is_empty()
    }

    pub fn loading_message(&self) -> Option<&'static str> {
        let pending = self.pending_books.len() + self.pending_characters.len();
        if pending == 0 {
            return None;
        }
        Some(LOADING_MESSAGES[(pending - 1) % LOADING_MESSAGES.len()])
    }

    /// Pure projection of the state into what the page shows.
    pub fn view(&self) -> SessionView {
        SessionView {
            book: self.book.as_ref().map(BookView::from),
            book_error: self.book_error.as_ref().map(ToString::to_string),
            book_pending: !self.pending_books.is_empty(),
            characters: self.characters.iter().map(CharacterView::from).collect(),
            character_error: self.character_error.as_ref().map(ToString::to_string),
            character_pending: !self.pending_characters.is_empty(),
            busy: self.is_busy(),
            loading_message: self.loading_message(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SessionView {
    pub book: Option<BookView>,
    pub book_error: Option<String>,
    pub book_pending: bool,
    pub characters: Vec<CharacterView>,
    pub character_error: Option<String>,
    pub character_pending: bool,
    pub busy: bool,
    pub loading_message: Option<&'static str>,
}

/// Missing fields project to empty strings and are simply not drawn.
#[derive(Clone, Debug, PartialEq)]
pub struct BookView {
    pub title: String,
    pub outline: String,
    pub chapters: Vec<String>,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            title: book.title.clone().unwrap_or_default(),
            outline: book.outline.clone().unwrap_or_default(),
            chapters: book.chapters.as_ref().map(|c| c.blocks()).unwrap_or_default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CharacterView {
    pub name: String,
    pub role: String,
    pub appearance: String,
    pub personality: String,
}

impl From<&Character> for CharacterView {
    fn from(c: &Character) -> Self {
        Self {
            name: c.name.clone().unwrap_or_default(),
            role: c.role.clone().unwrap_or_default(),
            appearance: c.appearance.clone().unwrap_or_default(),
            personality: c.personality.clone().unwrap_or_default(),
        }
    }
}
