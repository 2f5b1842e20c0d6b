//! Editable form state and the option catalog the book form offers.

use crate::models::{BookRequest, CharacterRequest, Genre, Tone};

/// Options offered by the book form and the initial selection.
#[derive(Clone, Debug, PartialEq)]
pub struct BookFormConfig {
    pub genres: Vec<Genre>,
    pub default_genre: Genre,
    pub tones: Vec<Tone>,
    pub default_tone: Tone,
}

impl Default for BookFormConfig {
    fn default() -> Self {
        Self {
            genres: Genre::ALL.to_vec(),
            default_genre: Genre::Adventure,
            tones: Tone::ALL.to_vec(),
            default_tone: Tone::Romantic,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BookDraft {
    pub prompt: String,
    pub genre: Genre,
    pub tone: Tone,
}

impl BookDraft {
    pub fn new(config: &BookFormConfig) -> Self {
        Self {
            prompt: String::new(),
            genre: config.default_genre,
            tone: config.default_tone,
        }
    }

    /// Packages the current field values. Empty prompts are allowed.
    pub fn to_request(&self) -> BookRequest {
        BookRequest {
            prompt: self.prompt.clone(),
            genre: self.genre,
            tone: self.tone,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CharacterDraft {
    pub name: String,
    pub role: String,
    pub appearance: String,
}

impl CharacterDraft {
    pub fn to_request(&self) -> CharacterRequest {
        CharacterRequest {
            name: self.name.clone(),
            role: self.role.clone(),
            appearance: self.appearance.clone(),
        }
    }
}
