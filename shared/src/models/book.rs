use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genre {
    Adventure,
    Romance,
    #[serde(rename = "Sci-Fi")]
    SciFi,
    Horror,
}

impl Genre {
    pub const ALL: [Genre; 4] = [Genre::Adventure, Genre::Romance, Genre::SciFi, Genre::Horror];

    /// Label shown in the UI and sent over the wire.
    pub fn label(self) -> &'static str {
        match self {
            Genre::Adventure => "Adventure",
            Genre::Romance => "Romance",
            Genre::SciFi => "Sci-Fi",
            Genre::Horror => "Horror",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tone {
    Romantic,
    #[serde(rename = "Dark Romantic")]
    DarkRomantic,
    #[serde(rename = "NSFW")]
    Nsfw,
    Hardcore,
}

impl Tone {
    pub const ALL: [Tone; 4] = [Tone::Romantic, Tone::DarkRomantic, Tone::Nsfw, Tone::Hardcore];

    pub fn label(self) -> &'static str {
        match self {
            Tone::Romantic => "Romantic",
            Tone::DarkRomantic => "Dark Romantic",
            Tone::Nsfw => "NSFW",
            Tone::Hardcore => "Hardcore",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown option: {0}")]
pub struct UnknownOption(pub String);

impl FromStr for Genre {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::ALL
            .into_iter()
            .find(|g| g.label() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl FromStr for Tone {
    type Err = UnknownOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|t| t.label() == s)
            .ok_or_else(|| UnknownOption(s.to_string()))
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// Request payloads
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BookRequest {
    pub prompt: String,
    pub genre: Genre,
    pub tone: Tone,
}

/// A generated book. The backend owns the shape, so every field is optional
/// and unknown fields are ignored.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapters: Option<Chapters>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Chapters {
    Text(String),
    Structured(Value),
}

impl Chapters {
    /// Flattens chapter content into displayable text blocks.
    pub fn blocks(&self) -> Vec<String> {
        match self {
            Chapters::Text(text) => vec![text.clone()],
            Chapters::Structured(Value::Array(items)) => items.iter().map(chapter_block).collect(),
            Chapters::Structured(Value::Null) => Vec::new(),
            Chapters::Structured(other) => {
                vec![serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string())]
            }
        }
    }
}

fn chapter_block(item: &Value) -> String {
    match item {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let title = map.get("title").and_then(Value::as_str);
            let content = map.get("content").and_then(Value::as_str);
            match (title, content) {
                (Some(title), Some(content)) => format!("## {title}\n\n{content}"),
                (Some(title), None) => format!("## {title}"),
                (None, Some(content)) => content.to_string(),
                (None, None) => item.to_string(),
            }
        }
        other => other.to_string(),
    }
}
