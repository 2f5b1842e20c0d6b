use crate::StubConfig;
use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::json;
use shared::models::{Book, BookRequest, Chapters, Character, CharacterRequest};

const TITLE_WORDS: usize = 6;

const BEATS: [&str; 5] = [
    "The Spark",
    "Complications",
    "The Turn",
    "Reckoning",
    "Aftermath",
];

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    pub error: String,
}

type HandlerError = (StatusCode, Json<ErrorBody>);

fn bad_request(message: &str) -> HandlerError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
}

pub async fn generate_book(
    State(config): State<StubConfig>,
    Json(payload): Json<BookRequest>,
) -> Result<Json<Book>, HandlerError> {
    let prompt = payload.prompt.trim();
    if prompt.is_empty() {
        tracing::warn!("Rejected book request with empty prompt");
        return Err(bad_request("prompt must not be empty"));
    }

    let chapters = (0..config.chapter_count)
        .map(|i| {
            let beat = BEATS[i % BEATS.len()];
            json!({
                "title": format!("Chapter {}: {}", i + 1, beat),
                "content": format!(
                    "{} unfolds in a {} {} register, drawn from: {}",
                    beat,
                    payload.tone.label().to_lowercase(),
                    payload.genre.label().to_lowercase(),
                    prompt
                ),
            })
        })
        .collect();

    let book = Book {
        title: Some(title_from_prompt(prompt)),
        outline: Some(format!(
            "A {} {} story: {}",
            payload.tone.label().to_lowercase(),
            payload.genre.label(),
            prompt
        )),
        chapters: Some(Chapters::Structured(serde_json::Value::Array(chapters))),
    };
    tracing::info!(genre = %payload.genre, tone = %payload.tone, "Generated stub book");
    Ok(Json(book))
}

pub async fn generate_character(Json(payload): Json<CharacterRequest>) -> Json<Character> {
    tracing::info!(name = %payload.name, "Generated stub character");
    Json(Character::from(payload))
}

/// First few words of the prompt, title-cased, without a leading article.
fn title_from_prompt(prompt: &str) -> String {
    let mut words: Vec<&str> = prompt.split_whitespace().take(TITLE_WORDS + 1).collect();
    if words.len() > 1 && matches!(words[0].to_lowercase().as_str(), "a" | "an" | "the") {
        words.remove(0);
    }
    words.truncate(TITLE_WORDS);
    words
        .iter()
        .map(|w| {
            let w = w.trim_matches(|c: char| !c.is_alphanumeric());
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .filter(|w| !w.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
