use crate::error::ApiResult;
use crate::models::{Book, BookRequest, Character, CharacterRequest};
use crate::session::{SessionAction, SubmissionId};
use async_trait::async_trait;

pub const GENERATE_BOOK_PATH: &str = "generateBook";
pub const GENERATE_CHARACTER_PATH: &str = "generateCharacter";

/// The remote generation backend. Implementations issue exactly one request
/// per call and never retry.
#[async_trait(?Send)]
pub trait GenerationService {
    async fn generate_book(&self, request: &BookRequest) -> ApiResult<Book>;
    async fn generate_character(&self, request: &CharacterRequest) -> ApiResult<Character>;
}

/// Runs one book submission and returns the action that records its outcome.
pub async fn run_book_submission<S>(
    service: &S,
    id: SubmissionId,
    request: BookRequest,
) -> SessionAction
where
    S: GenerationService + ?Sized,
{
    tracing::debug!(%id, genre = %request.genre, tone = %request.tone, "Generating book");
    let result = service.generate_book(&request).await;
    if let Err(e) = &result {
        tracing::warn!(%id, "Error generating book: {}", e);
    }
    SessionAction::BookResolved { id, result }
}

pub async fn run_character_submission<S>(
    service: &S,
    id: SubmissionId,
    request: CharacterRequest,
) -> SessionAction
where
    S: GenerationService + ?Sized,
{
    tracing::debug!(%id, name = %request.name, "Generating character");
    let result = service.generate_character(&request).await;
    if let Err(e) = &result {
        tracing::warn!(%id, "Error generating character: {}", e);
    }
    SessionAction::CharacterResolved { id, result }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::forms::{BookDraft, BookFormConfig, CharacterDraft};
    use crate::models::{Chapters, Genre, Tone};
    use crate::session::Session;
    use std::cell::RefCell;
    use std::fmt;
    use std::sync::{Arc, Mutex};
    use tracing::field::{Field, Visit};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    type Captured = Arc<Mutex<Vec<(Level, String)>>>;

    /// Collects every event's level and message.
    struct CaptureLayer(Captured);

    struct MessageVisitor(String);

    impl Visit for MessageVisitor {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: Subscriber> Layer<S> for CaptureLayer {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    fn warnings(captured: &Captured) -> Vec<String> {
        captured
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _)| *level == Level::WARN)
            .map(|(_, message)| message.clone())
            .collect()
    }

    #[derive(Default)]
    struct RecordingService {
        books: RefCell<Vec<BookRequest>>,
        characters: RefCell<Vec<CharacterRequest>>,
        book_reply: Option<Book>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl GenerationService for RecordingService {
        async fn generate_book(&self, request: &BookRequest) -> ApiResult<Book> {
            self.books.borrow_mut().push(request.clone());
            if self.fail {
                return Err(ApiError::from_status(500, r#"{"error":"model offline"}"#));
            }
            Ok(self.book_reply.clone().unwrap_or_default())
        }

        async fn generate_character(&self, request: &CharacterRequest) -> ApiResult<Character> {
            self.characters.borrow_mut().push(request.clone());
            if self.fail {
                return Err(ApiError::Transport("offline".to_string()));
            }
            Ok(Character::from(request.clone()))
        }
    }

    #[tokio::test]
    async fn book_submission_calls_backend_once_with_form_values() {
        let service = RecordingService {
            book_reply: Some(Book {
                title: Some("Dragon Heist".to_string()),
                outline: Some("...".to_string()),
                chapters: Some(Chapters::Text("...".to_string())),
            }),
            ..RecordingService::default()
        };
        let mut draft = BookDraft::new(&BookFormConfig::default());
        draft.prompt = "A dragon heist".to_string();
        draft.genre = Genre::SciFi;
        draft.tone = Tone::Hardcore;

        let mut session = Session::default();
        let id = SubmissionId::new();
        session.apply(SessionAction::BookSubmitted(id));
        let action = run_book_submission(&service, id, draft.to_request()).await;
        session.apply(action);

        let calls = service.books.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].prompt, "A dragon heist");
        assert_eq!(calls[0].genre, Genre::SciFi);
        assert_eq!(calls[0].tone, Tone::Hardcore);
        assert!(service.characters.borrow().is_empty());

        assert_eq!(session.view().book.unwrap().title, "Dragon Heist");
        assert!(session.pending_books.is_empty());
    }

    #[tokio::test]
    async fn character_submission_renders_echoed_character() {
        let service = RecordingService::default();
        let draft = CharacterDraft {
            name: "Kara".to_string(),
            role: "Rogue".to_string(),
            appearance: "Tall, silver hair".to_string(),
        };

        let mut session = Session::default();
        let id = SubmissionId::new();
        session.apply(SessionAction::CharacterSubmitted(id));
        session.apply(run_character_submission(&service, id, draft.to_request()).await);

        assert_eq!(service.characters.borrow().as_slice(), &[draft.to_request()]);
        let view = session.view();
        assert_eq!(view.characters.len(), 1);
        assert_eq!(view.characters[0].name, "Kara");
        assert_eq!(view.characters[0].role, "Rogue");
        assert_eq!(view.characters[0].appearance, "Tall, silver hair");
    }

    #[tokio::test]
    async fn repeated_submissions_are_not_deduplicated() {
        let service = RecordingService::default();
        let request = CharacterDraft::default().to_request();
        let mut session = Session::default();
        for _ in 0..4 {
            let id = SubmissionId::new();
            session.apply(SessionAction::CharacterSubmitted(id));
            session.apply(run_character_submission(&service, id, request.clone()).await);
        }
        assert_eq!(service.characters.borrow().len(), 4);
        assert_eq!(session.view().characters.len(), 4);
    }

    #[tokio::test]
    async fn failures_surface_as_errors() {
        let service = RecordingService {
            fail: true,
            ..RecordingService::default()
        };
        let id = SubmissionId::new();
        let action = run_book_submission(&service, id, BookDraft::new(&BookFormConfig::default()).to_request()).await;
        let SessionAction::BookResolved { id: resolved, result } = action else {
            panic!("expected a book resolution");
        };
        assert_eq!(resolved, id);
        assert_eq!(result.unwrap_err().to_string(), "Server returned 500: model offline");

        let mut session = Session::default();
        let id = SubmissionId::new();
        session.apply(run_character_submission(&service, id, CharacterDraft::default().to_request()).await);
        assert!(session.characters.is_empty());
        assert_eq!(session.view().character_error.as_deref(), Some("Request failed: offline"));
    }

    #[tokio::test]
    async fn failed_calls_are_logged_at_warn() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = RecordingService {
            fail: true,
            ..RecordingService::default()
        };
        let request = BookDraft::new(&BookFormConfig::default()).to_request();
        run_book_submission(&service, SubmissionId::new(), request).await;
        run_character_submission(&service, SubmissionId::new(), CharacterDraft::default().to_request())
            .await;

        let logged = warnings(&captured);
        assert_eq!(logged.len(), 2);
        assert!(logged[0].starts_with("Error generating book: Server returned 500: model offline"));
        assert!(logged[1].starts_with("Error generating character: Request failed: offline"));
    }

    #[tokio::test]
    async fn successful_calls_log_no_warnings() {
        let captured = Captured::default();
        let subscriber = tracing_subscriber::registry().with(CaptureLayer(captured.clone()));
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = RecordingService::default();
        run_character_submission(&service, SubmissionId::new(), CharacterDraft::default().to_request())
            .await;

        assert!(warnings(&captured).is_empty());
    }
}
