mod api;
mod components;
mod download;
mod store;

use api::HttpGenerationService;
use components::book_form::BookForm;
use components::character_form::CharacterForm;
use components::header::Header;
use components::results::{BookPanel, CharacterList};
use components::settings_modal::SettingsModal;
use components::toolbar::Toolbar;
use shared::models::{BookRequest, CharacterRequest};
use shared::service::{run_book_submission, run_character_submission};
use shared::session::{SessionAction, SubmissionId};
use store::{ModalType, State, StoreContext};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(State::default);
    let view = store.session.view();

    let on_generate_book = {
        let store = store.clone();
        Callback::from(move |req: BookRequest| {
            let id = SubmissionId::new();
            store.dispatch(SessionAction::BookSubmitted(id).into());

            let service = HttpGenerationService::new(store.settings.clone());
            let store = store.clone();
            yew::platform::spawn_local(async move {
                let action = run_book_submission(&service, id, req).await;
                store.dispatch(action.into());
            });
        })
    };

    let on_generate_character = {
        let store = store.clone();
        Callback::from(move |req: CharacterRequest| {
            let id = SubmissionId::new();
            store.dispatch(SessionAction::CharacterSubmitted(id).into());

            let service = HttpGenerationService::new(store.settings.clone());
            let store = store.clone();
            yew::platform::spawn_local(async move {
                let action = run_character_submission(&service, id, req).await;
                store.dispatch(action.into());
            });
        })
    };

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <div class="app-container">
                <Header />
                <Toolbar />
                <div class="forms">
                    <BookForm config={store.book_form.clone()} on_submit={on_generate_book} />
                    <CharacterForm on_submit={on_generate_character} />
                </div>
                <BookPanel
                    book={view.book.clone()}
                    error={view.book_error.clone()}
                    pending={view.book_pending}
                />
                <CharacterList
                    characters={view.characters.clone()}
                    error={view.character_error.clone()}
                    pending={view.character_pending}
                />

                if store.modal_open == Some(ModalType::Settings) {
                    <SettingsModal />
                }
            </div>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    {
        console_error_panic_hook::set_once();
        tracing_wasm::set_as_global_default();
    }

    tracing::info!("Starting NarrativaX");
    yew::Renderer::<App>::new().render();
}
