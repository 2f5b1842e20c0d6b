use crate::download;
use crate::store::{Action, ModalType, StoreContext};
use shared::export;
use yew::prelude::*;

#[function_component(Toolbar)]
pub fn toolbar() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let view = store.session.view();

    let open_settings = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::OpenModal(ModalType::Settings)))
    };

    let export_book = {
        let store = store.clone();
        Callback::from(move |_| {
            let view = store.session.view();
            if let Some(book) = &view.book {
                let markdown = export::book_markdown(book, &view.characters);
                if let Err(e) = download::save_text("narrativax_book.md", "text/markdown", &markdown) {
                    tracing::warn!("Book export failed: {:?}", e);
                }
            }
        })
    };

    let export_characters = {
        let store = store.clone();
        Callback::from(move |_| match export::characters_json(&store.session.characters) {
            Ok(json) => {
                if let Err(e) = download::save_text("characters.json", "application/json", &json) {
                    tracing::warn!("Character export failed: {:?}", e);
                }
            }
            Err(e) => tracing::warn!("Could not serialize characters: {}", e),
        })
    };

    html! {
        <div class={classes!("toolbar", view.busy.then_some("busy"))}>
            if let Some(message) = view.loading_message {
                <span class="loading-message">{message}</span>
            }
            <div class="toolbar-actions">
                if view.book.is_some() {
                    <button class="btn btn-secondary btn-sm" onclick={export_book}>{"Export Book"}</button>
                }
                if !view.characters.is_empty() {
                    <button class="btn btn-secondary btn-sm" onclick={export_characters}>{"Export Characters (JSON)"}</button>
                }
                <button class="btn btn-secondary btn-sm" onclick={open_settings}>{"Settings"}</button>
            </div>
        </div>
    }
}
