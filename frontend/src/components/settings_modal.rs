use crate::store::{Action, StoreContext};
use shared::models::DEFAULT_API_BASE;
use shared::service::{GENERATE_BOOK_PATH, GENERATE_CHARACTER_PATH};
use yew::prelude::*;

#[function_component(SettingsModal)]
pub fn settings_modal() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    // Edits stay local until saved
    let local_state = use_state(|| store.settings.clone());

    let on_submit = {
        let store = store.clone();
        let local_state = local_state.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(Action::UpdateSettings((*local_state).clone()));
            store.dispatch(Action::CloseModal);
        })
    };

    let on_cancel = {
        let store = store.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            store.dispatch(Action::CloseModal);
        })
    };

    let on_overlay_click = {
        let store = store.clone();
        Callback::from(move |_| store.dispatch(Action::CloseModal))
    };

    let on_api_base_input = {
        let local_state = local_state.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut s = (*local_state).clone();
            s.api_base = input.value();
            local_state.set(s);
        })
    };

    html! {
        <div class="modal-overlay" onclick={on_overlay_click}>
            <div class="modal-content" onclick={|e: MouseEvent| e.stop_propagation()}>
                <div class="modal-header">
                    <h2 class="modal-title">{"Settings"}</h2>
                    <button class="close-btn" onclick={on_cancel.clone()}>{"×"}</button>
                </div>

                <div class="modal-body">
                    <div class="form-group">
                        <label class="form-label">{"Backend URL"}</label>
                        <input type="text" class="form-input"
                            value={local_state.api_base.clone()}
                            oninput={on_api_base_input}
                            placeholder={DEFAULT_API_BASE}
                        />
                        <p class="form-hint">
                            {"Requests go to "}<code>{local_state.endpoint(GENERATE_BOOK_PATH)}</code>
                            {" and "}<code>{local_state.endpoint(GENERATE_CHARACTER_PATH)}</code>
                        </p>
                    </div>

                    <div class="form-actions">
                        <button class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                        <button class="btn btn-primary" onclick={on_submit}>{"Save Settings"}</button>
                    </div>
                </div>
            </div>
        </div>
    }
}
