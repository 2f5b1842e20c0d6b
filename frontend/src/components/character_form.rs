use shared::forms::CharacterDraft;
use shared::models::CharacterRequest;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CharacterFormProps {
    pub on_submit: Callback<CharacterRequest>,
}

#[function_component(CharacterForm)]
pub fn character_form(props: &CharacterFormProps) -> Html {
    let draft = use_state(CharacterDraft::default);

    let on_name_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let i: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut d = (*draft).clone();
            d.name = i.value();
            draft.set(d);
        })
    };

    let on_role_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let i: web_sys::HtmlInputElement = e.target_unchecked_into();
            let mut d = (*draft).clone();
            d.role = i.value();
            draft.set(d);
        })
    };

    let on_appearance_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let i: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut d = (*draft).clone();
            d.appearance = i.value();
            draft.set(d);
        })
    };

    let on_generate = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |_| on_submit.emit(draft.to_request()))
    };

    html! {
        <section class="panel character-form">
            <h3 class="panel-title">{"Generate Character"}</h3>
            <div class="form-group">
                <input class="form-input" type="text" placeholder="Character Name"
                    value={draft.name.clone()} oninput={on_name_input} />
            </div>
            <div class="form-group">
                <input class="form-input" type="text" placeholder="Character Role"
                    value={draft.role.clone()} oninput={on_role_input} />
            </div>
            <div class="form-group">
                <textarea class="form-textarea" rows="3" placeholder="Character Appearance"
                    value={draft.appearance.clone()} oninput={on_appearance_input} />
            </div>
            <div class="form-actions">
                <button class="btn btn-primary" onclick={on_generate}>{"Generate Character"}</button>
            </div>
        </section>
    }
}
