use shared::forms::{BookDraft, BookFormConfig};
use shared::models::{BookRequest, Genre, Tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookFormProps {
    pub config: BookFormConfig,
    pub on_submit: Callback<BookRequest>,
}

#[function_component(BookForm)]
pub fn book_form(props: &BookFormProps) -> Html {
    let draft = {
        let config = props.config.clone();
        use_state(move || BookDraft::new(&config))
    };

    let on_prompt_input = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            let mut d = (*draft).clone();
            d.prompt = input.value();
            draft.set(d);
        })
    };

    let on_genre_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(genre) = select.value().parse::<Genre>() {
                let mut d = (*draft).clone();
                d.genre = genre;
                draft.set(d);
            }
        })
    };

    let on_tone_change = {
        let draft = draft.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(tone) = select.value().parse::<Tone>() {
                let mut d = (*draft).clone();
                d.tone = tone;
                draft.set(d);
            }
        })
    };

    let on_generate = {
        let draft = draft.clone();
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_submit.emit(draft.to_request());
        })
    };

    html! {
        <section class="panel book-form">
            <h2 class="panel-title">{"Create Your Book"}</h2>
            <div class="form-group">
                <textarea class="form-textarea" rows="4"
                    placeholder="Enter your book idea..."
                    value={draft.prompt.clone()}
                    oninput={on_prompt_input}
                />
            </div>
            <div class="form-grid-2">
                <div class="form-group">
                    <label class="form-label">{"Genre"}</label>
                    <select class="form-select" onchange={on_genre_change}>
                        { for props.config.genres.iter().map(|g| html! {
                            <option value={g.label()} selected={*g == draft.genre}>{g.label()}</option>
                        })}
                    </select>
                </div>
                <div class="form-group">
                    <label class="form-label">{"Tone"}</label>
                    <select class="form-select" onchange={on_tone_change}>
                        { for props.config.tones.iter().map(|t| html! {
                            <option value={t.label()} selected={*t == draft.tone}>{t.label()}</option>
                        })}
                    </select>
                </div>
            </div>
            <div class="form-actions">
                <button class="btn btn-primary" onclick={on_generate}>{"Generate Book"}</button>
            </div>
        </section>
    }
}
