use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="app-header">
            <h1 class="app-title">{"NarrativaX"}</h1>
            <p class="app-tagline">{"Your AI-powered book studio"}</p>
        </header>
    }
}
