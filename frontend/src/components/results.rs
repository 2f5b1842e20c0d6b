use crate::components::markdown::Markdown;
use shared::session::{BookView, CharacterView};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct BookPanelProps {
    pub book: Option<BookView>,
    pub error: Option<String>,
    pub pending: bool,
}

#[function_component(BookPanel)]
pub fn book_panel(props: &BookPanelProps) -> Html {
    html! {
        <section class="panel results">
            <h2 class="panel-title">{"Generated Book"}</h2>
            if let Some(error) = &props.error {
                <div class="error-banner">{format!("Book generation failed. {error}")}</div>
            }
            if props.pending {
                <div class="pending-note">{"Writing..."}</div>
            }
            if let Some(book) = &props.book {
                <article class="book">
                    if !book.title.is_empty() {
                        <h3 class="book-title">{&book.title}</h3>
                    }
                    if !book.outline.is_empty() {
                        <Markdown class={classes!("book-outline")} content={book.outline.clone()} />
                    }
                    { for book.chapters.iter().map(|chapter| html! {
                        <Markdown class={classes!("book-chapter")} content={chapter.clone()} />
                    })}
                </article>
            }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct CharacterListProps {
    pub characters: Vec<CharacterView>,
    pub error: Option<String>,
    pub pending: bool,
}

#[function_component(CharacterList)]
pub fn character_list(props: &CharacterListProps) -> Html {
    html! {
        <section class="panel results">
            <h2 class="panel-title">{"Generated Characters"}</h2>
            if let Some(error) = &props.error {
                <div class="error-banner">{format!("Character generation failed. {error}")}</div>
            }
            if props.pending {
                <div class="pending-note">{"Casting..."}</div>
            }
            if props.characters.is_empty() && !props.pending {
                <div class="empty-state">{"No characters yet."}</div>
            }
            <div class="char-list">
                { for props.characters.iter().enumerate().map(|(index, c)| html! {
                    <div class="char-card" key={index}>
                        <div class="avatar">{c.name.chars().next().unwrap_or('?')}</div>
                        <div class="char-info">
                            <h3 class="char-name">{&c.name}</h3>
                            <p class="char-role">{&c.role}</p>
                            <p class="char-appearance">{&c.appearance}</p>
                            if !c.personality.is_empty() {
                                <p class="char-personality">{&c.personality}</p>
                            }
                        </div>
                    </div>
                })}
            </div>
        </section>
    }
}
