use pulldown_cmark::{CowStr, Event, Options, Parser, Tag, html::push_html};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarkdownProps {
    pub content: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders generated text as Markdown. Raw HTML coming from the backend is
/// escaped, and links or images may only point at http(s) or relative URLs.
#[function_component(Markdown)]
pub fn markdown(props: &MarkdownProps) -> Html {
    let rendered = use_memo(props.content.clone(), |content| to_html(content));
    html! {
        <div class={classes!("markdown", props.class.clone())}>
            { Html::from_html_unchecked(AttrValue::from((*rendered).clone())) }
        </div>
    }
}

fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let parser = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    });
    let mut out = String::from("<div>");
    push_html(&mut out, parser);
    out.push_str("</div>");
    out
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    if is_allowed_url(&url) {
        url
    } else {
        CowStr::Borrowed("#")
    }
}

/// http, https, or no scheme at all.
fn is_allowed_url(url: &str) -> bool {
    let url = url.trim();
    let scheme_end = url.find(|c: char| matches!(c, ':' | '/' | '?' | '#'));
    match scheme_end {
        Some(i) if url[i..].starts_with(':') => {
            let scheme = url[..i].to_ascii_lowercase();
            scheme == "http" || scheme == "https"
        }
        _ => true,
    }
}
