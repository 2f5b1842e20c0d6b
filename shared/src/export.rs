use crate::models::Character;
use crate::session::{BookView, CharacterView};
use std::fmt::Write;

/// Renders the current book and cast as a Markdown document.
pub fn book_markdown(book: &BookView, characters: &[CharacterView]) -> String {
    let mut out = String::new();
    let title = if book.title.is_empty() { "Untitled" } else { &book.title };
    let _ = writeln!(out, "# {title}\n");
    if !book.outline.is_empty() {
        let _ = writeln!(out, "{}\n", book.outline.trim_end());
    }
    for chapter in &book.chapters {
        let _ = writeln!(out, "{}\n", chapter.trim_end());
    }
    if !characters.is_empty() {
        let _ = writeln!(out, "## Characters\n");
        for c in characters {
            let name = if c.name.is_empty() { "Unnamed" } else { &c.name };
            let _ = write!(out, "- **{name}**");
            if !c.role.is_empty() {
                let _ = write!(out, " ({})", c.role);
            }
            if !c.appearance.is_empty() {
                let _ = write!(out, ": {}", c.appearance);
            }
            out.push('\n');
        }
    }
    out
}

pub fn characters_json(characters: &[Character]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(characters)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kara() -> CharacterView {
        CharacterView {
            name: "Kara".to_string(),
            role: "Rogue".to_string(),
            appearance: "Tall, silver hair".to_string(),
            personality: String::new(),
        }
    }

    #[test]
    fn markdown_contains_book_and_cast() {
        let book = BookView {
            title: "Dragon Heist".to_string(),
            outline: "A crew robs a dragon.".to_string(),
            chapters: vec!["## One\n\nThe plan.".to_string()],
        };
        let md = book_markdown(&book, &[kara()]);
        assert!(md.starts_with("# Dragon Heist\n\n"));
        assert!(md.contains("A crew robs a dragon.\n\n## One\n\nThe plan.\n"));
        assert!(md.ends_with("## Characters\n\n- **Kara** (Rogue): Tall, silver hair\n"));
    }

    #[test]
    fn markdown_skips_missing_parts() {
        let book = BookView {
            title: String::new(),
            outline: String::new(),
            chapters: Vec::new(),
        };
        assert_eq!(book_markdown(&book, &[]), "# Untitled\n\n");
    }

    #[test]
    fn characters_export_as_json_array() {
        let json = characters_json(&[Character {
            name: Some("Kara".to_string()),
            ..Character::default()
        }])
        .unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, serde_json::json!([{"name": "Kara"}]));
    }
}
