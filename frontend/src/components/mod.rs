pub mod book_form;
pub mod character_form;
pub mod header;
pub mod markdown;
pub mod results;
pub mod settings_modal;
pub mod toolbar;
