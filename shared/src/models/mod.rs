pub mod book;
pub mod character;
pub mod settings;

pub use book::*;
pub use character::*;
pub use settings::*;
