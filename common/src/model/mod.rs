pub mod book;
pub mod font;
