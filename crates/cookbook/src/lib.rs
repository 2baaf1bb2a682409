//! Cookbook domain module: recipes and the book that owns them.

pub mod book;
pub mod recipe;

pub use book::Cookbook;
pub use recipe::Recipe;
