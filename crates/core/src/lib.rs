// Core domain for the calaverita generator: characters and verse templates

pub mod characters;
pub mod verses;

pub use characters::Character;
pub use verses::{generate, Category, Substitutions};
