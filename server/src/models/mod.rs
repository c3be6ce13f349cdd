pub mod gallery;
pub mod song;
