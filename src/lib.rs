pub mod data;
pub mod tree;
pub mod layout;
pub mod render;
pub mod interact;
pub mod engine;
