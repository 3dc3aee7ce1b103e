pub mod boxes;
pub mod index;
