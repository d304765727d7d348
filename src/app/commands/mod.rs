pub mod post;
pub mod render;
