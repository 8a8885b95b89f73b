pub mod render;
pub mod session;
