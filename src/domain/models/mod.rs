pub mod credential;
pub mod strength;
