pub mod exec;
pub mod pattern;
