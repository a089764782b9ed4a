pub mod file;
pub mod schedule;
pub mod stdin;
