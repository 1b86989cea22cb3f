// Library root: configuration and report rendering for the courtside binary.

pub mod config;
pub mod report;
