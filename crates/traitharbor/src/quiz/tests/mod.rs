mod common;
mod loader;
mod report;
