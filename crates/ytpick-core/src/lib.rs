pub mod config;
pub mod logging;

pub mod catalog;
pub mod link;
pub mod rename;
pub mod report;
pub mod sanitize;
pub mod selection;
pub mod tools;
pub mod ytdlp;
