pub mod aggregate;
pub mod badge;
pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod locate;
pub mod model;
pub mod parsers;
pub mod paths;
pub mod run;
pub mod threshold;
