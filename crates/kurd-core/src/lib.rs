pub mod converter;
pub mod export;
pub mod history;
pub mod rules;
pub mod settings;
pub mod stats;
pub mod unicode;
