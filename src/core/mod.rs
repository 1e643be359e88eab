pub mod controller;
pub mod conversation;
pub mod credential;
pub mod message;
pub mod prompt;
pub mod registry;
pub mod session;
pub mod setup;
