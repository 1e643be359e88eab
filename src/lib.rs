//! AlgoForge is a terminal chat assistant for hosted text-generation models.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation log, model registry and selection, prompt
//!   templating, and the turn-taking controller.
//! - [`api`] defines the generation request payloads and the gateway that
//!   talks to the Hugging Face inference API.
//! - [`ui`] defines the display surface contract and runs the interactive
//!   line-based chat loop.
//! - [`commands`] implements slash-command parsing used by the chat loop.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod commands;
pub mod core;
pub mod logging;
pub mod ui;
pub mod utils;
