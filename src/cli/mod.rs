//! Command-line interface parsing and handling
//!
//! This module handles parsing command-line arguments and executing the appropriate commands.

pub mod model_list;
pub mod say;

use std::error::Error;

use clap::{Parser, Subcommand};

use crate::cli::model_list::list_models;
use crate::cli::say::run_say;
use crate::ui::chat_loop::run_chat;

#[derive(Parser)]
#[command(name = "algoforge")]
#[command(version)]
#[command(about = "A terminal chat assistant backed by hosted Hugging Face models")]
#[command(
    long_about = "AlgoForge is a terminal chat assistant for algorithm and coding questions. \
Each prompt is sent to a hosted Hugging Face text-generation model and the reply is \
printed once it is complete.\n\n\
Environment Variables:\n\
  HF_TOKEN                Hugging Face access token (required for replies)\n\
  HF_INFERENCE_ENDPOINT   Custom inference API root (optional)\n\
  ALGOFORGE_LOG           Diagnostic log filter, e.g. debug (optional)\n\
HF_TOKEN and HF_INFERENCE_ENDPOINT may also come from a .env file in the working \
directory; variables already set in the environment take precedence.\n\n\
Commands inside the chat:\n\
  /help             Show available commands\n\
  /model [label]    Show or switch the active model\n\
  /models           List available models\n\
  /clear            Start over with an empty conversation\n\
  /quit             Leave the chat"
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Model label to use (see `algoforge models`)
    #[arg(short = 'm', long, global = true, value_name = "MODEL")]
    pub model: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the chat interface (default)
    Chat,
    /// Send a single prompt and print the reply
    Say {
        /// Prompt text; multiple words are joined with spaces
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        prompt: Vec<String>,
    },
    /// List available models
    Models,
}

pub fn main() -> Result<(), Box<dyn Error>> {
    crate::logging::init_tracing();

    tokio::runtime::Runtime::new()?.block_on(async_main())
}

async fn async_main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    match args.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat(args.model).await,
        Commands::Say { prompt } => run_say(prompt, args.model).await,
        Commands::Models => list_models(args.model.as_deref()),
    }
}
