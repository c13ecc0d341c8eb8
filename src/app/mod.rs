// Interactive driver over the engine: menu loop and input prompts.

pub mod menu;
pub mod prompt;

pub use menu::MenuDriver;
pub use prompt::Prompter;
