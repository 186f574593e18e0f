//! CLI context - bundles parsed flags and clipboard state.

use std::process::ExitCode;

use copypasta::{ClipboardContext, ClipboardProvider};
use zeroize::Zeroize;

use super::{CliFlags, help, prompts};
use crate::pass;

/// Application context for a CLI run.
pub struct Context {
    pub flags: CliFlags,
    clipboard: Option<ClipboardContext>,
}

impl Context {
    pub fn new(flags: CliFlags) -> Self {
        Self {
            flags,
            clipboard: None,
        }
    }

    /// Run the CLI to completion.
    pub fn run(&mut self) -> ExitCode {
        if self.flags.help {
            help::print_help();
            return ExitCode::SUCCESS;
        }
        if self.flags.version {
            println!("passgen {}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }

        let config = self.flags.to_config();
        if let Err(e) = config.validate() {
            prompts::error(&format!("Error: {e}"));
            return ExitCode::FAILURE;
        }

        if self.flags.clipboard {
            match ClipboardContext::new() {
                Ok(c) => self.clipboard = Some(c),
                Err(_) => prompts::clipboard_unavailable(),
            }
        }

        let count = self.flags.number.unwrap_or(1);
        let to_clipboard = self.clipboard.is_some();

        let payload = pass::generate_batch(&config, count, to_clipboard);

        if let (Some(ctx), Some(mut payload)) = (self.clipboard.as_mut(), payload) {
            match ctx.set_contents(payload.clone()) {
                Ok(_) => {
                    if let Ok(mut retrieved) = ctx.get_contents() {
                        retrieved.zeroize();
                    }
                    prompts::clipboard_copied();
                }
                Err(e) => {
                    prompts::clipboard_error(&e.to_string());
                    payload.zeroize();
                    return ExitCode::FAILURE;
                }
            }
            payload.zeroize();
        }

        ExitCode::SUCCESS
    }
}
