use std::process::ExitCode;

mod context;
mod flags;
mod help;
mod parse;
mod prompts;

pub use context::Context;
pub use flags::CliFlags;
pub use parse::parse;

/// Parse argv and run to completion.
pub fn run(args: &[String]) -> ExitCode {
    match parse(args) {
        Ok(flags) => {
            let mut ctx = Context::new(flags);
            ctx.run()
        }
        Err(e) => {
            prompts::error(&format!("Error: {e}"));
            ExitCode::FAILURE
        }
    }
}
