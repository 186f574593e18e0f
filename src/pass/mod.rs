//! Password generation and output.

pub mod charset;
mod generate;
mod output;

pub use generate::generate_batch;
pub use output::SecureBufWriter;
