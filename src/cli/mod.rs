/// CLI layer: argument parsing and user-facing reporting.
pub mod args;
pub mod output;

pub use args::Cli;
pub use output::OutputCtx;
