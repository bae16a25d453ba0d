/// Command implementations. nbblack has a single operation, so there is no
/// subcommand dispatch: `format` is the whole surface.
pub mod format;
