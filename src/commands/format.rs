/// The format run: expand paths, resolve configuration once, process every
/// notebook in order.
use crate::cli::OutputCtx;
use crate::cli::args::Cli;
use crate::cli::output::{report_changed, report_summary};
use crate::config::resolve_config;
use crate::fmt::BlackFormatter;
use crate::notebook::{Driver, NotebookError, expand_paths};

/// Run the formatter over all paths named by `cli`. Returns the number of
/// notebooks that changed (or, with `--check`, would change).
///
/// # Errors
///
/// Returns `NotebookError` on the first load, write, configuration, or
/// formatter infrastructure failure.
pub fn run(cli: &Cli, ctx: &OutputCtx) -> Result<usize, NotebookError> {
    let _t_expand = ctx.timer("expand_paths");
    let paths = expand_paths(&cli.paths)?;
    drop(_t_expand);

    let _t_config = ctx.timer("resolve_config");
    let config = resolve_config(&paths, &cli.overrides())?;
    drop(_t_config);

    let formatter = BlackFormatter::new();
    let driver = Driver::new(&formatter, config, cli.check);

    let _t_process = ctx.timer("process_notebooks");
    let count = driver.process_many(&paths, |path| report_changed(path, cli.check))?;
    drop(_t_process);

    report_summary(count, cli.check);
    Ok(count)
}
