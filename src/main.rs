use aerocode::cli::{Cli, LinePrompter, Shell, TermPrompter};
use aerocode::core::{Config, Repository};
use aerocode::logging::init_logging;
use clap::Parser;
use miette::Result;
use tracing::{debug, warn};

fn main() -> Result<()> {
    // Install miette's fancy error handler for startup failures
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    }))?;

    let cli = Cli::parse();
    let global = cli.global;

    let config = Config::load();
    init_logging(global.verbosity(), config.log.as_deref());
    for warning in &config.warnings {
        warn!("{}", warning);
    }

    // --data-dir (or AEROCODE_DATA_DIR) beats the config files
    let data_dir = global.data_dir.unwrap_or_else(|| config.data_dir());
    let repo = Repository::open(data_dir);

    if TermPrompter::is_available() {
        debug!("using terminal prompts");
        Shell::new(repo, TermPrompter::new()).run()?;
    } else {
        debug!("using line prompts");
        Shell::new(repo, LinePrompter::stdio()).run()?;
    }
    Ok(())
}
