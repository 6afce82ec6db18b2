//! Binary entry point: start logging, prepare the catalog database in the
//! working directory, then hand the console to the menu loop until the
//! operator exits.
use anyhow::Context;
use shelf_track::logging::init_logging;
use shelf_track::{initialize, run_menu, Config, Console, Store};

fn main() -> anyhow::Result<()> {
    let config = Config::default();
    let _logger = init_logging(&config).context("failed to start logging")?;

    let store = Store::open(&config.db_path);
    initialize(&store).context("failed to initialize the catalog database")?;

    let mut console = Console::stdio();
    run_menu(&store, &mut console)
}
