use anyhow::Context;
use log::error;

use side_scroller::config::Variant;
use side_scroller::{app, logging};

fn main() -> anyhow::Result<()> {
    let variant = Variant::FoxAdventure;
    if let Err(e) = logging::init(variant.config().log_file) {
        eprintln!("warning: {e}; continuing without a log file");
    }

    app::run(variant)
        .map_err(|e| {
            error!("fatal: {e}");
            e
        })
        .context("Fox Adventure could not keep running")
}
