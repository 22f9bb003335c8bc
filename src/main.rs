//! Standalone city explorer: `cityscape [options.toml]`.

use std::path::Path;

use cityscape::{options::Options, Viewer};

fn main() {
    env_logger::init();

    // Optional first argument: an options preset in TOML.
    let options = std::env::args()
        .nth(1)
        .map(|path| Options::load_or_default(Path::new(&path)))
        .unwrap_or_default();

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
