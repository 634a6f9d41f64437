use clap::Parser;

use hisabi_surfaces::cli::{self, Cli};
use hisabi_surfaces::logging;

fn main() {
    logging::init_tracing();
    let cli = Cli::parse();

    if let Err(e) = cli::run(cli, &mut std::io::stdout()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
