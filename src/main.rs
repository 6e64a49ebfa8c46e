//! CLI entry point for the maze step viewer

use clap::Parser;
use mazeview::io::cli::{App, Cli};
use mazeview::io::logging;

fn main() -> mazeview::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.quiet);

    let app = App::new(cli);
    let stdout = std::io::stdout();
    app.run(&mut stdout.lock())
}
