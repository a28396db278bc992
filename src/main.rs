use std::env;

use anyhow::Result;

use movieshelf::config::ConfigBuilder;
use movieshelf::logging;
use movieshelf::tui;

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("Usage: {} [library-root] [start-url]", args[0]);
        println!();
        println!("Shelves movie files from <library-root>/inputs into");
        println!("<library-root>/movies, named after the TMDB page you are browsing.");
        println!("Defaults to the current directory and the TMDB start page.");
        return Ok(());
    }

    logging::init_logging();

    let mut builder = ConfigBuilder::new();
    if let Some(root) = args.get(1) {
        builder = builder.root(root);
    }
    let config = builder.start_url(args.get(2).cloned()).build()?;

    tui::run_tui(config).await
}
