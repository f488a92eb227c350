use anyhow::Result;

use snapbin::{app, cli};

fn main() -> Result<()> {
    let args = cli::parse();
    app::run(args)
}
