use anyhow::{Context, Result};
use clap::Parser;
use zensearch::{Catalog, Config, Session, Theme};
use zensearch_input::{RealTerminal, TerminalIO};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    let catalog = Catalog::load(&config.data_dir).with_context(|| {
        format!(
            "could not load datasets from {}",
            config.data_dir.display()
        )
    })?;

    let terminal = RealTerminal;
    let theme = Theme::for_color(config.use_color(terminal.is_terminal()));
    Session::new(&catalog, terminal, theme)
        .run()
        .context("terminal I/O failed")?;
    Ok(())
}
