mod builtins;
mod completion;
mod config;
mod history;
mod interpreter;
mod opener;
mod parser;
mod registry;
mod repl;
mod scrollback;
mod session;
mod store;
mod theme;

use anyhow::Context;
use config::Config;
use opener::SystemOpener;
use session::Session;
use store::{JsonFileStore, MemoryStore, Store};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("invalid configuration")?;
    let store: Box<dyn Store> = match &config.state_path {
        Some(path) => {
            let store = JsonFileStore::new(path);
            log::info!("persisting state to {}", store.path().display());
            Box::new(store)
        }
        None => Box::new(MemoryStore::new()),
    };
    let session = Session::restore(&config, store, Box::new(SystemOpener));
    repl::start_repl(session)
}
