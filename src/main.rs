//! Ban selector entry point
//!
//! The web build is driven from JS through `ban_selector::web::start`. Native
//! builds run a small line-oriented console over the same store.

#[cfg(not(target_arch = "wasm32"))]
mod console {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;

    use ban_selector::persistence::{FileStorage, MemoryStorage, PersistenceAdapter, Storage};
    use ban_selector::seed;
    use ban_selector::settings::Settings;
    use ban_selector::store::{PartitionStore, StateView};
    use ban_selector::Item;

    /// Data directory override
    const DATA_DIR_ENV: &str = "BAN_SELECTOR_DATA_DIR";
    const DEFAULT_DATA_DIR: &str = ".ban-selector";

    const HELP: &str = "commands: list | select <item> | ban | add <item> | remove | pick | reset | help | quit";

    fn open_storage() -> Box<dyn Storage> {
        let dir = std::env::var_os(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        match FileStorage::open(&dir) {
            Ok(storage) => {
                log::info!("Using data directory {}", dir.display());
                Box::new(storage)
            }
            Err(e) => {
                log::warn!("{} - state will not survive restart", e);
                Box::new(MemoryStorage::new())
            }
        }
    }

    fn load_seed(settings: &Settings) -> Vec<Item> {
        seed::read_file(&settings.seed_path).unwrap_or_else(|e| {
            log::warn!("{}", e);
            Vec::new()
        })
    }

    fn print_view(out: &mut impl Write, view: StateView<'_>) -> io::Result<()> {
        let join = |items: &[Item]| {
            items
                .iter()
                .map(Item::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        };
        writeln!(out, "available: {}", join(view.available))?;
        writeln!(out, "banned:    {}", join(view.banned))?;
        if let Some(selected) = view.selected {
            writeln!(out, "selected:  {}", selected)?;
        }
        Ok(())
    }

    pub fn run() -> io::Result<()> {
        let storage = open_storage();
        let settings = Settings::load(&storage);
        let mut store = PartitionStore::new(PersistenceAdapter::new(storage), settings.selector());
        store.initialize_with(|| load_seed(&settings));

        let stdin = io::stdin();
        let mut out = io::stdout().lock();
        writeln!(out, "{HELP}")?;
        print_view(&mut out, store.view())?;

        for line in stdin.lock().lines() {
            let line = line?;
            let (command, arg) = match line.trim().split_once(char::is_whitespace) {
                Some((command, arg)) => (command, arg.trim()),
                None => (line.trim(), ""),
            };

            match command {
                "" => continue,
                "list" | "ls" => print_view(&mut out, store.view())?,
                "select" | "sel" => print_view(&mut out, store.select(arg))?,
                "ban" | "unban" => print_view(&mut out, store.toggle_ban())?,
                "add" => print_view(&mut out, store.add_item(arg))?,
                "remove" | "rm" => {
                    let target = store.selected().map(|i| i.as_str().to_string());
                    let view = match target {
                        Some(target) => store.remove_item(&target),
                        None => store.view(),
                    };
                    print_view(&mut out, view)?
                }
                "pick" => match store.pick_random() {
                    Some(item) => writeln!(out, "picked: {}", item)?,
                    None => writeln!(out, "nothing available")?,
                },
                "reset" => {
                    let items = load_seed(&settings);
                    print_view(&mut out, store.reset(items))?
                }
                "help" | "?" => writeln!(out, "{HELP}")?,
                "quit" | "exit" | "q" => break,
                other => writeln!(out, "unknown command {other:?}; {HELP}")?,
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Ban selector (native) starting...");

    if let Err(e) = console::run() {
        log::error!("Console error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is web::start, this is just to satisfy the compiler
}
