use deskbook::{
    cli::{io, menus::money_menu},
    clock::SystemClock,
    config::ConfigManager,
    domain::TRANSACTION_CAPACITY,
    errors::StoreError,
    storage::{BinStorage, MONEY_FILE},
};

fn main() {
    deskbook::init();

    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), StoreError> {
    let storage = BinStorage::new_default()?;
    let config = ConfigManager::new(storage.base_dir())?.load_or_init()?;
    // A corrupt data file aborts here rather than being silently clobbered
    // by the next save.
    let mut store = storage.load(MONEY_FILE, TRANSACTION_CAPACITY)?;
    let mut console = io::stdin_console();

    money_menu::run(&mut store, &storage, &mut console, &SystemClock, &config)
}
