use deskbook::{
    cli::{io, menus::contact_menu},
    config::ConfigManager,
    domain::CONTACT_CAPACITY,
    errors::StoreError,
    storage::{BinStorage, CONTACTS_FILE},
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
    let mut store = storage.load(CONTACTS_FILE, CONTACT_CAPACITY)?;
    let mut console = io::stdin_console();

    contact_menu::run(&mut store, &storage, &mut console, &config)
}
