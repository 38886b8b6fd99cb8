use deskbook::{
    cli::{io, menus::task_menu},
    domain::TASK_CAPACITY,
    errors::StoreError,
    storage::{BinStorage, TASKS_FILE},
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
    let mut store = storage.load(TASKS_FILE, TASK_CAPACITY)?;
    let mut console = io::stdin_console();

    task_menu::run(&mut store, &storage, &mut console)
}
