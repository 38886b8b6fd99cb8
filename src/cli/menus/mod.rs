pub mod contact_menu;
pub mod money_menu;
pub mod task_menu;

use crate::cli::output;
use crate::domain::Record;
use crate::errors::StoreError;
use crate::storage::BinStorage;
use crate::store::RecordStore;

/// Saves the store on the exit path. A failed save is reported but never
/// fatal; the session still ends with exit code 0.
pub(crate) fn save_on_exit<R: Record>(
    storage: &BinStorage,
    store: &RecordStore<R>,
    file_name: &str,
) {
    match storage.save(store, file_name) {
        Ok(()) => output::success("Data saved. Goodbye!"),
        Err(err) => {
            tracing::error!(error = %err, file_name, "final save failed");
            output::error(format!("Could not save data: {err}"));
            output::warning("Exiting without persisting this session's changes.");
        }
    }
}

/// Reports a recoverable operation failure and returns control to the menu.
pub(crate) fn report(err: StoreError) {
    output::error(err);
}
