use gloo_console::error as console_error;

use common::theme::{PreferenceStore, Theme, load_theme, save_theme};

// the theme flag is kept as a bare string rather than json, which keeps it readable by pages
// that predate the wasm bundle

pub struct BrowserStorage(web_sys::Storage);

impl PreferenceStore for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        self.0.get_item(key).map_err(|err| format!("{err:?}"))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.0.set_item(key, value).map_err(|err| format!("{err:?}"))
    }
}

// local storage throws when it is disabled, and that must never stop the page from binding
pub fn local_storage() -> Option<BrowserStorage> {
    let window = web_sys::window()?;

    match window.local_storage() {
        Ok(Some(storage)) => Some(BrowserStorage(storage)),
        Ok(None) => {
            console_error!("Local storage is not available");
            None
        }
        Err(err) => {
            console_error!(format!("Failed to open local storage: {err:?}"));
            None
        }
    }
}

pub fn stored_theme() -> Option<String> {
    load_theme(local_storage().as_ref())
}

pub fn store_theme(theme: Theme) {
    save_theme(local_storage().as_ref(), theme);
}
