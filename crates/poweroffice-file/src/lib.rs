//! poweroffice-file - Single JSON file session store.

mod store;

pub use store::FileStore;
