mod persistence;
mod pool;
mod provider;

pub use persistence::{load_targets, save_result_json, save_targets, write_result_csv};
pub use pool::InventoryPool;
pub use provider::{InventoryProvider, JsonFileProvider, StaticProvider};
