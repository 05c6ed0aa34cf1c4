mod export;
mod store;

pub use export::HistoryFormat;
pub use store::ResultStore;
