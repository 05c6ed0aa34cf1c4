pub mod config;
pub mod core;
pub mod estimation;
pub mod history;
pub mod imaging;
pub mod ui;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;
