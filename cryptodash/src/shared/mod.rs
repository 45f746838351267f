/// Shared modules for the CryptoDash terminal
pub mod calc;
pub mod client;
pub mod clock;
pub mod error;
pub mod feed;
pub mod format;
pub mod rotator;
pub mod search;
pub mod state;
pub mod types;
pub mod widget;
