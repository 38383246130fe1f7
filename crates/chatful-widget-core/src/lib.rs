//! Headless core of the CHATful widget loader: configuration model,
//! bootstrap planning, declarative mount styling, the cross-frame init
//! handshake, and the page-lifetime widget state machine. Everything here
//! compiles and tests natively; the wasm shell applies the plans to the DOM.

pub mod api_base;
pub mod bootstrap;
pub mod config;
pub mod handshake;
pub mod mount;
pub mod state;
pub mod style;
