//! Console Adapter
//!
//! ターミナルへの表示

pub mod presenter;

pub use presenter::ConsolePresenter;
