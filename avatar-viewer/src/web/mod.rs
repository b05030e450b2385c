//! Browser integration.
//!
//! Hooks page lifecycle events so the render loop can be torn down with the
//! page. Compiles to a no-op listener on native targets.

/// `pagehide` listener that stops the render loop.
pub mod page_lifecycle;
