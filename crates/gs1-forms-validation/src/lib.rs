//! GS1 Forms Validation Core
//!
//! Pure field predicates shared by the form validator, the validated types
//! and the WASM client-side bindings. Nothing here allocates UI state or
//! talks to a notifier; every function is a plain check over a `&str`.

pub mod date;
pub mod identifier;
pub mod numeric;

// Re-export all validators
pub use date::*;
pub use identifier::*;
pub use numeric::*;
