pub use relay_utils_derive::trace_instrument;

mod macros;

/// Returns the version of the relay backend.
pub fn relay_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
