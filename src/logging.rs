//! Logger setup for the command line tool. The library and the `naca-geo` binary share the
//! `naca_geo` crate name, so one directive covers both.

use env_logger::{Builder, Env};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "naca_geo=info";

/// A logger builder reading `RUST_LOG` and falling back to [`DEFAULT_FILTER`].
pub fn builder() -> Builder {
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
}

pub fn init() {
    builder().init();
}
