//! Compilation control macros shared by the `delve` crates.
//!
//! A crate declares its aliases once, usually in a `cfg` module at the root:
//!
//! ```
//! pub mod cfg {
//!     delve_cfg::define_alias! {
//!         #[cfg(feature = "std")] => std,
//!         #[cfg(debug_assertions)] => debug,
//!     }
//! }
//!
//! // Expands the body only when `debug_assertions` is on.
//! cfg::debug! {
//!     fn only_in_debug() {}
//! }
//!
//! // Used as an expression, the alias reports whether it is enabled.
//! assert_eq!(cfg::debug!(), cfg!(debug_assertions));
//!
//! let level = cfg::debug! {
//!     if { "verbose" } else { "quiet" }
//! };
//! # let _ = level;
//! ```
#![no_std]

/// Defines one alias macro per `#[cfg(..)] => name` pair.
///
/// Each alias is a re-export of either [`enabled`] or [`disabled`], picked by
/// evaluating the predicate in the crate that invokes `define_alias!`.
#[macro_export]
macro_rules! define_alias {
    ($( #[cfg($meta:meta)] => $alias:ident ),* $(,)?) => {
        $(
            #[cfg($meta)]
            #[doc = concat!("Passes its input through: `", stringify!($meta), "` is active.")]
            pub use $crate::enabled as $alias;

            #[cfg(not($meta))]
            #[doc = concat!("Discards its input: `", stringify!($meta), "` is not active.")]
            pub use $crate::disabled as $alias;
        )*
    };
}

/// Alias target for an active configuration.
///
/// - `alias!()` evaluates to `true`.
/// - `alias! { if { a } else { b } }` expands to `a`.
/// - `alias! { items.. }` expands to `items..`.
#[macro_export]
macro_rules! enabled {
    () => { true };
    (if { $($then:tt)* } else { $($else:tt)* }) => { $($then)* };
    ($($tokens:tt)*) => { $($tokens)* };
}

/// Alias target for an inactive configuration.
///
/// - `alias!()` evaluates to `false`.
/// - `alias! { if { a } else { b } }` expands to `b`.
/// - `alias! { items.. }` expands to nothing.
#[macro_export]
macro_rules! disabled {
    () => { false };
    (if { $($then:tt)* } else { $($else:tt)* }) => { $($else)* };
    ($($tokens:tt)*) => {};
}

#[cfg(test)]
mod tests {
    mod cfg {
        crate::define_alias! {
            #[cfg(test)] => on,
            #[cfg(not(test))] => off,
        }
    }

    #[test]
    fn alias_reports_state() {
        assert!(cfg::on!());
        assert!(!cfg::off!());
    }

    #[test]
    fn alias_selects_branch() {
        let picked = cfg::on! { if { 1 } else { 2 } };
        assert_eq!(picked, 1);

        let picked = cfg::off! { if { 1 } else { 2 } };
        assert_eq!(picked, 2);
    }

    cfg::off! {
        compile_error!("an inactive alias must drop its input");
    }
}
