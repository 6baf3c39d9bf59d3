//! Type classification by category tags.
//!
//! [`Kind::of`] takes any value whose type implements [`Reflect`], walks the
//! type's descriptor and records every category it meets in a [`Tag`]. The
//! resulting [`Kind`] answers questions such as "is this a slice of slices?"
//! or "is the map key a string?" and hands back scalar values of the exact
//! type they were captured with.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use kind::Kind;
//!
//! let kind = Kind::of(vec![vec![1i32]]);
//! assert_eq!(kind.name(), "Vec<Vec<i32>>");
//! assert!(kind.is_slice_of_slices());
//! assert!(kind.is_int32());
//! assert!(!kind.is_slice());
//!
//! let map: HashMap<String, isize> = HashMap::new();
//! let kind = Kind::of(map);
//! assert!(kind.map_key_kind().is_string());
//! assert!(kind.map_value_kind().is_int());
//!
//! assert_eq!(Kind::of(7u8).as_uint8(), Some(7));
//! assert_eq!(Kind::of("text").as_bool(), None);
//! ```
//!
//! # Tracing
//!
//! Classification emits `trace`-level spans and events. Call
//! [`init_tracing`] to print them; it does nothing unless `RUST_LOG` is set.

mod kind;
mod walk;

use std::sync::Once;

pub use kind::Kind;
pub use kind_macros::Reflect;
pub use kind_reflect::{
    Complex128, Complex64, Reflect, Scalar, ScalarKind, Shape, TypeDesc, Uintptr,
};
pub use kind_tag::{normalize_label, Tag, TagError};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call once at startup. Only installs a subscriber when `RUST_LOG` is set;
/// `KIND_LOG_TREE` switches the flat output to an indented span tree.
///
/// ```bash
/// RUST_LOG=kind=trace cargo test -p kind
/// RUST_LOG=kind=trace KIND_LOG_TREE=1 cargo test -p kind
/// ```
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let registry = tracing_subscriber::registry().with(filter);

        if std::env::var_os("KIND_LOG_TREE").is_some() {
            let tree = tracing_tree::HierarchicalLayer::default()
                .with_indent_amount(2)
                .with_indent_lines(true)
                .with_targets(true);
            // A subscriber may already be installed by the host application.
            let _ = registry.with(tree).try_init();
        } else {
            let _ = registry
                .with(fmt::layer().with_target(true).with_level(true))
                .try_init();
        }
    });
}
