//! # VEE
//!
//! A tiny generative flow-control language: numeric registers `V0`,
//! `V1`, …, prefix operators, indentation blocks, and a host call
//! bridge for everything else.
//!
//! Programs are flat streams of single-token terms, the kind a
//! statistical generator or a live editor emits one keystroke at a
//! time. Anything malformed quietly degrades instead of failing, and a
//! hard step cap keeps every run finite.
//!
//! ```
//! use vee::lang::Line;
//! use vee::mach::{HostTable, Runtime};
//!
//! let program: Vec<Line> = ["while < V0 3", "  ++V0"]
//!     .iter()
//!     .map(|s| Line::from_str(s))
//!     .collect();
//! let mut runtime = Runtime::new(10, Box::new(HostTable::new()));
//! runtime.run(&program);
//! assert_eq!(runtime.var(0), 3.0);
//! ```

pub mod lang;
pub mod mach;
pub mod term;
