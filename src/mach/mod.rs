/*!
## VEE Machine Module

This Rust module is the execution engine for VEE: a register file, the
host call bridge, and a flow-control interpreter over analyzed lines.

*/

mod host;
mod listing;
mod operation;
mod runtime;
mod var;

pub use host::Host;
pub use host::HostTable;
pub use listing::Listing;
pub use listing::MAX_LINE_LEN;
pub use operation::Operation;
pub use runtime::Runtime;
pub use var::Var;
