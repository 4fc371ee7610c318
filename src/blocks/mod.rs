//! Block types built from launch file elements
//!
//! One block kind per recognized element family: `arg`, `param`/`rosparam`,
//! `node`, and `include`. Blocks are built once during the walk, appended to
//! the owning [`LaunchSummary`](crate::summary::LaunchSummary), and never
//! mutated afterwards.

pub mod arg;
pub mod include;
pub mod node;
pub mod param;

pub use arg::{ArgBlock, ArgValue};
pub use include::IncludeBlock;
pub use node::NodeBlock;
pub use param::ParamBlock;

use crate::{
    condition::{condition_expr, Condition},
    error::Result,
};

/// Render the shared `if <expr>:` header line.
///
/// Returns the header (possibly empty) and the indent to apply to the body.
pub(crate) fn condition_header(
    conditions: &[Condition],
    show_conditions: bool,
) -> Result<(String, &'static str)> {
    let expr = condition_expr(conditions)?;
    if show_conditions && !expr.is_empty() {
        Ok((format!("if {expr}:\n"), "  "))
    } else {
        Ok((String::new(), ""))
    }
}
