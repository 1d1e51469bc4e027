/*!

This is the library crate behind the `emrctl` command line tool. It knows how to find Amazon EMR
clusters by matching a regular expression against their names, reconcile a cluster toward a desired
`present` or `absent` state, terminate clusters (optionally waiting for termination to finish), and
list clusters with server-side and client-side filtering. Cluster details are converted into
[`ClusterReport`], a `snake_case` serializable view of the EMR `Cluster` type, so that callers get
stable JSON output.

The binary that drives these operations lives in the `cli` crate.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]

pub mod aws;
mod error;
pub mod filter;
pub mod find;
pub mod inventory;
pub mod reconcile;
pub mod report;
pub mod spec;
pub mod terminate;

pub use crate::error::{Error, Result};
pub use crate::report::ClusterReport;
pub use aws_sdk_emr::model::{Cluster, ClusterState};
pub use aws_sdk_emr::Client;
