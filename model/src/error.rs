use aws_sdk_emr::error::{DescribeClusterError, ListClustersError, TerminateJobFlowsError};
use aws_sdk_emr::types::SdkError;
use snafu::Snafu;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("Unable to describe cluster '{}': {}", cluster_id, source))]
    DescribeCluster {
        cluster_id: String,
        source: SdkError<DescribeClusterError>,
    },

    #[snafu(display(
        "The desired cluster configuration is missing required fields: {}",
        missing.join(", ")
    ))]
    IncompleteSpec { missing: Vec<String> },

    #[snafu(display(
        "Unable to parse '{}' value '{}' (expected YYYY-MM-DD): {}",
        field,
        date,
        source
    ))]
    InvalidFilterDate {
        field: String,
        date: String,
        source: chrono::ParseError,
    },

    #[snafu(display("Unable to compile name pattern '{}': {}", pattern, source))]
    InvalidNamePattern {
        pattern: String,
        source: regex::Error,
    },

    #[snafu(display("Unable to list clusters: {}", source))]
    ListClusters {
        source: SdkError<ListClustersError>,
    },

    #[snafu(display("Describing cluster '{}' returned no cluster detail", cluster_id))]
    MissingClusterDetail { cluster_id: String },

    #[snafu(display("The matched cluster summary is missing its cluster id"))]
    MissingClusterId,

    #[snafu(display("Unable to terminate cluster '{}': {}", cluster_id, source))]
    TerminateCluster {
        cluster_id: String,
        source: SdkError<TerminateJobFlowsError>,
    },

    #[snafu(display(
        "Cluster '{}' reached 'TERMINATED_WITH_ERRORS' while waiting for termination",
        cluster_id
    ))]
    TerminationFailed { cluster_id: String },

    #[snafu(display(
        "Cluster '{}' did not terminate within {} status checks",
        cluster_id,
        max_attempts
    ))]
    TerminationTimeout { cluster_id: String, max_attempts: u32 },
}
