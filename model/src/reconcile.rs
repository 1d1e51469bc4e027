use crate::error::{self, Result};
use crate::filter::ClusterFilters;
use crate::find;
use crate::spec::DesiredSpec;
use crate::terminate::{self, WaitParams};
use aws_sdk_emr::model::{Cluster, ClusterState};
use aws_sdk_emr::Client;
use log::{info, warn};
use regex::Regex;
use snafu::OptionExt;

/// The outcome of driving a cluster toward a desired state.
#[derive(Debug)]
pub struct Reconciliation {
    /// Whether the invocation changed anything on the provider side.
    pub changed: bool,
    /// The cluster detail after reconciling, when a cluster exists to report on.
    pub cluster: Option<Cluster>,
}

/// The lifecycle states in which a cluster counts as present.
pub fn active_states() -> Vec<ClusterState> {
    vec![
        ClusterState::Starting,
        ClusterState::Bootstrapping,
        ClusterState::Running,
        ClusterState::Waiting,
    ]
}

/// `true` if the state is one in which a cluster counts as present.
pub fn is_active(state: &ClusterState) -> bool {
    matches!(
        state,
        ClusterState::Starting
            | ClusterState::Bootstrapping
            | ClusterState::Running
            | ClusterState::Waiting
    )
}

fn current_state(cluster: &Cluster) -> Option<&ClusterState> {
    cluster.status().and_then(|status| status.state())
}

/// Make sure a cluster matching `pattern` is up. An active match means there is nothing to do;
/// otherwise the creation path runs. The spec must carry the fields presence requires.
pub async fn ensure_present(
    client: &Client,
    pattern: &Regex,
    spec: &DesiredSpec,
) -> Result<Reconciliation> {
    spec.validate_for_present()?;
    let filters = ClusterFilters::states(active_states());
    if let Some(cluster) = find::find_cluster(client, pattern, &filters).await? {
        info!(
            "Cluster '{}' already matches '{}', nothing to do",
            cluster.id().unwrap_or_default(),
            pattern
        );
        return Ok(Reconciliation {
            changed: false,
            cluster: Some(cluster),
        });
    }
    let cluster = create_cluster(client, spec).await?;
    Ok(Reconciliation {
        changed: true,
        cluster,
    })
}

// TODO: submit a RunJobFlow request built from the spec.
async fn create_cluster(_client: &Client, _spec: &DesiredSpec) -> Result<Option<Cluster>> {
    warn!("Cluster creation is not implemented; no job flow was submitted");
    Ok(None)
}

/// Make sure no active cluster matches `pattern`, terminating the first match if there is one.
pub async fn ensure_absent(
    client: &Client,
    pattern: &Regex,
    wait: Option<WaitParams>,
) -> Result<Reconciliation> {
    let cluster = match find::find_cluster(client, pattern, &ClusterFilters::default()).await? {
        Some(cluster) => cluster,
        None => {
            return Ok(Reconciliation {
                changed: false,
                cluster: None,
            })
        }
    };
    if !current_state(&cluster).map_or(false, is_active) {
        return Ok(Reconciliation {
            changed: false,
            cluster: Some(cluster),
        });
    }
    let cluster_id = cluster.id().context(error::MissingClusterIdSnafu)?;
    let terminated = terminate::terminate_cluster(client, cluster_id, wait).await?;
    Ok(Reconciliation {
        changed: true,
        cluster: Some(terminated),
    })
}
