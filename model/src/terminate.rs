use crate::error::{self, Result};
use crate::find;
use aws_sdk_emr::model::{Cluster, ClusterState};
use aws_sdk_emr::Client;
use log::{debug, info};
use snafu::{ensure, ResultExt};
use std::time::Duration;

/// How termination waits are paced: a fixed delay between status checks and a cap on the number
/// of checks.
#[derive(Clone, Copy, Debug)]
pub struct WaitParams {
    pub delay: Duration,
    pub max_attempts: u32,
}

impl Default for WaitParams {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(30),
            max_attempts: 60,
        }
    }
}

impl WaitParams {
    pub fn new(delay_secs: u64, max_attempts: u32) -> Self {
        Self {
            delay: Duration::from_secs(delay_secs),
            max_attempts,
        }
    }
}

/// Request termination of a cluster, optionally wait for it to finish, then fetch and return the
/// cluster's detail record.
pub async fn terminate_cluster(
    client: &Client,
    cluster_id: &str,
    wait: Option<WaitParams>,
) -> Result<Cluster> {
    info!("Terminating cluster '{}'", cluster_id);
    client
        .terminate_job_flows()
        .job_flow_ids(cluster_id)
        .send()
        .await
        .context(error::TerminateClusterSnafu { cluster_id })?;
    if let Some(params) = wait {
        wait_for_termination(client, cluster_id, &params).await?;
    }
    find::describe_cluster(client, cluster_id).await
}

enum WaitCheck {
    Terminated,
    Failed,
    Pending,
}

fn check_state(state: Option<&ClusterState>) -> WaitCheck {
    match state {
        Some(ClusterState::Terminated) => WaitCheck::Terminated,
        Some(ClusterState::TerminatedWithErrors) => WaitCheck::Failed,
        _ => WaitCheck::Pending,
    }
}

async fn wait_for_termination(
    client: &Client,
    cluster_id: &str,
    params: &WaitParams,
) -> Result<()> {
    let mut attempts = 0;
    loop {
        attempts += 1;
        let cluster = find::describe_cluster(client, cluster_id).await?;
        match check_state(cluster.status().and_then(|status| status.state())) {
            WaitCheck::Terminated => return Ok(()),
            WaitCheck::Failed => return error::TerminationFailedSnafu { cluster_id }.fail(),
            WaitCheck::Pending => {
                ensure!(
                    attempts < params.max_attempts,
                    error::TerminationTimeoutSnafu {
                        cluster_id,
                        max_attempts: params.max_attempts,
                    }
                );
                debug!(
                    "Cluster '{}' is not terminated yet (check {} of {})",
                    cluster_id, attempts, params.max_attempts
                );
                tokio::time::sleep(params.delay).await;
            }
        }
    }
}
