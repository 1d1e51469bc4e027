use crate::error::{self, Result};
use crate::filter::ClusterFilters;
use crate::find;
use aws_sdk_emr::model::Cluster;
use aws_sdk_emr::Client;
use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};
use snafu::OptionExt;

/// The ordering of listed clusters by creation time.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl Default for SortOrder {
    fn default() -> Self {
        Self::Descending
    }
}

serde_plain::derive_fromstr_from_deserialize!(SortOrder);
serde_plain::derive_display_from_serialize!(SortOrder);

/// List every cluster allowed by `filters`, keep those whose names match `pattern` (when one is
/// given), describe each match, and order the details by creation time.
pub async fn list_clusters(
    client: &Client,
    filters: &ClusterFilters,
    pattern: Option<&Regex>,
    order: SortOrder,
) -> Result<Vec<Cluster>> {
    let summaries = find::list_summaries(client, filters).await?;
    let summaries = match pattern {
        Some(pattern) => find::match_summaries(summaries, pattern),
        None => summaries,
    };
    debug!("Describing {} matched clusters", summaries.len());
    let mut clusters = Vec::with_capacity(summaries.len());
    for summary in &summaries {
        let cluster_id = summary.id().context(error::MissingClusterIdSnafu)?;
        clusters.push(find::describe_cluster(client, cluster_id).await?);
    }
    sort_clusters(&mut clusters, order);
    Ok(clusters)
}

/// Order clusters by the creation time in their status timeline. Clusters without one sort as
/// oldest.
pub(crate) fn sort_clusters(clusters: &mut [Cluster], order: SortOrder) {
    clusters.sort_by_key(creation_time);
    if order == SortOrder::Descending {
        clusters.reverse();
    }
}

fn creation_time(cluster: &Cluster) -> Option<(i64, u32)> {
    cluster
        .status()
        .and_then(|status| status.timeline())
        .and_then(|timeline| timeline.creation_date_time())
        .map(|time| (time.secs(), time.subsec_nanos()))
}
