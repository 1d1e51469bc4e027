use crate::error::{self, Result};
use crate::filter::ClusterFilters;
use aws_sdk_emr::model::{Cluster, ClusterSummary};
use aws_sdk_emr::Client;
use log::warn;
use regex::Regex;
use snafu::{OptionExt, ResultExt};

/// Compile a cluster name pattern. Matching is anchored at the start of the name, so `web-`
/// matches `web-prod` but not `prod-web-cluster`.
pub fn compile_name_pattern(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).context(error::InvalidNamePatternSnafu { pattern })
}

/// Find the cluster whose name matches `pattern`, restricted by `filters`. When several clusters
/// match, the first one in listing order is described and the rest are ignored.
pub async fn find_cluster(
    client: &Client,
    pattern: &Regex,
    filters: &ClusterFilters,
) -> Result<Option<Cluster>> {
    let matched = match_summaries(list_summaries(client, filters).await?, pattern);
    if matched.len() > 1 {
        warn!(
            "{} clusters match the name pattern '{}', using the first match '{}'",
            matched.len(),
            pattern,
            matched[0].id().unwrap_or_default()
        );
    }
    let summary = match matched.into_iter().next() {
        Some(summary) => summary,
        None => return Ok(None),
    };
    let cluster_id = summary.id().context(error::MissingClusterIdSnafu)?;
    Ok(Some(describe_cluster(client, cluster_id).await?))
}

/// Fetch the full detail record for a cluster.
pub async fn describe_cluster(client: &Client, cluster_id: &str) -> Result<Cluster> {
    let output = client
        .describe_cluster()
        .cluster_id(cluster_id)
        .send()
        .await
        .context(error::DescribeClusterSnafu { cluster_id })?;
    output
        .cluster
        .context(error::MissingClusterDetailSnafu { cluster_id })
}

/// List cluster summaries, following the pagination marker until the service runs out of pages.
pub(crate) async fn list_summaries(
    client: &Client,
    filters: &ClusterFilters,
) -> Result<Vec<ClusterSummary>> {
    let mut summaries = Vec::new();
    let mut marker = None;
    loop {
        let output = client
            .list_clusters()
            .set_cluster_states(if filters.states.is_empty() {
                None
            } else {
                Some(filters.states.clone())
            })
            .set_created_after(filters.created_after.clone())
            .set_created_before(filters.created_before.clone())
            .set_marker(marker)
            .send()
            .await
            .context(error::ListClustersSnafu)?;
        summaries.extend(output.clusters.unwrap_or_default());
        match output.marker {
            Some(next_marker) => marker = Some(next_marker),
            None => break,
        }
    }
    Ok(summaries)
}

/// Keep the summaries whose names match `pattern`, preserving listing order.
pub(crate) fn match_summaries(
    summaries: Vec<ClusterSummary>,
    pattern: &Regex,
) -> Vec<ClusterSummary> {
    summaries
        .into_iter()
        .filter(|summary| matches_at_start(pattern, summary.name().unwrap_or_default()))
        .collect()
}

// Matches the way Python's `re.match` does: the match must begin at the start of the name, but
// need not cover all of it.
pub(crate) fn matches_at_start(pattern: &Regex, name: &str) -> bool {
    pattern.find(name).map_or(false, |found| found.start() == 0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    fn summary(id: &str, name: &str) -> ClusterSummary {
        ClusterSummary::builder().id(id).name(name).build()
    }

    #[test]
    fn match_is_anchored_at_the_start() {
        let pattern = Regex::new("web-").unwrap();
        assert!(matches_at_start(&pattern, "web-prod"));
        assert!(matches_at_start(&pattern, "web-"));
        assert!(!matches_at_start(&pattern, "prod-web-cluster"));
        assert!(!matches_at_start(&pattern, "emr"));
    }

    #[test]
    fn match_does_not_need_to_cover_the_whole_name() {
        let pattern = Regex::new("analytics-[0-9]+").unwrap();
        assert!(matches_at_start(&pattern, "analytics-42-batch"));
        assert!(!matches_at_start(&pattern, "old-analytics-42"));
    }

    #[test]
    fn summaries_keep_listing_order() {
        let summaries = vec![
            summary("j-1", "etl-alpha"),
            summary("j-2", "web"),
            summary("j-3", "etl-beta"),
        ];
        let pattern = Regex::new("etl-").unwrap();
        let matched = match_summaries(summaries, &pattern);
        let ids: Vec<&str> = matched.iter().filter_map(|s| s.id()).collect();
        assert_eq!(ids, vec!["j-1", "j-3"]);
    }

    #[test]
    fn unnamed_summaries_do_not_match() {
        let summaries = vec![ClusterSummary::builder().id("j-1").build()];
        let pattern = Regex::new("etl").unwrap();
        assert!(match_summaries(summaries, &pattern).is_empty());
    }
}
