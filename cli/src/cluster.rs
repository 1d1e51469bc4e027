use crate::error::{self, Result};
use emrctl_model::reconcile::{self, Reconciliation};
use emrctl_model::spec::DesiredSpec;
use emrctl_model::terminate::WaitParams;
use emrctl_model::{find, ClusterReport};
use serde::{Deserialize, Serialize};
use snafu::{OptionExt, ResultExt};
use std::path::PathBuf;
use structopt::StructOpt;

/// Drive the cluster matching a name pattern toward the desired state. The outcome is printed to
/// stdout as JSON: whether anything changed, and the cluster's detail when one exists to report.
#[derive(Debug, StructOpt)]
pub(crate) struct Cluster {
    /// A regular expression matched against cluster names, anchored at the start.
    #[structopt(long = "name")]
    name: String,
    /// The desired state of the cluster [present|absent].
    #[structopt(long = "state", default_value = "present")]
    state: TargetState,
    /// Path to a YAML or JSON file with the desired cluster configuration. Required for 'present'.
    #[structopt(long = "spec-file")]
    spec_file: Option<PathBuf>,
    /// Wait for a terminated cluster to finish terminating.
    #[structopt(long = "wait")]
    wait: bool,
    /// Seconds between termination status checks.
    #[structopt(long = "wait-delay", default_value = "30")]
    wait_delay: u64,
    /// How many termination status checks to make before giving up.
    #[structopt(long = "wait-max-attempts", default_value = "60")]
    wait_max_attempts: u32,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
enum TargetState {
    Present,
    Absent,
}

serde_plain::derive_fromstr_from_deserialize!(TargetState);

#[derive(Debug, Serialize)]
struct ClusterOutcome {
    changed: bool,
    cluster: Option<ClusterReport>,
}

impl Cluster {
    pub(crate) async fn run(self, client: emrctl_model::Client) -> Result<()> {
        let pattern = find::compile_name_pattern(&self.name).context(error::ModelSnafu)?;
        let reconciliation = match self.state {
            TargetState::Present => {
                let spec = self.load_spec()?;
                reconcile::ensure_present(&client, &pattern, &spec)
                    .await
                    .context(error::ModelSnafu)?
            }
            TargetState::Absent => {
                let wait = self
                    .wait
                    .then(|| WaitParams::new(self.wait_delay, self.wait_max_attempts));
                reconcile::ensure_absent(&client, &pattern, wait)
                    .await
                    .context(error::ModelSnafu)?
            }
        };
        print_outcome(&reconciliation)
    }

    fn load_spec(&self) -> Result<DesiredSpec> {
        let path = self
            .spec_file
            .as_ref()
            .context(error::MissingSpecFileSnafu)?;
        let contents = std::fs::read_to_string(path).context(error::SpecFileSnafu { path })?;
        serde_yaml::from_str(&contents).context(error::SpecFileParseSnafu { path })
    }
}

fn print_outcome(reconciliation: &Reconciliation) -> Result<()> {
    let outcome = ClusterOutcome {
        changed: reconciliation.changed,
        cluster: reconciliation.cluster.as_ref().map(ClusterReport::from),
    };
    println!(
        "{}",
        serde_json::to_string_pretty(&outcome).context(error::JsonSerializeSnafu)?
    );
    Ok(())
}
