use crate::error::{self, Result};
use serde::Deserialize;
use serde_json::Value;
use snafu::ensure;

/// The desired configuration for a cluster, read from the file given to `cluster --spec-file`.
/// Sections that are handed to the provider untouched (instance groups, bootstrap actions,
/// applications, kerberos attributes) are kept as opaque JSON values rather than typed out.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DesiredSpec {
    pub log_uri: Option<String>,
    pub additional_info: Option<Value>,
    pub release_label: Option<String>,
    pub instances: Option<InstancesSpec>,
    pub steps: Option<Vec<StepSpec>>,
    pub bootstrap_actions: Option<Vec<Value>>,
    pub supported_products: Option<Vec<String>>,
    pub new_supported_products: Option<Vec<Value>>,
    pub applications: Option<Vec<Value>>,
    #[serde(default = "default_visible_to_all_users")]
    pub visible_to_all_users: bool,
    #[serde(default = "default_job_flow_role")]
    pub job_flow_role: String,
    #[serde(default = "default_service_role")]
    pub service_role: String,
    pub security_configuration: Option<String>,
    #[serde(default = "default_auto_scaling_role")]
    pub auto_scaling_role: String,
    pub scale_down_behavior: Option<ScaleDownBehavior>,
    pub custom_ami_id: Option<String>,
    pub ebs_root_volume_size: Option<i32>,
    pub repo_upgrade_on_boot: Option<RepoUpgradeOnBoot>,
    pub kerberos_attributes: Option<Value>,
}

impl DesiredSpec {
    /// Check that the fields required for establishing presence are supplied.
    pub fn validate_for_present(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.instances.is_none() {
            missing.push("instances".to_string());
        }
        if self.release_label.is_none() {
            missing.push("release_label".to_string());
        }
        ensure!(missing.is_empty(), error::IncompleteSpecSnafu { missing });
        Ok(())
    }
}

impl Default for DesiredSpec {
    fn default() -> Self {
        Self {
            log_uri: None,
            additional_info: None,
            release_label: None,
            instances: None,
            steps: None,
            bootstrap_actions: None,
            supported_products: None,
            new_supported_products: None,
            applications: None,
            visible_to_all_users: default_visible_to_all_users(),
            job_flow_role: default_job_flow_role(),
            service_role: default_service_role(),
            security_configuration: None,
            auto_scaling_role: default_auto_scaling_role(),
            scale_down_behavior: None,
            custom_ami_id: None,
            ebs_root_volume_size: None,
            repo_upgrade_on_boot: None,
            kerberos_attributes: None,
        }
    }
}

/// The EC2 instance layout for a cluster. Either `instance_groups` or `instance_fleets` carries
/// the node topology.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InstancesSpec {
    pub instance_groups: Option<Vec<Value>>,
    pub instance_fleets: Option<Vec<Value>>,
    pub ec2_key_name: Option<String>,
    pub placement: Option<Value>,
    #[serde(default)]
    pub keep_job_flow_alive_when_no_steps: bool,
    #[serde(default)]
    pub termination_protected: bool,
    pub ec2_subnet_id: Option<String>,
    pub ec2_subnet_ids: Option<Vec<String>>,
    pub emr_managed_master_security_group: Option<String>,
    pub emr_managed_slave_security_group: Option<String>,
    pub service_access_security_group: Option<String>,
    pub additional_master_security_groups: Option<Vec<String>>,
    pub additional_slave_security_groups: Option<Vec<String>>,
}

/// A work step to submit along with the cluster.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StepSpec {
    pub name: String,
    #[serde(default)]
    pub action_on_failure: ActionOnFailure,
    pub hadoop_jar_step: Option<Value>,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionOnFailure {
    TerminateJobFlow,
    TerminateCluster,
    CancelAndWait,
    Continue,
}

impl Default for ActionOnFailure {
    fn default() -> Self {
        Self::TerminateCluster
    }
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScaleDownBehavior {
    TerminateAtInstanceHour,
    TerminateAtTaskCompletion,
}

#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RepoUpgradeOnBoot {
    Security,
    None,
}

fn default_visible_to_all_users() -> bool {
    true
}

fn default_job_flow_role() -> String {
    "EMR_EC2_DefaultRole".to_string()
}

fn default_service_role() -> String {
    "EMR_DefaultRole".to_string()
}

fn default_auto_scaling_role() -> String {
    "EMR_AutoScaling_DefaultRole".to_string()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;

    #[test]
    fn defaults_are_applied() {
        let spec: DesiredSpec = serde_yaml::from_str("{}").unwrap();
        assert!(spec.visible_to_all_users);
        assert_eq!(spec.job_flow_role, "EMR_EC2_DefaultRole");
        assert_eq!(spec.service_role, "EMR_DefaultRole");
        assert_eq!(spec.auto_scaling_role, "EMR_AutoScaling_DefaultRole");
        assert!(spec.release_label.is_none());
        assert!(spec.instances.is_none());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: serde_yaml::Result<DesiredSpec> = serde_yaml::from_str("noise: true");
        assert!(result.is_err());
    }

    #[test]
    fn full_document_parses() {
        let spec: DesiredSpec = serde_yaml::from_str(
            r#"
release_label: emr-5.28.0
log_uri: s3://mybucket/logs/
instances:
  ec2_subnet_id: subnet-0aa11bb2
  keep_job_flow_alive_when_no_steps: true
  instance_groups:
    - name: primary
      instance_role: MASTER
      instance_type: m5.xlarge
      instance_count: 1
steps:
  - name: setup-debugging
    hadoop_jar_step:
      jar: command-runner.jar
      args:
        - state-pusher-script
visible_to_all_users: false
scale_down_behavior: TERMINATE_AT_TASK_COMPLETION
repo_upgrade_on_boot: SECURITY
"#,
        )
        .unwrap();
        let instances = spec.instances.unwrap();
        assert!(instances.keep_job_flow_alive_when_no_steps);
        assert!(!instances.termination_protected);
        assert_eq!(instances.ec2_subnet_id.unwrap(), "subnet-0aa11bb2");
        let steps = spec.steps.unwrap();
        assert_eq!(steps[0].name, "setup-debugging");
        assert_eq!(steps[0].action_on_failure, ActionOnFailure::TerminateCluster);
        assert!(!spec.visible_to_all_users);
        assert_eq!(
            spec.scale_down_behavior.unwrap(),
            ScaleDownBehavior::TerminateAtTaskCompletion
        );
        assert_eq!(
            spec.repo_upgrade_on_boot.unwrap(),
            RepoUpgradeOnBoot::Security
        );
    }

    #[test]
    fn step_action_parses_screaming_snake_case() {
        let step: StepSpec =
            serde_yaml::from_str("name: setup\naction_on_failure: CANCEL_AND_WAIT\n").unwrap();
        assert_eq!(step.action_on_failure, ActionOnFailure::CancelAndWait);
    }

    #[test]
    fn presence_requires_instances_and_release_label() {
        let message = DesiredSpec::default()
            .validate_for_present()
            .unwrap_err()
            .to_string();
        assert!(message.contains("instances"));
        assert!(message.contains("release_label"));
    }

    #[test]
    fn complete_spec_passes_presence_validation() {
        let spec: DesiredSpec =
            serde_yaml::from_str("release_label: emr-5.28.0\ninstances:\n  ec2_subnet_id: s-1\n")
                .unwrap();
        assert!(spec.validate_for_present().is_ok());
    }
}
