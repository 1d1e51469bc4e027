use aws_sdk_emr::model::{
    Application, Cluster, ClusterStateChangeReason, ClusterStatus, ClusterTimeline, Configuration,
    Ec2InstanceAttributes, KerberosAttributes, PlacementGroupConfig, Tag,
};
use aws_smithy_types::date_time::Format;
use aws_smithy_types::DateTime;
use serde::Serialize;
use std::collections::HashMap;

/// The snake-case projection of a cluster's detail record, shaped for JSON output. Lifecycle
/// enums keep their provider spelling (`WAITING`, `INSTANCE_GROUP`), timestamps are formatted as
/// RFC 3339 strings, and fields the provider did not populate are left out of the document.
#[derive(Debug, Serialize)]
pub struct ClusterReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<StatusReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_instance_attributes: Option<Ec2InstanceAttributesReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_collection_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_terminate: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_protected: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible_to_all_users: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applications: Option<Vec<ApplicationReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_instance_hours: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_public_dns_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Vec<ConfigurationReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub security_configuration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_scaling_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_down_behavior: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_ami_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ebs_root_volume_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_upgrade_on_boot: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kerberos_attributes: Option<KerberosAttributesReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster_arn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step_concurrency_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_groups: Option<Vec<PlacementGroupReport>>,
}

impl From<&Cluster> for ClusterReport {
    fn from(cluster: &Cluster) -> Self {
        Self {
            id: cluster.id().map(String::from),
            name: cluster.name().map(String::from),
            status: cluster.status().map(StatusReport::from),
            ec2_instance_attributes: cluster
                .ec2_instance_attributes()
                .map(Ec2InstanceAttributesReport::from),
            instance_collection_type: cluster
                .instance_collection_type()
                .map(|value| value.as_str().to_string()),
            log_uri: cluster.log_uri().map(String::from),
            release_label: cluster.release_label().map(String::from),
            auto_terminate: Some(cluster.auto_terminate()),
            termination_protected: Some(cluster.termination_protected()),
            visible_to_all_users: Some(cluster.visible_to_all_users()),
            applications: cluster
                .applications()
                .map(|values| values.iter().map(ApplicationReport::from).collect()),
            tags: cluster
                .tags()
                .map(|values| values.iter().map(TagReport::from).collect()),
            service_role: cluster.service_role().map(String::from),
            normalized_instance_hours: cluster.normalized_instance_hours(),
            master_public_dns_name: cluster.master_public_dns_name().map(String::from),
            configurations: cluster
                .configurations()
                .map(|values| values.iter().map(ConfigurationReport::from).collect()),
            security_configuration: cluster.security_configuration().map(String::from),
            auto_scaling_role: cluster.auto_scaling_role().map(String::from),
            scale_down_behavior: cluster
                .scale_down_behavior()
                .map(|value| value.as_str().to_string()),
            custom_ami_id: cluster.custom_ami_id().map(String::from),
            ebs_root_volume_size: cluster.ebs_root_volume_size(),
            repo_upgrade_on_boot: cluster
                .repo_upgrade_on_boot()
                .map(|value| value.as_str().to_string()),
            kerberos_attributes: cluster
                .kerberos_attributes()
                .map(KerberosAttributesReport::from),
            cluster_arn: cluster.cluster_arn().map(String::from),
            step_concurrency_level: cluster.step_concurrency_level(),
            placement_groups: cluster
                .placement_groups()
                .map(|values| values.iter().map(PlacementGroupReport::from).collect()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatusReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_change_reason: Option<StateChangeReasonReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeline: Option<TimelineReport>,
}

impl From<&ClusterStatus> for StatusReport {
    fn from(status: &ClusterStatus) -> Self {
        Self {
            state: status.state().map(|state| state.as_str().to_string()),
            state_change_reason: status
                .state_change_reason()
                .map(StateChangeReasonReport::from),
            timeline: status.timeline().map(TimelineReport::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StateChangeReasonReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl From<&ClusterStateChangeReason> for StateChangeReasonReport {
    fn from(reason: &ClusterStateChangeReason) -> Self {
        Self {
            code: reason.code().map(|code| code.as_str().to_string()),
            message: reason.message().map(String::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TimelineReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creation_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready_date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<String>,
}

impl From<&ClusterTimeline> for TimelineReport {
    fn from(timeline: &ClusterTimeline) -> Self {
        Self {
            creation_date_time: format_time(timeline.creation_date_time()),
            ready_date_time: format_time(timeline.ready_date_time()),
            end_date_time: format_time(timeline.end_date_time()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Ec2InstanceAttributesReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_key_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_subnet_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_ec2_subnet_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ec2_availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requested_ec2_availability_zones: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub iam_instance_profile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emr_managed_master_security_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emr_managed_slave_security_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_access_security_group: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_master_security_groups: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_slave_security_groups: Option<Vec<String>>,
}

impl From<&Ec2InstanceAttributes> for Ec2InstanceAttributesReport {
    fn from(attributes: &Ec2InstanceAttributes) -> Self {
        Self {
            ec2_key_name: attributes.ec2_key_name().map(String::from),
            ec2_subnet_id: attributes.ec2_subnet_id().map(String::from),
            requested_ec2_subnet_ids: attributes
                .requested_ec2_subnet_ids()
                .map(|values| values.to_vec()),
            ec2_availability_zone: attributes.ec2_availability_zone().map(String::from),
            requested_ec2_availability_zones: attributes
                .requested_ec2_availability_zones()
                .map(|values| values.to_vec()),
            iam_instance_profile: attributes.iam_instance_profile().map(String::from),
            emr_managed_master_security_group: attributes
                .emr_managed_master_security_group()
                .map(String::from),
            emr_managed_slave_security_group: attributes
                .emr_managed_slave_security_group()
                .map(String::from),
            service_access_security_group: attributes
                .service_access_security_group()
                .map(String::from),
            additional_master_security_groups: attributes
                .additional_master_security_groups()
                .map(|values| values.to_vec()),
            additional_slave_security_groups: attributes
                .additional_slave_security_groups()
                .map(|values| values.to_vec()),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApplicationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<HashMap<String, String>>,
}

impl From<&Application> for ApplicationReport {
    fn from(application: &Application) -> Self {
        Self {
            name: application.name().map(String::from),
            version: application.version().map(String::from),
            args: application.args().map(|values| values.to_vec()),
            additional_info: application.additional_info().cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TagReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl From<&Tag> for TagReport {
    fn from(tag: &Tag) -> Self {
        Self {
            key: tag.key().map(String::from),
            value: tag.value().map(String::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ConfigurationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub classification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub configurations: Option<Vec<ConfigurationReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, String>>,
}

impl From<&Configuration> for ConfigurationReport {
    fn from(configuration: &Configuration) -> Self {
        Self {
            classification: configuration.classification().map(String::from),
            configurations: configuration
                .configurations()
                .map(|values| values.iter().map(ConfigurationReport::from).collect()),
            properties: configuration.properties().cloned(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct KerberosAttributesReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub realm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kdc_admin_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cross_realm_trust_principal_password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_domain_join_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ad_domain_join_password: Option<String>,
}

impl From<&KerberosAttributes> for KerberosAttributesReport {
    fn from(attributes: &KerberosAttributes) -> Self {
        Self {
            realm: attributes.realm().map(String::from),
            kdc_admin_password: attributes.kdc_admin_password().map(String::from),
            cross_realm_trust_principal_password: attributes
                .cross_realm_trust_principal_password()
                .map(String::from),
            ad_domain_join_user: attributes.ad_domain_join_user().map(String::from),
            ad_domain_join_password: attributes.ad_domain_join_password().map(String::from),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlacementGroupReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement_strategy: Option<String>,
}

impl From<&PlacementGroupConfig> for PlacementGroupReport {
    fn from(group: &PlacementGroupConfig) -> Self {
        Self {
            instance_role: group.instance_role().map(|value| value.as_str().to_string()),
            placement_strategy: group
                .placement_strategy()
                .map(|value| value.as_str().to_string()),
        }
    }
}

fn format_time(time: Option<&DateTime>) -> Option<String> {
    time.and_then(|time| time.fmt(Format::DateTime).ok())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod test {
    use super::*;
    use aws_sdk_emr::model::{ClusterState, ClusterStateChangeReasonCode, InstanceCollectionType};
    use serde_json::json;

    fn sample_cluster() -> Cluster {
        Cluster::builder()
            .id("j-3H1A2B3C4D5E")
            .name("analytics-prod")
            .status(
                ClusterStatus::builder()
                    .state(ClusterState::Waiting)
                    .state_change_reason(
                        ClusterStateChangeReason::builder()
                            .code(ClusterStateChangeReasonCode::UserRequest)
                            .message("Steps completed")
                            .build(),
                    )
                    .timeline(
                        ClusterTimeline::builder()
                            .creation_date_time(DateTime::from_secs(1672531200))
                            .build(),
                    )
                    .build(),
            )
            .ec2_instance_attributes(
                Ec2InstanceAttributes::builder()
                    .ec2_subnet_id("subnet-0aa11bb2")
                    .emr_managed_master_security_group("sg-0aa11bb2")
                    .build(),
            )
            .instance_collection_type(InstanceCollectionType::InstanceGroup)
            .release_label("emr-5.28.0")
            .auto_terminate(false)
            .termination_protected(true)
            .visible_to_all_users(true)
            .applications(Application::builder().name("Spark").version("2.4.4").build())
            .tags(Tag::builder().key("team").value("data").build())
            .service_role("EMR_DefaultRole")
            .normalized_instance_hours(72)
            .build()
    }

    #[test]
    fn report_uses_snake_case_keys() {
        let value = serde_json::to_value(ClusterReport::from(&sample_cluster())).unwrap();
        assert_eq!(value["id"], json!("j-3H1A2B3C4D5E"));
        assert_eq!(value["name"], json!("analytics-prod"));
        assert_eq!(value["status"]["state"], json!("WAITING"));
        assert_eq!(
            value["status"]["state_change_reason"]["code"],
            json!("USER_REQUEST")
        );
        assert_eq!(value["instance_collection_type"], json!("INSTANCE_GROUP"));
        assert_eq!(value["auto_terminate"], json!(false));
        assert_eq!(value["termination_protected"], json!(true));
        assert_eq!(value["normalized_instance_hours"], json!(72));
        assert_eq!(
            value["ec2_instance_attributes"]["ec2_subnet_id"],
            json!("subnet-0aa11bb2")
        );
        assert_eq!(value["applications"][0]["name"], json!("Spark"));
        assert_eq!(value["tags"][0]["key"], json!("team"));
        assert_eq!(value["service_role"], json!("EMR_DefaultRole"));
    }

    #[test]
    fn timestamps_are_rfc3339() {
        let value = serde_json::to_value(ClusterReport::from(&sample_cluster())).unwrap();
        assert_eq!(
            value["status"]["timeline"]["creation_date_time"],
            json!("2023-01-01T00:00:00Z")
        );
        assert!(value["status"]["timeline"]
            .as_object()
            .unwrap()
            .get("end_date_time")
            .is_none());
    }

    #[test]
    fn unset_fields_are_omitted() {
        let value =
            serde_json::to_value(ClusterReport::from(&Cluster::builder().id("j-EMPTY").build()))
                .unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("id"));
    }

    #[test]
    fn nested_configurations_are_projected() {
        let cluster = Cluster::builder()
            .id("j-CONF")
            .configurations(
                Configuration::builder()
                    .classification("yarn-site")
                    .configurations(
                        Configuration::builder()
                            .classification("export")
                            .properties("KEY", "VALUE")
                            .build(),
                    )
                    .build(),
            )
            .build();
        let value = serde_json::to_value(ClusterReport::from(&cluster)).unwrap();
        assert_eq!(value["configurations"][0]["classification"], json!("yarn-site"));
        assert_eq!(
            value["configurations"][0]["configurations"][0]["properties"]["KEY"],
            json!("VALUE")
        );
    }
}
