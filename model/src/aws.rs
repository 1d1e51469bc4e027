use aws_config::default_provider::credentials::default_provider;
use aws_config::retry::RetryConfig;
use aws_config::sts::AssumeRoleProvider;
use aws_credential_types::provider::SharedCredentialsProvider;
use aws_sdk_emr::Region;
use aws_smithy_types::retry::RetryMode;
use aws_types::SdkConfig;
use log::info;

const SESSION_NAME: &str = "emrctl";

/// Set up the config for AWS calls, using `sts::assume_role` if a role arn is provided. When
/// `region` is `None` the default provider chain resolves the region from the environment.
pub async fn emr_sdk_config(region: &Option<String>, assume_role: &Option<String>) -> SdkConfig {
    let mut config_loader = aws_config::from_env().retry_config(
        RetryConfig::standard()
            .with_retry_mode(RetryMode::Adaptive)
            .with_max_attempts(15),
    );

    if let Some(region) = region {
        info!("Using region '{}' for the AWS config.", region);
        config_loader = config_loader.region(Region::new(region.clone()));
    }

    let base_provider = SharedCredentialsProvider::new(default_provider().await);
    config_loader = match assume_role {
        Some(role_arn) => {
            info!("Assuming role '{}' for AWS calls.", role_arn);
            let mut builder = AssumeRoleProvider::builder(role_arn).session_name(SESSION_NAME);
            if let Some(region) = region {
                builder = builder.region(Region::new(region.clone()));
            }
            config_loader
                .credentials_provider(SharedCredentialsProvider::new(builder.build(base_provider)))
        }
        None => config_loader.credentials_provider(base_provider),
    };

    config_loader.load().await
}
