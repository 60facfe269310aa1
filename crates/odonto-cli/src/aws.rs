use serde::{Deserialize, Serialize};

use crate::config::CredentialSource;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallerIdentity {
    pub account_id: String,
    pub arn: String,
    pub user_id: String,
}

/// Build an `SdkConfig` from a region and credential source.
pub async fn build_aws_config(region: &str, creds: &CredentialSource) -> aws_config::SdkConfig {
    let mut builder = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(region.to_string()));

    match creds {
        CredentialSource::Inline {
            access_key_id,
            secret_access_key,
            session_token,
        } => {
            builder = builder.credentials_provider(aws_sdk_sts::config::Credentials::new(
                access_key_id,
                secret_access_key,
                session_token.clone(),
                None,
                "odonto-config",
            ));
        }
        CredentialSource::Profile { profile_name } => {
            builder = builder.profile_name(profile_name);
        }
        CredentialSource::DefaultChain => {}
    }

    builder.load().await
}

/// Call STS GetCallerIdentity to validate credentials. The returned
/// `user_id` is the examiner identity stamped on submitted records.
pub async fn validate_credentials(config: &aws_config::SdkConfig) -> eyre::Result<CallerIdentity> {
    let sts = aws_sdk_sts::Client::new(config);
    let resp = sts
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| eyre::eyre!("STS GetCallerIdentity failed: {e}"))?;

    Ok(CallerIdentity {
        account_id: resp.account().unwrap_or_default().to_string(),
        arn: resp.arn().unwrap_or_default().to_string(),
        user_id: resp.user_id().unwrap_or_default().to_string(),
    })
}
