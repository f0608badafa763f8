//! Blocking wrapper around the Cognito Identity Provider SDK client.
//!
//! The SDK is async; the exporter is a single sequential batch run. Each call
//! is driven to completion on a current-thread runtime owned by the client.

use super::types::{ListUsersResponse, UserType};
use super::UserDirectory;
use crate::utils::config::DEFAULT_HTTP_TIMEOUT;
use crate::utils::error::CognitoError;
use aws_config::timeout::TimeoutConfig;
use aws_config::BehaviorVersion;
use aws_sdk_cognitoidentityprovider::config::Region;
use aws_sdk_cognitoidentityprovider::error::{DisplayErrorContext, ProvideErrorMetadata};
use aws_sdk_cognitoidentityprovider::Client;
use log::{debug, info};
use std::time::Duration;
use tokio::runtime::{Builder, Runtime};

/// Everything needed to reach one regional Cognito endpoint.
///
/// Built once per run and handed to [`CognitoClient::new`]. Credentials are
/// resolved by the SDK's default provider chain, starting from `profile`
/// when one is named.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub region: String,
    pub profile: Option<String>,
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Config for the public regional endpoint and default credentials
    pub fn new(region: impl Into<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
            endpoint: None,
            timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }

    /// Resolve credentials from a named shared-config profile
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Point at a different endpoint (local emulators, VPC endpoints)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }
}

/// Region encoded in a pool id (`<region>_<suffix>`)
pub fn region_from_pool_id(user_pool_id: &str) -> &str {
    user_pool_id.split('_').next().unwrap_or(user_pool_id)
}

/// Cognito client issuing one request at a time
pub struct CognitoClient {
    runtime: Runtime,
    client: Client,
}

impl CognitoClient {
    /// Create a new client
    ///
    /// Loads the shared AWS configuration; credentials themselves are only
    /// fetched on the first request.
    pub fn new(config: ClientConfig) -> Result<Self, CognitoError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(CognitoError::Runtime)?;

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .timeout_config(
                TimeoutConfig::builder()
                    .operation_timeout(config.timeout)
                    .build(),
            );
        if let Some(profile) = &config.profile {
            loader = loader.profile_name(profile.clone());
        }
        if let Some(endpoint) = &config.endpoint {
            loader = loader.endpoint_url(endpoint.clone());
        }

        debug!("Loading AWS config: {:?}", config);
        let sdk_config = runtime.block_on(loader.load());

        Ok(Self {
            client: Client::new(&sdk_config),
            runtime,
        })
    }
}

impl UserDirectory for CognitoClient {
    fn list_users(
        &self,
        user_pool_id: &str,
        pagination_token: Option<&str>,
    ) -> Result<ListUsersResponse, CognitoError> {
        debug!("ListUsers {} (token: {:?})", user_pool_id, pagination_token);

        let output = self
            .runtime
            .block_on(
                self.client
                    .list_users()
                    .user_pool_id(user_pool_id)
                    .set_pagination_token(pagination_token.map(str::to_string))
                    .send(),
            )
            .map_err(|e| map_sdk_error(&e))?;

        Ok(ListUsersResponse {
            users: output.users().iter().map(UserType::from).collect(),
            pagination_token: output.pagination_token().map(str::to_string),
        })
    }

    fn get_csv_header(&self, user_pool_id: &str) -> Result<Vec<String>, CognitoError> {
        info!("Fetching CSV header for user pool: {}", user_pool_id);

        let output = self
            .runtime
            .block_on(self.client.get_csv_header().user_pool_id(user_pool_id).send())
            .map_err(|e| map_sdk_error(&e))?;

        Ok(output.csv_header().to_vec())
    }
}

/// Map an SDK failure to our error type
///
/// Errors the service answered with keep their code; everything else
/// (credentials, connection, timeout) is reported with its full source chain.
fn map_sdk_error<E>(err: &E) -> CognitoError
where
    E: ProvideErrorMetadata + std::error::Error,
{
    match err.code() {
        Some(code) => CognitoError::Service {
            code: code.to_string(),
            message: err.message().unwrap_or_default().to_string(),
        },
        None => CognitoError::RequestFailed(DisplayErrorContext(err).to_string()),
    }
}
