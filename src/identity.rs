use crate::configuration::IdentitySettings;
use crate::domain::CaseworkerName;
use crate::error::ProbeError;
use secrecy::Secret;
use std::collections::HashMap;
use uuid::Uuid;

/// Hands out bearer tokens for named caseworkers.
pub trait IdentityProvider {
    fn resolve_identity(&self, name: &str) -> Result<Secret<String>, ProbeError>;
}

/// Caseworkers provisioned for a test run.
///
/// A fixture either carries a pre-provisioned token or gets a freshly minted
/// one every time it is resolved, so scenarios never share a credential.
#[derive(Debug, Clone, Default)]
pub struct FixtureIdentities {
    caseworkers: HashMap<CaseworkerName, Option<Secret<String>>>,
}

impl FixtureIdentities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_caseworker(
        mut self,
        name: impl Into<String>,
        token: Option<Secret<String>>,
    ) -> Result<Self, String> {
        let name = CaseworkerName::parse(name.into())?;
        self.caseworkers.insert(name, token);
        Ok(self)
    }

    pub fn from_settings(settings: &IdentitySettings) -> Result<Self, String> {
        settings
            .caseworkers
            .iter()
            .try_fold(Self::new(), |identities, fixture| {
                identities.with_caseworker(fixture.name.clone(), fixture.token.clone())
            })
    }

    pub fn is_provisioned(&self, name: &str) -> bool {
        CaseworkerName::parse(name.to_owned())
            .map(|name| self.caseworkers.contains_key(&name))
            .unwrap_or(false)
    }
}

impl IdentityProvider for FixtureIdentities {
    #[tracing::instrument(name = "Resolving caseworker identity", skip(self))]
    fn resolve_identity(&self, name: &str) -> Result<Secret<String>, ProbeError> {
        let unknown = || ProbeError::UnknownIdentity(name.to_owned());
        let caseworker = CaseworkerName::parse(name.to_owned()).map_err(|_| unknown())?;
        match self.caseworkers.get(&caseworker) {
            Some(Some(token)) => Ok(token.clone()),
            Some(None) => {
                tracing::debug!(%caseworker, "Minting a scenario-scoped token");
                Ok(Secret::new(Uuid::new_v4().to_string()))
            }
            None => {
                tracing::error!(%caseworker, "Caseworker is not provisioned");
                Err(unknown())
            }
        }
    }
}
