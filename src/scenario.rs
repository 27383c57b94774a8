use crate::domain::CountryCodeList;
use crate::error::ProbeError;
use crate::identity::IdentityProvider;
use crate::probe::{EndpointProbe, assert_count};

/// Sign in as `caseworker`, request the country-code list and, when
/// `expected` is set, check its length.
///
/// The identity is resolved before anything goes over the wire: an unknown
/// caseworker never reaches the endpoint.
#[tracing::instrument(name = "Checking country-code list", skip(identities, probe))]
pub async fn check_country_codes<I>(
    identities: &I,
    probe: &EndpointProbe,
    caseworker: &str,
    expected: Option<usize>,
) -> Result<CountryCodeList, ProbeError>
where
    I: IdentityProvider + ?Sized,
{
    let token = identities.resolve_identity(caseworker)?;
    let list = probe.fetch_list(&token).await?;
    if let Some(expected) = expected {
        assert_count(&list, expected)?;
    }
    Ok(list)
}
