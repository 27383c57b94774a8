use anyhow::{Context, anyhow};
use landkode_probe::configuration::get_configuration;
use landkode_probe::identity::FixtureIdentities;
use landkode_probe::probe::EndpointProbe;
use landkode_probe::scenario::check_country_codes;
use landkode_probe::telemetry::{get_subscriber, init_subscriber};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("landkode_probe".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let configuration = get_configuration().context("Failed to read configuration.")?;
    let identities = FixtureIdentities::from_settings(&configuration.identities)
        .map_err(|e| anyhow!(e))
        .context("Invalid caseworker fixtures.")?;
    let probe = EndpointProbe::new(configuration.target.base_url());

    let list = check_country_codes(
        &identities,
        &probe,
        &configuration.probe.caseworker,
        configuration.probe.expected_count,
    )
    .await?;

    tracing::info!(
        count = list.len(),
        caseworker = %configuration.probe.caseworker,
        "Country-code list checked"
    );
    Ok(())
}
