use secrecy::Secret;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(serde::Deserialize, Clone, Debug)]
pub struct Settings {
    pub target: TargetSettings,
    pub identities: IdentitySettings,
    pub probe: ProbeSettings,
}

/// Where the system under test listens.
/// `base_port` is assigned at runtime by the test bootstrap.
#[derive(serde::Deserialize, Clone, Debug)]
pub struct TargetSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub base_port: u16,
}

impl TargetSettings {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.base_port)
    }
}

#[derive(serde::Deserialize, Clone, Debug, Default)]
pub struct IdentitySettings {
    #[serde(default)]
    pub caseworkers: Vec<CaseworkerFixture>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct CaseworkerFixture {
    pub name: String,
    // Without a pre-provisioned token a fresh one is minted per resolution
    #[serde(default)]
    pub token: Option<Secret<String>>,
}

#[derive(serde::Deserialize, Clone, Debug)]
pub struct ProbeSettings {
    pub caseworker: String,
    #[serde(default)]
    pub expected_count: Option<usize>,
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir().expect("Failed to determine the current directory");
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if unspecified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .expect("Failed to parse APP_ENVIRONMENT.");
    let environment_filename = format!("{}.yaml", environment.as_str());

    let settings = config::Config::builder()
        .add_source(config::File::from(configuration_directory.join("base.yaml")))
        .add_source(config::File::from(
            configuration_directory.join(environment_filename),
        ))
        // Add in settings from environment variables (with a prefix of APP and '__' as separator)
        // E.g. `APP_TARGET__BASE_PORT=5001 would set `Settings.target.base_port`
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

/// The possible runtime environment for the probe.
#[derive(Debug, PartialEq)]
pub enum Environment {
    Local,
    Ci,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Ci => "ci",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Self::Local),
            "ci" => Ok(Self::Ci),
            other => Err(format!(
                "{} is not a supported environment. Use either `local` or `ci`.",
                other
            )),
        }
    }
}
