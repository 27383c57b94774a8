use reqwest::StatusCode;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by:\n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}

#[derive(thiserror::Error)]
pub enum ProbeError {
    #[error("No fixture identity is provisioned for caseworker `{0}`.")]
    UnknownIdentity(String),
    #[error("Failed to reach {url}.")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with status {status}.")]
    HttpStatus { url: String, status: StatusCode },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("Expected {expected} country codes, got {actual}.")]
    Assertion { expected: usize, actual: usize },
}

impl std::fmt::Debug for ProbeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("The response body is not valid JSON.")]
    Malformed(#[source] serde_json::Error),
    #[error("The response body is a JSON {0}, not an array.")]
    NotAnArray(&'static str),
}
