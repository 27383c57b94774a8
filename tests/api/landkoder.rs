use crate::helpers::{CASEWORKER, spawn_endpoint, unreachable_base_url};
use claims::{assert_err, assert_ok};
use landkode_probe::error::{DecodeError, ProbeError};
use landkode_probe::identity::{FixtureIdentities, IdentityProvider};
use landkode_probe::probe::{COUNTRY_CODES_PATH, EndpointProbe};
use landkode_probe::scenario::check_country_codes;
use secrecy::{ExposeSecret, Secret};
use wiremock::matchers::{bearer_token, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_caseworker_gets_a_list_of_three_country_codes() {
    // Arrange
    let endpoint = spawn_endpoint().await;
    endpoint.respond_with_body(r#"["NO","SE","DK"]"#).await;

    // Act
    let outcome =
        check_country_codes(&endpoint.identities, &endpoint.probe, CASEWORKER, Some(3)).await;

    // Assert
    let list = assert_ok!(outcome);
    assert_eq!(list.len(), 3);
}

#[tokio::test]
async fn an_empty_list_has_zero_country_codes() {
    let endpoint = spawn_endpoint().await;
    endpoint.respond_with_body("[]").await;

    let outcome =
        check_country_codes(&endpoint.identities, &endpoint.probe, CASEWORKER, Some(0)).await;

    assert_ok!(outcome);
}

#[tokio::test]
async fn a_count_mismatch_reports_actual_and_expected() {
    let endpoint = spawn_endpoint().await;
    endpoint.respond_with_body(r#"["NO"]"#).await;

    let outcome =
        check_country_codes(&endpoint.identities, &endpoint.probe, CASEWORKER, Some(3)).await;

    let err = assert_err!(outcome);
    assert!(matches!(
        err,
        ProbeError::Assertion {
            expected: 3,
            actual: 1
        }
    ));
}

#[tokio::test]
async fn an_unknown_caseworker_never_reaches_the_endpoint() {
    // Arrange
    let endpoint = spawn_endpoint().await;
    Mock::given(path(COUNTRY_CODES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw("[]", "application/json"))
        .expect(0)
        .mount(&endpoint.server)
        .await;

    // Act
    let outcome =
        check_country_codes(&endpoint.identities, &endpoint.probe, "X000000", Some(0)).await;

    // Assert
    let err = assert_err!(outcome);
    assert!(matches!(err, ProbeError::UnknownIdentity(_)));
    assert_eq!(endpoint.received_request_count().await, 0);
}

#[tokio::test]
async fn the_resolved_token_is_sent_as_bearer_credentials() {
    // Arrange
    let endpoint = spawn_endpoint().await;
    let identities = FixtureIdentities::new()
        .with_caseworker(CASEWORKER, Some(Secret::new("scenario-token".into())))
        .unwrap();
    Mock::given(method("GET"))
        .and(path(COUNTRY_CODES_PATH))
        .and(bearer_token("scenario-token"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"["NO"]"#, "application/json"))
        .expect(1)
        .mount(&endpoint.server)
        .await;

    // Act
    let outcome = check_country_codes(&identities, &endpoint.probe, CASEWORKER, Some(1)).await;

    // Assert
    assert_ok!(outcome);
}

#[tokio::test]
async fn each_scenario_signs_in_with_its_own_token() {
    let endpoint = spawn_endpoint().await;
    endpoint.respond_with_body("[]").await;

    let first = endpoint.identities.resolve_identity(CASEWORKER).unwrap();
    let second = endpoint.identities.resolve_identity(CASEWORKER).unwrap();
    assert_ok!(endpoint.probe.fetch_list(&first).await);
    assert_ok!(endpoint.probe.fetch_list(&second).await);

    let requests = endpoint.server.received_requests().await.unwrap();
    let tokens: Vec<_> = requests
        .iter()
        .map(|r| r.headers.get("Authorization").unwrap().to_str().unwrap().to_owned())
        .collect();
    assert_eq!(
        tokens,
        vec![
            format!("Bearer {}", first.expose_secret()),
            format!("Bearer {}", second.expose_secret())
        ]
    );
}

#[tokio::test]
async fn a_rejected_request_reports_the_status() {
    let endpoint = spawn_endpoint().await;
    let test_cases = [401, 403, 404, 503];

    for status in test_cases {
        endpoint.server.reset().await;
        endpoint.respond_with_status(status).await;

        let outcome =
            check_country_codes(&endpoint.identities, &endpoint.probe, CASEWORKER, None).await;

        let err = assert_err!(outcome);
        assert!(
            matches!(err, ProbeError::HttpStatus { status: s, .. } if s.as_u16() == status),
            "The probe did not report status {}.",
            status
        );
    }
}

#[tokio::test]
async fn a_body_that_is_not_a_json_array_fails_to_decode() {
    let endpoint = spawn_endpoint().await;
    let test_cases = [
        (r#"{"landkoder":["NO","SE","DK"]}"#, "a JSON object"),
        ("NO,SE,DK", "plain text"),
        (r#"["NO","SE""#, "a truncated array"),
    ];

    for (body, description) in test_cases {
        endpoint.server.reset().await;
        endpoint.respond_with_body(body).await;

        let outcome =
            check_country_codes(&endpoint.identities, &endpoint.probe, CASEWORKER, None).await;

        let err = assert_err!(outcome);
        assert!(
            matches!(
                err,
                ProbeError::Decode(DecodeError::Malformed(_) | DecodeError::NotAnArray(_))
            ),
            "The probe did not reject {}.",
            description
        );
    }
}

#[tokio::test]
async fn an_unreachable_service_is_a_transport_error() {
    let endpoint = spawn_endpoint().await;
    let probe = EndpointProbe::new(unreachable_base_url());

    let outcome = check_country_codes(&endpoint.identities, &probe, CASEWORKER, None).await;

    let err = assert_err!(outcome);
    assert!(matches!(err, ProbeError::Transport { .. }));
}
