use httpmock::prelude::*;
use nfdqr::{NfdResolver, Resolution, ResolverOptions};

fn resolver_for(server: &MockServer) -> NfdResolver {
    let options = ResolverOptions {
        base_url: server.url("/nfd/"),
        timeout_secs: None,
    };
    NfdResolver::new(&options).expect("build resolver")
}

#[tokio::test]
async fn test_unknown_name_returns_not_found_sentinel() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/nfd/unknown.algo")
            .header("accept", "application/json");
        then.status(404)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"message": "nfd not found"}));
    });

    let resolution = resolver_for(&server).resolve("unknown.algo").await;

    mock.assert();
    assert_eq!(resolution, Resolution::NotFound);
    assert_eq!(resolution.descriptor().as_deref(), Some("HTTP 404"));
    assert_eq!(resolution.deposit_account(), None);
}

#[tokio::test]
async fn test_record_fields_pass_through_unaltered() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/nfd/eyemdigital.myalgocard.algo");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "depositAccount": "ABC123DEF456GHI789",
                "nfdAccount": "eyemdigital.myalgocard.algo",
                "state": "owned"
            }));
    });

    let resolution = resolver_for(&server)
        .resolve("eyemdigital.myalgocard.algo")
        .await;

    mock.assert();
    match resolution {
        Resolution::Found(record) => {
            assert_eq!(record.deposit_account.as_deref(), Some("ABC123DEF456GHI789"));
            assert_eq!(
                record.nfd_account.as_deref(),
                Some("eyemdigital.myalgocard.algo")
            );
        }
        other => panic!("expected Found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_absent_accounts_are_valid_not_errors() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nfd/reserved.algo");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"state": "reserved"}));
    });

    let resolution = resolver_for(&server).resolve("reserved.algo").await;

    match resolution {
        Resolution::Found(record) => {
            assert_eq!(record.deposit_account, None);
            assert_eq!(record.nfd_account, None);
        }
        other => panic!("expected Found with empty record, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_remote_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nfd/broken.algo");
        then.status(500).body("internal error");
    });

    let resolution = resolver_for(&server).resolve("broken.algo").await;

    let descriptor = resolution.descriptor().expect("500 must carry a descriptor");
    assert!(matches!(resolution, Resolution::RemoteError(_)));
    assert!(descriptor.starts_with("HTTP error occurred: "));
    assert!(descriptor.contains("500"));
}

#[tokio::test]
async fn test_malformed_body_is_transport_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/nfd/garbled.algo");
        then.status(200)
            .header("Content-Type", "application/json")
            .body("this is not json");
    });

    let resolution = resolver_for(&server).resolve("garbled.algo").await;

    assert!(matches!(resolution, Resolution::TransportError(_)));
    assert!(
        resolution
            .descriptor()
            .unwrap()
            .starts_with("Other error occurred: ")
    );
}

#[tokio::test]
async fn test_unreachable_service_is_transport_error() {
    // Nothing listens on the discard port
    let options = ResolverOptions {
        base_url: "http://127.0.0.1:9/nfd/".to_string(),
        timeout_secs: Some(2),
    };
    let resolver = NfdResolver::new(&options).expect("build resolver");

    let resolution = resolver.resolve("any.algo").await;

    assert!(matches!(resolution, Resolution::TransportError(_)));
}
