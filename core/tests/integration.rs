//! Round-trips against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then drives the client over real
//! HTTP through `UreqTransport`. Validates request building, the transport and
//! response parsing end-to-end, and that each call is exactly one request.

use mock_server::RequestLog;
use resource_core::{ApiClient, ApiError, ClientConfig};

/// Start the mock server on its own thread and return its base URL.
fn spawn_mock_server(log: RequestLog) -> String {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run_with_log(listener, log).await
        })
        .unwrap();
    });

    format!("http://{addr}")
}

#[test]
fn retrieve_resource_over_http() {
    let log = RequestLog::default();
    let base_url = spawn_mock_server(log.clone());
    let client = ApiClient::with_config(ClientConfig::new(&base_url));

    let resource = client.endpoints().retrieve_resource(43).unwrap();

    assert_eq!(resource["args"]["id"], "43");
    assert_eq!(resource["url"], format!("{base_url}/get?id=43"));

    let recorded = log.blocking_read();
    assert_eq!(recorded.len(), 1, "expected exactly one request");
    assert_eq!(recorded[0].path, "/get");
    assert_eq!(recorded[0].query, vec![("id".to_string(), "43".to_string())]);
}

#[test]
fn repeated_calls_are_independent() {
    let log = RequestLog::default();
    let base_url = spawn_mock_server(log.clone());
    let client = ApiClient::with_config(ClientConfig::new(&base_url));

    for id in [1, 2, 3] {
        let resource = client.endpoints().retrieve_resource(id).unwrap();
        assert_eq!(resource["args"]["id"], id.to_string());
    }
    assert_eq!(log.blocking_read().len(), 3);
}

#[test]
fn non_json_body_is_a_deserialization_error() {
    let base_url = spawn_mock_server(RequestLog::default());
    // Unknown route: axum answers 404 with an empty body.
    let client = ApiClient::with_config(ClientConfig::new(&format!("{base_url}/missing")));

    let err = client.endpoints().retrieve_resource(43).unwrap_err();
    assert!(matches!(err, ApiError::DeserializationError(_)));
}

#[test]
fn connection_refused_is_a_transport_error() {
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = ApiClient::with_config(ClientConfig::new(&format!("http://{addr}")));

    let err = client.endpoints().retrieve_resource(43).unwrap_err();
    assert!(matches!(err, ApiError::TransportError(_)));
}
