// Tests for the aggregator transport

use super::*;

#[test]
fn test_dictionary_transport_is_object_safe() {
    // Verify the trait is object safe (can be used with dyn)
    fn _takes_dyn(_: &dyn DictionaryTransport) {}
}

#[test]
fn test_remote_response_success_range() {
    assert!(RemoteResponse::ok("[]").is_success());
    assert!(RemoteResponse::new(204, "").is_success());
    assert!(!RemoteResponse::new(404, "").is_success());
    assert!(!RemoteResponse::new(500, "boom").is_success());
    assert!(!RemoteResponse::new(302, "").is_success());
}

#[test]
fn test_remote_response_null_and_empty_bodies_are_absent() {
    assert!(!RemoteResponse::ok("").has_body());
    assert!(!RemoteResponse::ok("null").has_body());
    assert!(!RemoteResponse::ok("  null\n").has_body());
    assert!(RemoteResponse::ok("[]").has_body());
    assert!(RemoteResponse::ok(r#"{"word":"","definition":""}"#).has_body());
}

#[tokio::test]
async fn test_reqwest_transport_connection_refused_is_transport_error() {
    // Bind then drop a listener so the port is very likely closed
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let transport = ReqwestTransport::new(Some(Duration::from_secs(2))).unwrap();
    let result = transport.get(&format!("http://{}/getWord/test", addr)).await;

    match result {
        Err(ClientError::Transport(message)) => assert!(message.contains("getWord/test")),
        other => panic!("Expected Transport error, got {:?}", other),
    }
}
