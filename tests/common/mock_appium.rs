use mockito::{Mock, ServerGuard};

use mobile_e2e::driver::capabilities::{DriverConfig, Profile};

pub const SESSION_ID: &str = "sess-1";

/// Local Android profile pointed at the mock server.
pub fn driver_config(server: &ServerGuard) -> DriverConfig {
    let mut config = Profile::Android.config_with(|_| None);
    let address = server.host_with_port();
    let (host, port) = address.rsplit_once(':').expect("mock address is host:port");
    config.hostname = host.to_string();
    config.port = port.parse().expect("mock port");
    config
}

/// `POST /session` answering with [`SESSION_ID`].
pub fn mock_new_session(server: &mut ServerGuard) -> Mock {
    server
        .mock("POST", "/session")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"value":{{"sessionId":"{}","capabilities":{{}}}}}}"#,
            SESSION_ID
        ))
        .create()
}

/// A command under the open session answering with `value`.
pub fn mock_command(server: &mut ServerGuard, method: &str, suffix: &str, value: &str) -> Mock {
    server
        .mock(method, format!("/session/{}{}", SESSION_ID, suffix).as_str())
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"value":{}}}"#, value))
        .create()
}

/// `DELETE /session/<id>` failing the way a server does once the session died.
pub fn mock_dead_session_quit(server: &mut ServerGuard) -> Mock {
    server
        .mock("DELETE", format!("/session/{}", SESSION_ID).as_str())
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            r#"{"value":{"error":"invalid session id","message":"session terminated","stacktrace":""}}"#,
        )
        .create()
}
