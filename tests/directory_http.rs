// SPDX-License-Identifier: MPL-2.0
//! IBGE adapter against a local HTTP server serving canned responses.

use ecoleta::application::port::{DirectoryError, DirectoryService};
use ecoleta::config::DirectoryConfig;
use ecoleta::domain::location::{Locality, PointsQuery, Region};
use ecoleta::infrastructure::IbgeDirectory;
use ecoleta::ui::location_selector::{Outcome, Selector};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const STATES: &str = r#"[
    {"id": 35, "sigla": "SP", "nome": "São Paulo"},
    {"id": 33, "sigla": "RJ", "nome": "Rio de Janeiro"}
]"#;

const SP_CITIES: &str = r#"[{"id": 3509502, "nome": "Campinas"}, {"id": 3548500, "nome": "Santos"}]"#;

/// Canned reply: status line and body.
struct Reply {
    status: &'static str,
    body: &'static str,
}

impl Reply {
    fn ok(body: &'static str) -> Self {
        Self {
            status: "200 OK",
            body,
        }
    }
}

/// Serves `replies` one connection each, in order, and returns the request
/// targets it saw.
async fn serve(replies: Vec<Reply>) -> (String, JoinHandle<Vec<String>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");

    let handle = tokio::spawn(async move {
        let mut targets = Vec::new();
        for reply in replies {
            let (mut socket, _) = listener.accept().await.expect("accept");

            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.expect("read");
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let request = String::from_utf8_lossy(&request);
            let target = request
                .lines()
                .next()
                .and_then(|line| line.split_whitespace().nth(1))
                .unwrap_or_default()
                .to_string();
            targets.push(target);

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                reply.status,
                reply.body.len(),
                reply.body
            );
            socket
                .write_all(response.as_bytes())
                .await
                .expect("write");
            socket.shutdown().await.ok();
        }
        targets
    });

    (format!("http://{addr}/api/v1/localidades"), handle)
}

fn directory(base_url: &str) -> IbgeDirectory {
    IbgeDirectory::new(base_url, &DirectoryConfig::default()).expect("valid base url")
}

#[tokio::test]
async fn regions_are_fetched_ordered_by_name() {
    let (base_url, server) = serve(vec![Reply::ok(STATES)]).await;

    let regions = directory(&base_url).regions().await.expect("regions");

    assert_eq!(regions, vec![Region::new("SP"), Region::new("RJ")]);
    let targets = server.await.expect("server");
    assert_eq!(targets, vec!["/api/v1/localidades/estados?orderBy=nome"]);
}

#[tokio::test]
async fn localities_use_the_region_code_in_the_path() {
    let (base_url, server) = serve(vec![Reply::ok(SP_CITIES)]).await;

    let localities = directory(&base_url)
        .localities(&Region::new("SP"))
        .await
        .expect("localities");

    assert_eq!(
        localities,
        vec![Locality::new("Campinas"), Locality::new("Santos")]
    );
    let targets = server.await.expect("server");
    assert_eq!(targets, vec!["/api/v1/localidades/estados/SP/municipios"]);
}

#[tokio::test]
async fn error_status_is_reported() {
    let (base_url, server) = serve(vec![Reply {
        status: "503 Service Unavailable",
        body: "{}",
    }])
    .await;

    let err = directory(&base_url).regions().await.expect_err("503");

    assert_eq!(err, DirectoryError::Status(503));
    server.await.expect("server");
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let (base_url, server) = serve(vec![Reply::ok("<html>oops</html>")]).await;

    let err = directory(&base_url)
        .localities(&Region::new("SP"))
        .await
        .expect_err("not json");

    assert!(matches!(err, DirectoryError::Decode(_)));
    server.await.expect("server");
}

#[tokio::test]
async fn unreachable_service_is_a_request_error() {
    // Bind then drop so the port is very likely closed
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);

    let err = directory(&format!("http://{addr}/"))
        .regions()
        .await
        .expect_err("connection refused");

    assert!(matches!(err, DirectoryError::Request(_)));
}

#[tokio::test]
async fn full_selection_flow_against_the_service() {
    let (base_url, server) = serve(vec![Reply::ok(STATES), Reply::ok(SP_CITIES)]).await;
    let directory = directory(&base_url);
    let mut selector = Selector::new(false);

    let request = selector.mount().expect("first mount");
    let outcome = selector.regions_loaded(request, directory.regions().await);
    assert_eq!(outcome, Outcome::Applied);
    assert_eq!(
        selector.regions().items(),
        &[Region::new("SP"), Region::new("RJ")]
    );

    let request = selector
        .select_region(Some(Region::new("SP")))
        .expect("locality fetch");
    let result = directory.localities(request.region()).await;
    assert_eq!(selector.localities_loaded(request, result), Outcome::Applied);

    selector.select_locality(Some(Locality::new("Santos")));
    assert_eq!(
        selector.confirm(),
        Some(PointsQuery {
            region: "SP".into(),
            locality: "Santos".into(),
        })
    );

    assert_eq!(server.await.expect("server").len(), 2);
}
