use std::io::ErrorKind;

use taxi_dash::connection::ApiConfig;
use taxi_dash::domain::query::{ListingQuery, SortKey, SortOrder};
use taxi_dash::error::Error;
use taxi_dash::services::{HttpTripApi, TripApi};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Serve exactly one request; the handle yields the request line
async fn start_single_response_server(
    status: &str,
    body: &'static str,
) -> Option<(String, JoinHandle<String>)> {
    let listener = match TcpListener::bind("127.0.0.1:0").await {
        Ok(listener) => listener,
        Err(err) if err.kind() == ErrorKind::PermissionDenied => return None,
        Err(err) => panic!("failed to bind local test listener: {err}"),
    };
    let addr = listener.local_addr().expect("local addr");

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Length: {}\r\nContent-Type: application/json\r\nConnection: close\r\n\r\n{body}",
        body.len()
    )
    .into_bytes();

    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let mut buf = [0u8; 4096];
        let read = socket.read(&mut buf).await.unwrap_or(0);
        let _ = socket.write_all(&response).await;
        let _ = socket.shutdown().await;

        let request = String::from_utf8_lossy(&buf[..read]);
        request.lines().next().unwrap_or_default().to_string()
    });

    Some((format!("http://{addr}/api/yellow-taxi"), handle))
}

fn client(base_url: String) -> HttpTripApi {
    HttpTripApi::new(&ApiConfig {
        base_url,
        timeout_secs: 5,
    })
    .expect("client")
}

fn first_page() -> ListingQuery {
    ListingQuery {
        sort_by: SortKey::FareAmount,
        order: SortOrder::Desc,
        limit: 10,
        offset: 0,
    }
}

#[tokio::test]
async fn sorted_page_sends_listing_parameters() {
    let body = r#"{"success":true,"totalRecords":25,"data":[
        {"vendor_id":"1","pickup_datetime":"2024-01-05T08:00:00.000Z","payment_type":"CARD","fare_amount":"52.0","trip_distance":12.4},
        {"vendor_id":"2","pickup_datetime":"2024-01-06T09:30:00.000Z","payment_type":"CASH","fare_amount":48.5,"trip_distance":"10.1"}
    ]}"#;
    let Some((base_url, server)) = start_single_response_server("200 OK", body).await else {
        return;
    };

    let page = client(base_url).fetch_sorted(&first_page()).await.expect("page");
    let request_line = server.await.expect("server task");

    assert!(
        request_line
            .starts_with("GET /api/yellow-taxi/sorted?sortBy=fare_amount&order=desc&limit=10&offset=0 "),
        "unexpected request line: {request_line}"
    );
    assert_eq!(page.total_records, 25);
    assert_eq!(page.trips.len(), 2);
    assert_eq!(page.trips[0].fare_amount, Some(52.0));
    assert_eq!(page.trips[1].trip_distance, Some(10.1));
}

#[tokio::test]
async fn collection_is_fetched_from_the_base_path() {
    let body = r#"{"success":true,"data":[{"payment_type":"CASH","total_amount":10},{"payment_type":"CARD","total_amount":"5.5"}]}"#;
    let Some((base_url, server)) = start_single_response_server("200 OK", body).await else {
        return;
    };

    let trips = client(base_url).fetch_all().await.expect("trips");
    let request_line = server.await.expect("server task");

    assert!(request_line.starts_with("GET /api/yellow-taxi/ "), "{request_line}");
    assert_eq!(trips.len(), 2);
    assert_eq!(trips[1].total_amount, Some(5.5));
}

#[tokio::test]
async fn unsuccessful_envelope_becomes_api_error() {
    let body = r#"{"success":false,"message":"database unavailable"}"#;
    let Some((base_url, server)) =
        start_single_response_server("500 Internal Server Error", body).await
    else {
        return;
    };

    let err = client(base_url).fetch_sorted(&first_page()).await.expect_err("should fail");
    server.await.expect("server task");

    match err {
        Error::Api { message } => assert_eq!(message, "database unavailable"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_json_error_reply_reports_status() {
    let Some((base_url, server)) = start_single_response_server("502 Bad Gateway", "upstream down").await
    else {
        return;
    };

    let err = client(base_url).fetch_all().await.expect_err("should fail");
    server.await.expect("server task");

    match err {
        Error::Status { status, url } => {
            assert_eq!(status, 502);
            assert!(url.ends_with("/api/yellow-taxi/"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn sorted_reply_without_total_counts_its_rows() {
    let body = r#"{"success":true,"data":[{"fare_amount":3},{"fare_amount":4},{"fare_amount":5}]}"#;
    let Some((base_url, server)) = start_single_response_server("200 OK", body).await else {
        return;
    };

    let page = client(base_url).fetch_sorted(&first_page()).await.expect("page");
    server.await.expect("server task");

    assert_eq!(page.total_records, 3);
}
