//! Retry, spacing and failure behavior of the client.

mod common;

use async_trait::async_trait;
use common::{ScriptedTransport, client_over, fast_config};
use hltv_fetch::{ClientConfig, FetchError, RawResponse, RetryPolicy, Transport};
use hltv_query::{Directory, SearchKind};
use hltv_types::HltvError;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::time::Instant;

/// Answers every request after `latency`, recording when each started and ended.
#[derive(Debug)]
struct SlowTransport {
    latency: Duration,
    spans: Mutex<Vec<(Instant, Instant)>>,
}

impl SlowTransport {
    fn new(latency: Duration) -> Arc<Self> {
        Arc::new(Self {
            latency,
            spans: Mutex::new(Vec::new()),
        })
    }

    fn spans(&self) -> Vec<(Instant, Instant)> {
        let mut spans = self.spans.lock().unwrap().clone();
        spans.sort();
        spans
    }
}

#[async_trait]
impl Transport for SlowTransport {
    async fn get(&self, _url: &str, _params: &[(String, String)]) -> Result<RawResponse, FetchError> {
        let started = Instant::now();
        tokio::time::sleep(self.latency).await;
        self.spans.lock().unwrap().push((started, Instant::now()));
        Ok(RawResponse::ok("done"))
    }
}

fn config(max_retries: u32, spacing: Duration) -> ClientConfig {
    ClientConfig {
        min_spacing: spacing,
        retry: RetryPolicy {
            max_retries,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(3),
        },
        ..ClientConfig::default()
    }
}

#[tokio::test(start_paused = true)]
async fn test_retries_until_success() {
    let transport = ScriptedTransport::new(vec![
        Ok(RawResponse::new(503, "busy")),
        Err(FetchError::Transport("connection reset".to_string())),
        Ok(RawResponse::ok("<html>ok</html>")),
    ]);
    let client = client_over(transport.clone(), config(3, Duration::ZERO));

    let body = client.fetch("https://www.hltv.org/results", &[]).await.unwrap();
    assert_eq!(body, "<html>ok</html>");
    assert_eq!(transport.calls().len(), 3);
    assert_eq!(transport.rotations(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_exhausted_retries_report_last_response() {
    let transport = ScriptedTransport::new(vec![
        Ok(RawResponse::new(500, "first")),
        Ok(RawResponse::new(502, "second")),
        Ok(RawResponse::new(403, "blocked")),
        Err(FetchError::Transport("timed out".to_string())),
        Ok(RawResponse::ok("never reached")),
    ]);
    let client = client_over(transport.clone(), config(3, Duration::ZERO));

    let err = client.fetch("https://www.hltv.org/results", &[]).await.unwrap_err();
    match err {
        FetchError::RequestFailure {
            url,
            attempts,
            status,
            body,
        } => {
            assert_eq!(url, "https://www.hltv.org/results");
            assert_eq!(attempts, 4);
            assert_eq!(status, Some(403));
            assert_eq!(body.as_deref(), Some("blocked"));
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(transport.calls().len(), 4);
}

#[tokio::test(start_paused = true)]
async fn test_same_request_is_repeated() {
    let transport = ScriptedTransport::new(vec![
        Ok(RawResponse::new(429, "")),
        Ok(RawResponse::ok("done")),
    ]);
    let client = client_over(transport.clone(), config(3, Duration::ZERO));
    let params = vec![("offset".to_string(), "100".to_string())];

    client.fetch("https://www.hltv.org/results", &params).await.unwrap();
    let calls = transport.calls();
    assert_eq!(calls[0].url, calls[1].url);
    assert_eq!(calls[0].params, calls[1].params);
}

#[tokio::test(start_paused = true)]
async fn test_retry_after_adds_wait() {
    let transport = ScriptedTransport::new(vec![
        Ok(RawResponse::new(429, "").with_retry_after(Duration::from_secs(10))),
        Ok(RawResponse::ok("done")),
    ]);
    let client = client_over(transport.clone(), config(3, Duration::ZERO));

    client.fetch("https://www.hltv.org/results", &[]).await.unwrap();
    let calls = transport.calls();
    let gap = calls[1].at - calls[0].at;
    let backoff = RetryPolicy::default().delay_for_attempt(1);
    assert!(gap >= Duration::from_secs(10) + backoff);
}

#[tokio::test(start_paused = true)]
async fn test_minimum_spacing_between_requests() {
    let transport = ScriptedTransport::new(vec![
        Ok(RawResponse::ok("a")),
        Ok(RawResponse::ok("b")),
        Ok(RawResponse::ok("c")),
    ]);
    let client = client_over(transport.clone(), config(0, Duration::from_secs(1)));

    for _ in 0..3 {
        client.fetch("https://www.hltv.org/results", &[]).await.unwrap();
    }
    let calls = transport.calls();
    assert!(calls[1].at - calls[0].at >= Duration::from_secs(1));
    assert!(calls[2].at - calls[1].at >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_spacing_counts_from_previous_completion() {
    let transport = SlowTransport::new(Duration::from_secs(2));
    let client = client_over(transport.clone(), config(0, Duration::from_secs(1)));

    client.fetch("https://www.hltv.org/results", &[]).await.unwrap();
    client.fetch("https://www.hltv.org/results", &[]).await.unwrap();

    let spans = transport.spans();
    assert_eq!(spans.len(), 2);
    assert!(spans[1].0 - spans[0].1 >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_spacing_holds_for_concurrent_clones() {
    let transport = SlowTransport::new(Duration::from_secs(2));
    let client = client_over(transport.clone(), config(0, Duration::from_secs(1)));
    let other = client.clone();

    let (a, b) = tokio::join!(
        client.fetch("https://www.hltv.org/matches/1/x", &[]),
        other.fetch("https://www.hltv.org/matches/2/x", &[]),
    );
    a.unwrap();
    b.unwrap();

    let spans = transport.spans();
    assert_eq!(spans.len(), 2);
    assert!(spans[1].0 - spans[0].1 >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn test_spacing_is_per_client() {
    let first = ScriptedTransport::new(vec![Ok(RawResponse::ok("a"))]);
    let second = ScriptedTransport::new(vec![Ok(RawResponse::ok("b"))]);
    let a = client_over(first.clone(), config(0, Duration::from_secs(5)));
    let b = client_over(second.clone(), config(0, Duration::from_secs(5)));

    let start = tokio::time::Instant::now();
    a.fetch("https://www.hltv.org/results", &[]).await.unwrap();
    b.fetch("https://www.hltv.org/results", &[]).await.unwrap();
    assert!(second.calls()[0].at - start < Duration::from_secs(5));
}

#[tokio::test(start_paused = true)]
async fn test_no_retry_policy_makes_one_attempt() {
    let transport = ScriptedTransport::new(vec![Ok(RawResponse::new(500, "down"))]);
    let client = client_over(
        transport.clone(),
        ClientConfig {
            retry: RetryPolicy::none(),
            ..fast_config()
        },
    );

    let err: HltvError = client
        .fetch("https://www.hltv.org/results", &[])
        .await
        .unwrap_err()
        .into();
    assert_eq!(err.status(), Some(500));
    assert_eq!(transport.calls().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_search_returns_ids_in_listed_order() {
    let transport = ScriptedTransport::new(vec![Ok(RawResponse::ok(
        r#"[{"id": 4608, "name": "Natus Vincere"}, {"id": 10371, "name": "NAVI Junior"}]"#,
    ))]);
    let client = client_over(transport.clone(), fast_config());

    let ids = client.search(SearchKind::Team, "navi").await.unwrap();
    assert_eq!(ids, vec![4608, 10371]);

    let call = &transport.calls()[0];
    assert_eq!(call.url, "https://www.hltv.org/searchTeam");
    assert_eq!(call.param("term"), Some("navi"));
}

#[tokio::test(start_paused = true)]
async fn test_search_with_malformed_body_is_parse_error() {
    let transport = ScriptedTransport::new(vec![Ok(RawResponse::ok("<html>captcha</html>"))]);
    let client = client_over(transport, fast_config());

    let err = client.search(SearchKind::Player, "s1mple").await.unwrap_err();
    assert!(matches!(err, HltvError::Parse(_)));
}

#[tokio::test(start_paused = true)]
async fn test_search_hits_keep_names() {
    let transport = ScriptedTransport::new(vec![Ok(RawResponse::ok(
        r#"[{"id": 9565, "name": "Vitality"}, {"id": 11283}]"#,
    ))]);
    let client = client_over(transport.clone(), fast_config());

    let hits = client.search_hits(SearchKind::Event, "blast").await.unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].name.as_deref(), Some("Vitality"));
    assert_eq!(hits[1].name, None);
    assert_eq!(transport.calls()[0].url, "https://www.hltv.org/searchEvent");
}
