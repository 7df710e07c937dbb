use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener};
use std::process::{Command, Output};
use std::thread;

const SERIES: &str = r#"{"Time Series (Daily)": {"2026-10-15": {
    "1. open": "150.00", "2. high": "155.00", "3. low": "148.00",
    "4. close": "152.00", "5. volume": "1000000"}}}"#;

/// Answers one HTTP request with `body` as a 200 JSON response.
fn serve_once(body: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    addr
}

fn daily_client(endpoint: &str, extra: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_daily_client"))
        .env_remove("DAILY_SYMBOL")
        .env_remove("ALPHAVANTAGE_API_KEY")
        .env_remove("ALPHAVANTAGE_ENDPOINT")
        .env("RUST_LOG", "off")
        .args(["--endpoint", endpoint, "--timeout-secs", "10"])
        .args(extra)
        .output()
        .unwrap()
}

fn stderr_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stderr)
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn unreachable_endpoint_exits_with_one() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let output = daily_client(&format!("http://{}/query", addr), &[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Request failed: "), "{lines:?}");
}

#[test]
fn missing_series_exits_with_one() {
    let addr = serve_once(r#"{"Note": "Thank you for using Alpha Vantage!"}"#);

    let output = daily_client(&format!("http://{}/query", addr), &["--latest"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let lines = stderr_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Unexpected response shape"), "{lines:?}");
    assert!(lines[0].contains("Thank you for using Alpha Vantage!"));
}

#[test]
fn missing_date_exits_with_one() {
    let addr = serve_once(SERIES);

    let output = daily_client(&format!("http://{}/query", addr), &["--date", "2026-10-16"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(stderr_lines(&output), vec![String::from("No data for 2026-10-16")]);
}

#[test]
fn report_exits_with_zero() {
    let addr = serve_once(SERIES);

    let output = daily_client(&format!("http://{}/query", addr), &["--latest"]);

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("=== IBM daily analysis (2026-10-15) ==="));
    assert!(stdout.contains("Change: 2.00 (1.33%)"));
    assert!(stdout.contains("Volatility tier: medium"));
}
