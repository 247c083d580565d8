use tokio::net::TcpListener;

/// Local stand-in for the BigTime API. Point `BIGTIME_BASE_URL` at the
/// printed address and use the fixed token/firm pair.
#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let addr = format!("127.0.0.1:{port}");
    let listener = TcpListener::bind(&addr).await?;
    println!("mock BigTime listening on http://{addr}");
    println!(
        "BIGTIME_API_TOKEN={} BIGTIME_FIRM_ID={}",
        mock_server::API_TOKEN,
        mock_server::FIRM_ID
    );
    mock_server::run(listener).await
}
