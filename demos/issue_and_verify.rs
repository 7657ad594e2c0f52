//! Issue a token, verify it, and show how rejections surface.
//!
//! Run with `RUST_LOG=hsjwt=trace cargo run --example issue_and_verify`
//! to see the library's diagnostics.

use hsjwt::{current_timestamp, decode, encode, ensure_live, Claims, Error};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<(), Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hsjwt=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let secret = b"not so secret after all";

    let claims = Claims::new()
        .issuer("whoyou.io")
        .audience("api.whoyou.io")
        .subject("jane@example.com")
        .stamp(Duration::from_secs(15 * 60));

    let token = encode(&claims, secret)?;
    tracing::info!(%token, "issued");

    let decoded = decode(&token, secret)?;
    ensure_live(&decoded, current_timestamp())?;
    tracing::info!(sub = ?decoded.sub, exp = ?decoded.exp, "verified");

    match decode(&token, b"some other secret") {
        Err(e) => tracing::info!("wrong secret rejected: {e}"),
        Ok(_) => tracing::error!("wrong secret accepted"),
    }

    let expired = encode(&claims.expires_at(0), secret)?;
    let decoded = decode(&expired, secret)?;
    if let Err(e) = ensure_live(&decoded, current_timestamp()) {
        tracing::info!("authentic but {e}");
    }

    Ok(())
}
