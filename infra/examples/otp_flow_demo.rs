//! Drives the OTP verification flow against a live backend.
//!
//! Usage:
//!
//! ```text
//! RELOOP_API_BASE_URL=https://api.reloop.example \
//!     cargo run -p rl_infra --example otp_flow_demo -- "+1 5551234567"
//! ```
//!
//! Type the 6-digit code (or paste it) when prompted.

use std::sync::Arc;

use anyhow::Result;

use rl_core::domain::entities::session::FlowPhase;
use rl_core::services::otp_flow::{OtpFlowConfig, OtpFlowController};
use rl_infra::{BufferedNotifier, HttpAuthApi, MemorySessionStore};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let phone = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "+1 5551234567".to_string());

    let api = Arc::new(HttpAuthApi::from_env()?);
    let store = Arc::new(MemorySessionStore::new());
    let notifier = Arc::new(BufferedNotifier::new());

    let controller = OtpFlowController::new(
        api,
        store.clone(),
        notifier.clone(),
        OtpFlowConfig::default(),
        phone,
    );
    controller.start(None).await;

    println!(
        "Enter the 6-digit code sent to {}",
        controller.masked_phone()
    );

    let stdin = std::io::stdin();
    loop {
        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        controller.enter_digit(line.trim(), 0).await;

        for toast in notifier.drain() {
            println!("[{:?}] {}: {}", toast.kind, toast.title, toast.message);
        }

        let snapshot = controller.snapshot();
        if let Some(error) = &snapshot.error {
            println!("error: {error}");
        }
        if snapshot.phase == FlowPhase::Verified {
            break;
        }
        if snapshot.can_resend {
            println!("(resend available)");
        } else {
            println!("(resend in {})", controller.countdown_label());
        }
    }

    if let Some(session) = store.current().await {
        println!(
            "Logged in as {} at {}",
            session.user.phone, session.logged_in_at
        );
    }
    Ok(())
}
