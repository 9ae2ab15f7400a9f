//! DEX scanner server binary.
//!
//! Run with:
//! ```bash
//! RUST_LOG=info dex-scanner --listen 0.0.0.0:5000
//! ```

use anyhow::Result;
use dex_scanner::utils::logging::init_logging;
use dex_scanner::Application;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    init_logging();

    let app = Application::init()?;
    app.run().await
}
