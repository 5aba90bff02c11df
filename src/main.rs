/*
 * Responsibility
 * - tokio runtime
 * - call app::run() (no logic here)
 */
use anyhow::Result;

use hello_rust_gate::app;

#[tokio::main]
async fn main() -> Result<()> {
    app::run().await
}
