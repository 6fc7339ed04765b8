#[tokio::main]
async fn main() -> anyhow::Result<()> {
    gateway::app::run().await
}
