#[tokio::main]
async fn main() -> anyhow::Result<()> {
    community_events_lib::run().await
}
