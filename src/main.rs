use std::sync::Arc;

use inu::{init_logger, BreedImageAggregator, DogApiClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();
    init_logger();

    let client = Arc::new(DogApiClient::new()?);
    let aggregator = BreedImageAggregator::new(client);

    let result = aggregator.random_breed_images().await?;

    println!("Random images for breed '{}':", result.breed());
    for image in result.to_breed_images() {
        println!("  {} -> {}", image.key, image.url);
    }
    if !result.failed().is_empty() {
        println!("Fetches that failed:");
        for key in result.failed() {
            println!("  {}", key);
        }
    }

    Ok(())
}
