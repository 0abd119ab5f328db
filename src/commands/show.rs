//! Print the normalized model of one works entry

use anyhow::Result;

use crate::Works;

/// Fetch entry `id` and print its normalized form as pretty JSON
pub async fn run(works: &Works, id: &str) -> Result<()> {
    println!("{}", to_json(works, id).await?);
    Ok(())
}

/// Normalized form of entry `id` as pretty JSON
pub async fn to_json(works: &Works, id: &str) -> Result<String> {
    let post = works.fetch_post(id).await?;
    Ok(serde_json::to_string_pretty(&post)?)
}
