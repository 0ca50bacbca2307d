//! Human-readable report and JSON file output for a curation run.

use std::fs;
use std::path::Path;

use revu_curation::CurationResult;

/// Print the run summary: the generated content first, then the selected
/// images and the attribution list.
pub fn print_report(result: &CurationResult) {
    let rule = "=".repeat(50);
    println!("{rule}");
    println!("curation result for keyword: {}", result.keyword);
    println!("{rule}");
    println!("posts considered: {}", result.total_posts);
    println!("images selected:  {}", result.selected_images.len());

    println!("\ngenerated review:\n");
    println!("{}", result.content);

    println!("\nselected images:");
    for (i, url) in result.selected_images.iter().enumerate() {
        println!("{}. {url}", i + 1);
    }

    println!("\ntop posts:");
    for (i, post) in result.top_posts.iter().enumerate() {
        println!("{}. {} (likes: {})", i + 1, post.title, post.liked_count);
    }
}

/// Write the result as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization or the file write fails.
pub fn write_json(result: &CurationResult, path: &Path) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    fs::write(path, json)?;
    Ok(())
}
