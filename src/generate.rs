use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::marvel::Client;
use crate::render;
use crate::select;

/// Lookup mode selected on the command line.
#[derive(Debug, Clone)]
pub enum Lookup {
    Name(String),
    Id(u64),
}

/// Resolve a story, fetch its characters, render the page, write the file.
/// Every step is awaited before the next begins; any error aborts the run
/// before the output file is touched.
pub async fn generate(client: &Client, lookup: Lookup, out: &Path) -> Result<()> {
    let story_id = match lookup {
        Lookup::Id(id) => id,
        Lookup::Name(name) => {
            println!("Looking for a comic from {name}...");
            info!("popular characters appear in thousands of stories; this may take a while");
            let character_id = client.character_id(&name).await?;
            debug!(character_id, "resolved character");
            let story_ids = client.character_story_ids(character_id).await?;
            debug!(count = story_ids.len(), "collected story ids");
            select::pick_story(&story_ids, &mut rand::rng())
                .with_context(|| format!("character {name:?} has no stories to choose from"))?
        }
    };

    println!("Generating HTML for story {story_id}...");
    let story = client.story(story_id).await?;
    let characters = client.story_characters(story_id).await?;

    let html = render::build_page(&story, &characters);
    render::write_page(out, &html)?;

    println!("Wrote {}", out.display());
    Ok(())
}
