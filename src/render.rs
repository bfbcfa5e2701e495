use std::path::Path;

use anyhow::{Context, Result};

use crate::marvel::{Character, Story};

/// Build the complete HTML document for a story.
///
/// Pure function of its inputs: identical story + characters always yield
/// byte-identical output. All API text is escaped; only the attribution
/// markup from the envelope is inserted verbatim.
pub fn build_page(story: &Story, characters: &[Character]) -> String {
    let mut cards = String::new();
    for character in characters {
        cards.push_str(&character_card(character));
    }

    let character_section = if cards.is_empty() {
        r#"<div class="empty">No characters listed for this story.</div>"#.to_string()
    } else {
        format!("<div class=\"characters\">\n{cards}    </div>")
    };

    let mut credits = String::new();
    for (label, value) in [
        ("Authors", &story.authors),
        ("Series", &story.series),
        ("Events", &story.events),
    ] {
        if !value.is_empty() {
            credits.push_str(&format!(
                "      <div class=\"credit\"><span>{label}</span> {}</div>\n",
                html_escape(value)
            ));
        }
    }
    let credits_section = if credits.is_empty() {
        String::new()
    } else {
        format!("<section class=\"credits\">\n{credits}    </section>")
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <title>{title}</title>
  <style>
    :root {{ color-scheme: light; }}
    body {{
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
      margin: 0; padding: 24px;
      background: #f6f7f9; color: #1f2933;
    }}
    h1 {{ margin: 0 0 8px; font-size: 24px; }}
    .meta {{ margin-bottom: 16px; color: #52606d; font-size: 14px; }}
    h2 {{ margin: 24px 0 12px; font-size: 18px; }}
    .description {{ max-width: 720px; color: #3e4c59; }}
    .characters {{ display: flex; flex-wrap: wrap; gap: 16px; }}
    .card {{
      width: 180px; padding: 12px; background: #fff;
      border: 1px solid #e4e7eb; border-radius: 4px;
      box-shadow: 0 2px 6px rgba(0,0,0,0.05);
    }}
    .card img {{ width: 100%; height: auto; display: block; background: #e4e7eb; }}
    .card h3 {{ margin: 8px 0 4px; font-size: 15px; }}
    .card p {{ margin: 0; font-size: 13px; color: #52606d; }}
    .credits {{ margin-top: 24px; font-size: 14px; color: #3e4c59; }}
    .credit span {{ font-weight: 600; }}
    .empty {{ padding: 24px 0; color: #52606d; }}
    .attribution {{ margin-top: 32px; font-size: 12px; color: #7b8794; }}
  </style>
</head>
<body>
  <h1>{title}</h1>
  <div class="meta">Story #{id}</div>
  <p class="description">{description}</p>
  <h2>Characters</h2>
  {character_section}
  {credits_section}
  <footer class="attribution">{attribution}</footer>
</body>
</html>
"##,
        title = html_escape(&story.title),
        id = story.id,
        description = html_escape(&story.description),
        character_section = character_section,
        credits_section = credits_section,
        attribution = story.attribution_html,
    )
}

fn character_card(character: &Character) -> String {
    let name = html_escape(&character.name);
    let url = html_escape(&character.thumbnail_url);
    let description = if character.description.is_empty() {
        String::new()
    } else {
        format!("\n        <p>{}</p>", html_escape(&character.description))
    };
    format!(
        r#"      <div class="card">
        <img src="{url}" alt="{name}" loading="lazy" />
        <h3>{name}</h3>{description}
      </div>
"#,
    )
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Write the rendered page. The document is fully built before this is
/// called, so a failed run never leaves a truncated file behind on the
/// happy path prior to this point.
pub fn write_page(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).with_context(|| format!("Failed to write {}", path.display()))
}
