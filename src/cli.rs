use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::generate::Lookup;

fn parse_character_name(s: &str) -> Result<String, String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err("character name must not be empty".to_string());
    }
    Ok(trimmed.to_string())
}

#[derive(Parser)]
#[command(
    name = "comicpage",
    about = "Generate HTML pages from Marvel comic stories"
)]
#[command(group(ArgGroup::new("lookup").required(true)))]
pub struct Cli {
    /// Randomly select a story featuring the named character
    #[arg(long, group = "lookup", value_parser = parse_character_name)]
    pub name: Option<String>,

    /// Generate the page for a specific story ID
    #[arg(long, group = "lookup")]
    pub id: Option<u64>,

    /// Output file path
    #[arg(long, default_value = "out.html")]
    pub out: PathBuf,
}

impl Cli {
    /// The lookup mode selected on the command line.
    /// The `lookup` arg group guarantees exactly one of the two is present.
    pub fn lookup(&self) -> Lookup {
        match (&self.name, self.id) {
            (Some(name), None) => Lookup::Name(name.clone()),
            (None, Some(id)) => Lookup::Id(id),
            _ => unreachable!("clap enforces the lookup group"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_mode_parses() {
        let cli = Cli::try_parse_from(["comicpage", "--name", "Iron Man"]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Iron Man"));
        assert_eq!(cli.id, None);
        assert!(matches!(cli.lookup(), Lookup::Name(n) if n == "Iron Man"));
    }

    #[test]
    fn id_mode_parses() {
        let cli = Cli::try_parse_from(["comicpage", "--id", "51906"]).unwrap();
        assert_eq!(cli.id, Some(51906));
        assert!(matches!(cli.lookup(), Lookup::Id(51906)));
    }

    #[test]
    fn out_defaults_to_out_html() {
        let cli = Cli::try_parse_from(["comicpage", "--id", "1"]).unwrap();
        assert_eq!(cli.out, PathBuf::from("out.html"));
    }

    #[test]
    fn out_override() {
        let cli = Cli::try_parse_from(["comicpage", "--id", "1", "--out", "comic.html"]).unwrap();
        assert_eq!(cli.out, PathBuf::from("comic.html"));
    }

    #[test]
    fn both_modes_rejected() {
        let err = Cli::try_parse_from(["comicpage", "--name", "Thor", "--id", "5"]);
        assert!(err.is_err());
    }

    #[test]
    fn neither_mode_rejected() {
        let err = Cli::try_parse_from(["comicpage"]);
        assert!(err.is_err());
    }

    #[test]
    fn empty_name_rejected() {
        assert!(Cli::try_parse_from(["comicpage", "--name", ""]).is_err());
        assert!(Cli::try_parse_from(["comicpage", "--name", "   "]).is_err());
    }

    #[test]
    fn name_is_trimmed() {
        let cli = Cli::try_parse_from(["comicpage", "--name", " Red Skull "]).unwrap();
        assert_eq!(cli.name.as_deref(), Some("Red Skull"));
    }

    #[test]
    fn non_numeric_id_rejected() {
        assert!(Cli::try_parse_from(["comicpage", "--id", "fifty"]).is_err());
    }
}
