use portfolio_nav::{MemoryDocument, PageLocation, config, install};
use std::path::PathBuf;

/// Render the site navigation and theme selector into a page body
#[derive(clap::Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// URL of the page being rendered, used to mark current and external links
    #[arg(long)]
    location: String,
    /// JSON array of {"url", "title"} objects replacing the built-in pages
    #[arg(long)]
    pages: Option<PathBuf>,
    /// Existing body markup to prepend to
    #[arg(long)]
    body: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    use clap::Parser;

    env_logger::init();

    let args = Args::parse();

    let pages = match &args.pages {
        Some(path) => config::load_pages(path)?,
        None => config::default_pages(),
    };
    let body = match &args.body {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    let location = PageLocation::parse(&args.location)?;
    let mut doc = MemoryDocument::with_body(location, &body);
    install(&mut doc, &pages)?;

    println!("{}", doc.body_html());
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    #[test]
    fn test_args_parsing() {
        use super::Args;
        let args = Args::parse_from(vec![
            "portfolio-nav",
            "--location",
            "https://site.example/projects",
            "--pages",
            "pages.json",
            "--body",
            "index.html",
        ]);
        assert_eq!(args.location, "https://site.example/projects");
        assert_eq!(args.pages.unwrap().to_str(), Some("pages.json"));
        assert_eq!(args.body.unwrap().to_str(), Some("index.html"));
    }

    #[test]
    fn test_args_parsing_defaults() {
        use super::Args;
        let args = Args::parse_from(vec!["portfolio-nav", "--location", "https://site.example/"]);
        assert!(args.pages.is_none());
        assert!(args.body.is_none());
    }

    #[test]
    fn test_location_required() {
        use super::Args;
        assert!(Args::try_parse_from(vec!["portfolio-nav"]).is_err());
    }
}
