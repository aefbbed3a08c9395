//! Lexical screening of fetched markup.
//!
//! Matching is plain substring containment against [`SUSPICIOUS_KEYWORDS`].
//! Nothing is executed or evaluated.

use html5ever::driver::{self, ParseOpts};
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, HtmlTreeSink, Selector};
use tracing::debug;

/// Keywords checked, in order, against every link target and script tag.
pub const SUSPICIOUS_KEYWORDS: [&str; 6] = [
    "javascript:",
    "onerror",
    "onload",
    "<script>",
    "base64",
    "eval",
];

/// Number of characters of script markup kept per match.
pub const SCRIPT_SNIPPET_CHARS: usize = 50;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inspection {
    pub title: Option<String>,
    pub matched_links: Vec<String>,
    pub matched_scripts: Vec<String>,
}

impl Inspection {
    pub fn is_suspicious(&self) -> bool {
        !self.matched_links.is_empty() || !self.matched_scripts.is_empty()
    }
}

/// Parse with scripting disabled so `<noscript>` content is built into
/// elements rather than kept as raw text.
fn parse_document(html: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };
    driver::parse_document(HtmlTreeSink::new(Html::new_document()), opts).one(html)
}

/// Parse `html` leniently and screen its anchors and scripts.
///
/// A keyword hit appends one entry per matching keyword, so an href holding
/// two keywords shows up twice.
pub fn inspect(html: &str) -> Inspection {
    let document = parse_document(html);

    let title_selector = Selector::parse("title").expect("static selector");
    let title = document
        .select(&title_selector)
        .next()
        .map(|element| element.text().collect::<String>());

    let link_selector = Selector::parse("a[href]").expect("static selector");
    let mut matched_links = Vec::new();
    for element in document.select(&link_selector) {
        if let Some(href) = element.value().attr("href") {
            for _ in matching_keywords(href) {
                matched_links.push(href.to_string());
            }
        }
    }

    let script_selector = Selector::parse("script").expect("static selector");
    let mut matched_scripts = Vec::new();
    for element in document.select(&script_selector) {
        let markup = element.html();
        for _ in matching_keywords(&markup) {
            matched_scripts.push(snippet(&markup));
        }
    }

    debug!(
        "Inspection found {} suspicious links, {} suspicious scripts",
        matched_links.len(),
        matched_scripts.len()
    );

    Inspection {
        title,
        matched_links,
        matched_scripts,
    }
}

fn matching_keywords(haystack: &str) -> impl Iterator<Item = &'static str> + '_ {
    SUSPICIOUS_KEYWORDS
        .iter()
        .copied()
        .filter(move |keyword| haystack.contains(keyword))
}

fn snippet(markup: &str) -> String {
    let mut snippet: String = markup.chars().take(SCRIPT_SNIPPET_CHARS).collect();
    snippet.push_str("...");
    snippet
}
