use std::sync::LazyLock;

use scraper::{Html, Selector};

static BODY: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("body").expect("body selector is valid"));
static OG_TITLE: LazyLock<Selector> = LazyLock::new(|| {
    Selector::parse(r#"meta[property="og:title"]"#).expect("og:title selector is valid")
});
static TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("title").expect("title selector is valid"));

/// One parsed product page, read-only for the lifetime of an extraction.
pub struct Page {
    document: Html,
    body_text: String,
    flat_text: String,
}

impl Page {
    pub fn parse(html: &str) -> Self {
        let document = Html::parse_document(html);
        let body_text = document
            .select(&BODY)
            .next()
            .map(|body| body.text().collect::<String>())
            .unwrap_or_default();
        let flat_text = body_text.split_whitespace().collect::<Vec<_>>().join(" ");

        Page {
            document,
            body_text,
            flat_text,
        }
    }

    pub fn document(&self) -> &Html {
        &self.document
    }

    /// All text under `<body>`, as-is.
    pub fn body_text(&self) -> &str {
        &self.body_text
    }

    /// Body text with every whitespace run collapsed to a single space.
    pub fn flat_text(&self) -> &str {
        &self.flat_text
    }

    /// `og:title`, else `<title>`, trimmed.
    pub fn title(&self) -> Option<String> {
        let og = self
            .document
            .select(&OG_TITLE)
            .next()
            .and_then(|e| e.value().attr("content"))
            .filter(|c| !c.is_empty());

        let title = match og {
            Some(content) => content.to_string(),
            None => self
                .document
                .select(&TITLE)
                .next()
                .map(|e| e.text().collect::<String>())?,
        };

        let title = title.trim();
        if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        }
    }
}
