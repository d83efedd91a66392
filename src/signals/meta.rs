use std::sync::LazyLock;

use scraper::Selector;

use crate::normalize::parse_locale_number;
use crate::parser::Page;

static PRICE_META: LazyLock<[Selector; 3]> = LazyLock::new(|| {
    [
        r#"meta[property="product:price:amount"]"#,
        r#"meta[itemprop="price"]"#,
        r#"meta[property="og:price:amount"]"#,
    ]
    .map(|s| Selector::parse(s).expect("meta price selector is valid"))
});

/// Price from the first non-empty known meta tag.
pub fn meta_price(page: &Page) -> Option<f64> {
    let content = PRICE_META.iter().find_map(|sel| {
        page.document()
            .select(sel)
            .next()
            .and_then(|e| e.value().attr("content"))
            .filter(|c| !c.is_empty())
    })?;
    parse_locale_number(content).filter(|p| *p > 0.0)
}
