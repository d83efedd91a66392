use std::cell::Cell;

use price_extractor::{
    ExtractError, Inference, PageFetcher, Strategy, extract_from_html, extract_product,
    parse_target,
};
use url::Url;

struct FakeFetcher {
    status: u16,
    html: &'static str,
    calls: Cell<usize>,
}

impl FakeFetcher {
    fn ok(html: &'static str) -> Self {
        FakeFetcher {
            status: 200,
            html,
            calls: Cell::new(0),
        }
    }

    fn status(status: u16) -> Self {
        FakeFetcher {
            status,
            html: "",
            calls: Cell::new(0),
        }
    }
}

impl PageFetcher for FakeFetcher {
    fn fetch_html(&self, _url: &Url) -> Result<String, ExtractError> {
        self.calls.set(self.calls.get() + 1);
        if self.status == 200 {
            Ok(self.html.to_string())
        } else {
            Err(ExtractError::Http {
                status: self.status,
            })
        }
    }
}

const KABUM_PAGE: &str = r#"<!DOCTYPE html>
<html lang="pt-BR"><head>
<title>Placa de Vídeo RTX 4060 | KaBuM!</title>
<meta property="og:title" content="Placa de Vídeo RTX 4060 Ventus 2X">
<script type="application/ld+json">
{"@context":"https://schema.org/","@type":"Product","name":"Placa de Vídeo RTX 4060",
 "offers":{"@type":"Offer","priceCurrency":"BRL","price":1899.99,"availability":"https://schema.org/InStock"}}
</script>
</head><body>
<div id="blocoValores">
  <h4>R$ 1.899,99</h4><span>À vista no PIX com 15% de desconto</span>
  <b>R$ 2.235,28</b><span>Em até 10x de R$ 223,53 sem juros no cartão</span>
</div>
</body></html>"#;

#[test]
fn kabum_page_end_to_end() {
    let fetcher = FakeFetcher::ok(KABUM_PAGE);
    let result = extract_product("https://www.kabum.com.br/produto/461522", &fetcher).unwrap();

    assert_eq!(result.url, "https://www.kabum.com.br/produto/461522");
    assert_eq!(result.title.as_deref(), Some("Placa de Vídeo RTX 4060 Ventus 2X"));
    assert_eq!(result.price_vista, Some(1899.99));
    assert_eq!(result.price_parcelado, Some(2235.3));
    assert_eq!(result.source.hostname, "www.kabum.com.br");
    assert_eq!(result.source.strategy, Strategy::Kabum);
    assert_eq!(result.source.inferred, None);
    assert_eq!(fetcher.calls.get(), 1);
}

#[test]
fn generic_page_infers_installment_total() {
    let fetcher = FakeFetcher::ok(
        r#"<html><head><title> Cadeira Gamer </title></head>
        <body><p>Pagamento no boleto: R$ 749,90</p></body></html>"#,
    );
    let result = extract_product("https://www.lojaqualquer.com.br/cadeira", &fetcher).unwrap();

    assert_eq!(result.title.as_deref(), Some("Cadeira Gamer"));
    assert_eq!(result.price_vista, Some(749.9));
    assert_eq!(result.price_parcelado, Some(749.9));
    assert_eq!(result.source.strategy, Strategy::Generic);
    assert_eq!(result.source.inferred, Some(Inference::ParceladoEqualsVista));
}

#[test]
fn kabum_subdomain_uses_generic_strategy() {
    let url = Url::parse("https://loja.kabum.com.br/produto/1").unwrap();
    let result = extract_from_html(&url, "<html><body>10x de R$ 100</body></html>");

    assert_eq!(result.source.strategy, Strategy::Generic);
    assert_eq!(result.price_parcelado, Some(1000.0));
    assert_eq!(result.price_vista, Some(950.0));
    assert_eq!(result.source.inferred, Some(Inference::VistaFromParcelado));
}

#[test]
fn page_without_prices_is_not_an_error() {
    let fetcher = FakeFetcher::ok("<html><body><h1>Produto esgotado</h1></body></html>");
    let result = extract_product("https://www.pichau.com.br/produto", &fetcher).unwrap();

    assert_eq!(result.source.strategy, Strategy::Pichau);
    assert_eq!(result.price_vista, None);
    assert_eq!(result.price_parcelado, None);
    assert_eq!(result.source.inferred, None);
    assert_eq!(result.title, None);
}

#[test]
fn fetch_fault_is_propagated() {
    let fetcher = FakeFetcher::status(404);
    let err = extract_product("https://www.mercadolivre.com.br/p/MLB123", &fetcher).unwrap_err();

    assert!(matches!(err, ExtractError::Http { status: 404 }));
    assert_eq!(err.to_string(), "HTTP 404");
}

#[test]
fn invalid_url_fails_before_fetching() {
    let fetcher = FakeFetcher::ok("<html></html>");
    for url in ["", "not a url", "/relative/path", "ftp://kabum.com.br/x", "mailto:a@b.c"] {
        let err = extract_product(url, &fetcher).unwrap_err();
        assert!(matches!(err, ExtractError::InvalidUrl { .. }), "{url}: {err}");
    }
    assert_eq!(fetcher.calls.get(), 0);
}

#[test]
fn parse_target_accepts_http_and_https() {
    assert!(parse_target("http://kabum.com.br/produto/1").is_ok());
    assert_eq!(
        parse_target("https://WWW.Pichau.com.br/x").unwrap().host_str(),
        Some("www.pichau.com.br")
    );
}

#[test]
fn result_serializes_with_camel_case_keys() {
    let url = Url::parse("https://example.com/p").unwrap();
    let result = extract_from_html(&url, "<html><body>sem preço</body></html>");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "url": "https://example.com/p",
            "title": null,
            "priceVista": null,
            "priceParcelado": null,
            "source": { "hostname": "example.com", "strategy": "generic" }
        })
    );
}
