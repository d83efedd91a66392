use tracing::debug;

use crate::models::Strategy;

/// Storefronts with a dedicated strategy, by bare hostname.
const KNOWN_HOSTS: &[(&str, Strategy)] = &[
    ("kabum.com.br", Strategy::Kabum),
    ("pichau.com.br", Strategy::Pichau),
    ("mercadolivre.com.br", Strategy::MercadoLivre),
];

/// Pick the strategy for a hostname. A leading `www.` is ignored; any other
/// subdomain falls through to the generic strategy.
pub fn select(hostname: &str) -> Strategy {
    let host = hostname.to_ascii_lowercase();
    let host = host.strip_prefix("www.").unwrap_or(host.as_str());
    let strategy = KNOWN_HOSTS
        .iter()
        .find(|(known, _)| *known == host)
        .map(|(_, strategy)| *strategy)
        .unwrap_or(Strategy::Generic);
    debug!("host {} uses strategy {}", hostname, strategy.as_str());
    strategy
}
