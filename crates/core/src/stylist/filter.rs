//! Candidate filtering. Deliberately lenient: a thin result set falls back to
//! price-only matching rather than returning nothing, because an imperfect
//! outfit beats an empty screen.

use crate::catalog::Catalog;
use crate::domain::preferences::StyleRequest;
use crate::domain::product::{Occasion, Product};

use super::budget::PriceBand;

/// Strict pass: in stock, priced inside the band, and compatible with the
/// requested body type, skin tone, season and occasion. Garments tagged for
/// casual wear always pass the occasion gate so every request has everyday
/// fallbacks to draw on.
pub(crate) fn filter_candidates<'a>(
    catalog: &'a Catalog,
    request: &StyleRequest,
    band: &PriceBand,
) -> Vec<&'a Product> {
    let strict: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| {
            p.in_stock
                && band.contains(p.price)
                && p.suits_body_type(request.body_type)
                && p.suits_skin_tone(request.skin_tone)
                && p.suits_season(request.season)
                && (p.suits_occasion(request.occasion) || p.suits_occasion(Occasion::Casual))
        })
        .collect();
    if !strict.is_empty() {
        return strict;
    }

    // Price-only fallback when the strict pass matched nothing.
    catalog
        .products()
        .iter()
        .filter(|p| p.in_stock && band.contains(p.price))
        .collect()
}
