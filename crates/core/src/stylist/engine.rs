//! The recommendation engine proper: filter, assemble, diversify, rank.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::analysis;
use crate::catalog::Catalog;
use crate::domain::outfit::{OutfitRecommendation, StyleReport};
use crate::domain::preferences::StyleRequest;
use crate::domain::product::Occasion;

use super::assemble::{self, WardrobeSlots};
use super::budget::BudgetTier;
use super::diversity;
use super::filter::filter_candidates;

/// Stateful stylist over an injected catalog. The RNG only influences
/// alternative-look confidences and the simulated analysis jitter, so two
/// engines built with the same seed produce identical reports for identical
/// requests.
pub struct StylistEngine {
    catalog: Catalog,
    rng: StdRng,
}

impl StylistEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(catalog: Catalog, seed: u64) -> Self {
        Self {
            catalog,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Full report: simulated body analysis plus up to `count` ranked outfits.
    pub fn recommend(&mut self, request: &StyleRequest, count: usize) -> StyleReport {
        let analysis = analysis::analyze(request, &mut self.rng);
        let outfits = self.assemble(request, count);
        StyleReport { analysis, outfits }
    }

    /// Just the ranked outfit list, highest confidence first.
    pub fn outfits(&mut self, request: &StyleRequest, count: usize) -> Vec<OutfitRecommendation> {
        self.assemble(request, count)
    }

    fn assemble(&mut self, request: &StyleRequest, count: usize) -> Vec<OutfitRecommendation> {
        let tier = BudgetTier::from_budget(request.budget);
        let band = tier.price_band(request.budget);
        let candidates = filter_candidates(&self.catalog, request, &band);
        let slots = WardrobeSlots::group(&candidates);

        let mut outfits = dispatch(&slots, request);
        if outfits.is_empty() {
            outfits = assemble::basic_outfits(&slots, request, count);
        }
        let mut outfits = diversity::dedupe(outfits);
        diversity::fill_alternatives(&slots, request, &mut outfits, count, &mut self.rng);

        outfits.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        outfits.truncate(count);
        outfits
    }
}

/// Occasion routing: each occasion runs a primary assembler plus a softer
/// companion so a single missing garment kind cannot zero out the result.
fn dispatch(slots: &WardrobeSlots<'_>, request: &StyleRequest) -> Vec<OutfitRecommendation> {
    let mut outfits = Vec::new();
    match request.occasion {
        Occasion::Business => {
            outfits.extend(assemble::business_outfits(slots, request));
            outfits.extend(assemble::business_casual_outfits(slots, request));
        }
        Occasion::BusinessCasual => {
            outfits.extend(assemble::business_casual_outfits(slots, request));
            outfits.extend(assemble::smart_casual_outfits(slots, request));
        }
        Occasion::Formal => {
            outfits.extend(assemble::formal_outfits(slots, request));
            outfits.extend(assemble::business_outfits(slots, request));
        }
        Occasion::Casual | Occasion::Weekend | Occasion::Beach | Occasion::Sport => {
            outfits.extend(assemble::casual_outfits(slots, request));
            outfits.extend(assemble::smart_casual_outfits(slots, request));
        }
        Occasion::NightOut => {
            outfits.extend(assemble::night_out_outfits(slots, request));
            outfits.extend(assemble::casual_outfits(slots, request));
        }
        Occasion::Ethnic | Occasion::Wedding => {
            outfits.extend(assemble::ethnic_outfits(slots, request));
        }
    }
    outfits
}
