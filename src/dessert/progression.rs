//! Progression engine: pure functions, fully testable.
//!
//! Which dessert is on the counter and what level the bakery is at are both
//! derived from the cumulative sale count. Nothing here mutates in place:
//! callers pass a state in and get the next one back.

use super::catalog::{Catalog, CatalogItem};

/// Sales needed per level step: level N rolls over at `N * LEVEL_STEP` sales.
pub const LEVEL_STEP: u64 = 10;

/// Upper bound for a restored progress fraction; a level is never shown full.
const MAX_PROGRESS: f64 = 1.0 - f64::EPSILON;

/// Running counters for one session.
#[derive(Clone, Debug, PartialEq)]
pub struct ProgressionState {
    total_sold: u64,
    total_revenue: u64,
    level: u32,
    active_index: usize,
    progress: f64,
}

impl ProgressionState {
    pub fn new() -> Self {
        Self {
            total_sold: 0,
            total_revenue: 0,
            level: 1,
            active_index: 0,
            progress: 0.0,
        }
    }

    /// Rebuild a state from retained counters. The active dessert is
    /// re-derived from `total_sold`; level and progress are clamped into range.
    pub fn restore(
        catalog: &Catalog,
        total_sold: u64,
        total_revenue: u64,
        level: u32,
        progress: f64,
    ) -> Self {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, MAX_PROGRESS)
        } else {
            0.0
        };
        Self {
            total_sold,
            total_revenue,
            level: level.max(1),
            active_index: active_index(catalog, total_sold),
            progress,
        }
    }

    pub fn total_sold(&self) -> u64 {
        self.total_sold
    }

    pub fn total_revenue(&self) -> u64 {
        self.total_revenue
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// Position within the current level, in `[0, 1)`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn active_item<'c>(&self, catalog: &'c Catalog) -> &'c CatalogItem {
        catalog.get(self.active_index).unwrap_or_else(|| catalog.first())
    }
}

/// What a single click did, besides producing the next state.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickOutcome {
    pub state: ProgressionState,
    /// Price of the dessert that was sold.
    pub earned: u32,
    pub leveled_up: bool,
    /// New active catalog index, if the dessert changed on this click.
    pub unlocked: Option<usize>,
}

/// Sales count at which `level` rolls over to the next one.
pub fn level_threshold(level: u32) -> u64 {
    u64::from(level).saturating_mul(LEVEL_STEP)
}

/// Index of the item with the largest threshold not exceeding `total_sold`.
///
/// Scans in catalog order and stops at the first item that is still locked.
pub fn active_index(catalog: &Catalog, total_sold: u64) -> usize {
    let mut selected = 0;
    for (index, item) in catalog.iter().enumerate() {
        if item.threshold <= total_sold {
            selected = index;
        } else {
            break;
        }
    }
    selected
}

pub fn select_active_item(catalog: &Catalog, total_sold: u64) -> &CatalogItem {
    catalog
        .get(active_index(catalog, total_sold))
        .unwrap_or_else(|| catalog.first())
}

/// Sell one dessert.
///
/// Revenue uses the dessert that was active *before* the sale. The level
/// check and the progress fraction both use the pre-click level's threshold,
/// so the click that reaches the threshold reports progress 0 in the same
/// step that raises the level.
pub fn advance_on_click(state: &ProgressionState, catalog: &Catalog) -> ClickOutcome {
    let earned = select_active_item(catalog, state.total_sold).price;
    let total_revenue = state.total_revenue.saturating_add(u64::from(earned));
    let total_sold = state.total_sold.saturating_add(1);

    let threshold = level_threshold(state.level);
    let leveled_up = total_sold >= threshold;
    let level = if leveled_up {
        state.level.saturating_add(1)
    } else {
        state.level
    };

    let new_index = active_index(catalog, total_sold);
    let unlocked = (new_index != state.active_index).then_some(new_index);

    let progress = (total_sold % threshold) as f64 / threshold as f64;

    ClickOutcome {
        state: ProgressionState {
            total_sold,
            total_revenue,
            level,
            active_index: new_index,
            progress,
        },
        earned,
        leveled_up,
        unlocked,
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::dessert::catalog::{Art, CatalogItem};
    use proptest::prelude::*;

    // ── Strategy helpers ──────────────────────────────────

    /// Ascending thresholds starting at 0, with positive prices.
    fn arb_catalog() -> impl Strategy<Value = Catalog> {
        prop::collection::vec((1u32..1_000, 0u64..50), 0..8).prop_map(|steps| {
            let mut items = vec![CatalogItem::new("base", 5, Art::Cupcake, 0)];
            let mut threshold = 0;
            for (price, gap) in steps {
                threshold += gap;
                items.push(CatalogItem::new("step", price, Art::Donut, threshold));
            }
            Catalog::new(items).unwrap()
        })
    }

    proptest! {
        #[test]
        fn prop_selected_is_largest_reachable_threshold(
            cat in arb_catalog(),
            sold in 0u64..500,
        ) {
            let picked = select_active_item(&cat, sold);
            prop_assert!(picked.threshold <= sold);
            let best = cat.iter().map(|i| i.threshold).filter(|t| *t <= sold).max().unwrap();
            prop_assert_eq!(picked.threshold, best);
        }

        #[test]
        fn prop_selection_is_monotonic(
            cat in arb_catalog(),
            a in 0u64..500,
            b in 0u64..500,
        ) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(active_index(&cat, lo) <= active_index(&cat, hi));
        }

        #[test]
        fn prop_click_adds_one_sale_and_active_price(
            cat in arb_catalog(),
            clicks in 0usize..60,
        ) {
            let mut s = ProgressionState::new();
            for _ in 0..clicks {
                s = advance_on_click(&s, &cat).state;
            }
            let price = s.active_item(&cat).price;
            let out = advance_on_click(&s, &cat);
            prop_assert_eq!(out.state.total_sold(), s.total_sold() + 1);
            prop_assert_eq!(out.state.total_revenue(), s.total_revenue() + u64::from(price));
            prop_assert_eq!(out.earned, price);
        }

        #[test]
        fn prop_level_never_decreases_and_progress_in_range(
            clicks in 1usize..300,
        ) {
            let cat = Catalog::desserts();
            let mut s = ProgressionState::new();
            for _ in 0..clicks {
                let next = advance_on_click(&s, &cat).state;
                prop_assert!(next.level() >= s.level());
                prop_assert!(next.level() <= s.level() + 1);
                prop_assert!((0.0..1.0).contains(&next.progress()));
                s = next;
            }
        }
    }
}
