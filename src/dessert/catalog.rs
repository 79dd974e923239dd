//! The dessert catalog: a fixed, ordered list of things the bakery sells.
//!
//! Items are sorted by the cumulative sale count at which they unlock. The
//! first item always unlocks at 0 so there is something to sell from the
//! very first tap.

use thiserror::Error;

/// Display reference for a dessert. The renderer owns the actual artwork.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Art {
    Cupcake,
    Donut,
    Eclair,
    Froyo,
    Gingerbread,
    Honeycomb,
    IceCreamSandwich,
    JellyBean,
    KitKat,
    Lollipop,
    Marshmallow,
    Nougat,
    Oreo,
}

/// One sellable dessert.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogItem {
    pub name: &'static str,
    /// Revenue added per sale.
    pub price: u32,
    pub art: Art,
    /// Cumulative sales at or above which this item becomes the active one.
    pub threshold: u64,
}

impl CatalogItem {
    pub const fn new(name: &'static str, price: u32, art: Art, threshold: u64) -> Self {
        Self {
            name,
            price,
            art,
            threshold,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("catalog must contain at least one item")]
    Empty,
    #[error("first item must unlock at 0 sales, got {0}")]
    FirstThresholdNotZero(u64),
    #[error("item {index} unlocks at {threshold}, below the previous item's {previous}")]
    Unsorted {
        index: usize,
        threshold: u64,
        previous: u64,
    },
    #[error("item {0} has a zero price")]
    ZeroPrice(usize),
}

const DESSERTS: &[CatalogItem] = &[
    CatalogItem::new("Cupcake", 5, Art::Cupcake, 0),
    CatalogItem::new("Donut", 10, Art::Donut, 5),
    CatalogItem::new("Eclair", 15, Art::Eclair, 20),
    CatalogItem::new("Froyo", 30, Art::Froyo, 50),
    CatalogItem::new("Gingerbread", 50, Art::Gingerbread, 100),
    CatalogItem::new("Honeycomb", 100, Art::Honeycomb, 200),
    CatalogItem::new("Ice Cream Sandwich", 500, Art::IceCreamSandwich, 500),
    CatalogItem::new("Jelly Bean", 1_000, Art::JellyBean, 1_000),
    CatalogItem::new("KitKat", 2_000, Art::KitKat, 2_000),
    CatalogItem::new("Lollipop", 3_000, Art::Lollipop, 4_000),
    CatalogItem::new("Marshmallow", 4_000, Art::Marshmallow, 8_000),
    CatalogItem::new("Nougat", 5_000, Art::Nougat, 16_000),
    CatalogItem::new("Oreo", 6_000, Art::Oreo, 20_000),
];

/// Immutable, validated list of catalog items in ascending threshold order.
#[derive(Clone, Debug)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// The built-in dessert lineup.
    pub fn desserts() -> Self {
        Self {
            items: DESSERTS.to_vec(),
        }
    }

    /// Build a custom catalog, checking the ordering invariants.
    #[allow(dead_code)] // The game ships the built-in lineup; custom ones are built in tests
    pub fn new(items: Vec<CatalogItem>) -> Result<Self, CatalogError> {
        let first = items.first().ok_or(CatalogError::Empty)?;
        if first.threshold != 0 {
            return Err(CatalogError::FirstThresholdNotZero(first.threshold));
        }
        for (index, item) in items.iter().enumerate() {
            if item.price == 0 {
                return Err(CatalogError::ZeroPrice(index));
            }
            if index > 0 && item.threshold < items[index - 1].threshold {
                return Err(CatalogError::Unsorted {
                    index,
                    threshold: item.threshold,
                    previous: items[index - 1].threshold,
                });
            }
        }
        Ok(Self { items })
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> Option<&CatalogItem> {
        self.items.get(index)
    }

    /// The fallback item. Always present because construction rejects empty lists.
    pub fn first(&self) -> &CatalogItem {
        &self.items[0]
    }
}
