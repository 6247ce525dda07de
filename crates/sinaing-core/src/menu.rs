//! # Menu Catalog
//!
//! Static menu of four Filipino categories, five items each.
//!
//! | Category              | IDs   |
//! |-----------------------|-------|
//! | PAMAWING-GUTOM        | 0–4   |
//! | PANGUNAHING PAGKAIN   | 5–9   |
//! | PANGHIMAGAS           | 10–14 |
//! | PANULAK               | 15–19 |

use serde::{Deserialize, Serialize};

use crate::money::Money;

/// Item IDs run from 0 up to, not including, this value.
pub const MENU_ID_LIMIT: i64 = 20;

// =============================================================================
// Category
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    /// Appetizers.
    PamawingGutom,
    /// Main courses.
    PangunahingPagkain,
    /// Desserts.
    Panghimagas,
    /// Drinks.
    Panulak,
}

impl MenuCategory {
    /// Display order on the console.
    pub const ALL: [MenuCategory; 4] = [
        MenuCategory::PamawingGutom,
        MenuCategory::PangunahingPagkain,
        MenuCategory::Panghimagas,
        MenuCategory::Panulak,
    ];

    pub const fn name(&self) -> &'static str {
        match self {
            MenuCategory::PamawingGutom => "PAMAWING-GUTOM",
            MenuCategory::PangunahingPagkain => "PANGUNAHING PAGKAIN",
            MenuCategory::Panghimagas => "PANGHIMAGAS",
            MenuCategory::Panulak => "PANULAK",
        }
    }

    /// Exact, case-sensitive match on the printed name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    fn rows(&self) -> &'static [(i64, &'static str, i64)] {
        match self {
            MenuCategory::PamawingGutom => &[
                (0, "Calamares", 150),
                (1, "Chicharon Bulaklak", 150),
                (2, "Dynamite", 100),
                (3, "Lumpiang Shanghai", 180),
                (4, "Lumpiang Sariwa", 180),
            ],
            MenuCategory::PangunahingPagkain => &[
                (5, "Adobo", 450),
                (6, "Sinigang", 450),
                (7, "Dinuguan", 400),
                (8, "Kare Kare", 500),
                (9, "Pinakbet", 400),
            ],
            MenuCategory::Panghimagas => &[
                (10, "Sorbetes", 100),
                (11, "Halo Halo", 150),
                (12, "Leche Flan", 150),
                (13, "Buko Pandan", 100),
                (14, "Mais Con Yelo", 100),
            ],
            MenuCategory::Panulak => &[
                (15, "Sago't Gulaman", 100),
                (16, "Mango Shake", 120),
                (17, "Buko Juice", 80),
                (18, "Calamansi Juice", 80),
                (19, "Pineapple Juice", 80),
            ],
        }
    }
}

// =============================================================================
// Items
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: i64,
    pub name: String,
    pub price: Money,
}

/// The rows of one category, or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    category: Option<MenuCategory>,
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    /// Loads one of the four categories by printed name.
    ///
    /// An unknown name yields an empty catalog, not an error.
    ///
    /// ## Example
    /// ```rust
    /// use sinaing_core::menu::MenuCatalog;
    ///
    /// let drinks = MenuCatalog::load_category("PANULAK");
    /// assert_eq!(drinks.ids(), vec![15, 16, 17, 18, 19]);
    ///
    /// assert!(MenuCatalog::load_category("DESSERTS").is_empty());
    /// ```
    pub fn load_category(name: &str) -> Self {
        MenuCategory::from_name(name)
            .map(Self::for_category)
            .unwrap_or_default()
    }

    pub fn for_category(category: MenuCategory) -> Self {
        MenuCatalog {
            category: Some(category),
            items: category
                .rows()
                .iter()
                .map(|&(id, name, pesos)| MenuItem {
                    id,
                    name: name.to_string(),
                    price: Money::from_pesos(pesos),
                })
                .collect(),
        }
    }

    pub fn category(&self) -> Option<MenuCategory> {
        self.category
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// IDs for membership checks during ordering.
    pub fn ids(&self) -> Vec<i64> {
        self.items.iter().map(|item| item.id).collect()
    }

    pub fn contains(&self, id: i64) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Looks up an item in every category.
pub fn find_item(id: i64) -> Option<MenuItem> {
    MenuCategory::ALL
        .into_iter()
        .flat_map(|category| MenuCatalog::for_category(category).items)
        .find(|item| item.id == id)
}

// =============================================================================
// Unit Tests
// =============================================================================
