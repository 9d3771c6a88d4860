//! Cosmetic shop: catalog items, ownership and per-category equip state.
//!
//! Invariant: at most one item per [`ItemCategory`] is equipped. `equip`
//! is the only operation that touches `equipped`, and it clears the flag on
//! every sibling before setting it on the target.

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Theme,
    Avatar,
    Music,
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 3] = [
        ItemCategory::Theme,
        ItemCategory::Avatar,
        ItemCategory::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemCategory::Theme => "theme",
            ItemCategory::Avatar => "avatar",
            ItemCategory::Music => "music",
        }
    }
}

impl std::str::FromStr for ItemCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "theme" | "themes" => Ok(ItemCategory::Theme),
            "avatar" | "avatars" => Ok(ItemCategory::Avatar),
            "music" => Ok(ItemCategory::Music),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShopItem {
    pub id: String,
    pub name: String,
    pub price: u64,
    pub category: ItemCategory,
    /// Asset reference for avatars that ship an image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub owned: bool,
    pub equipped: bool,
}

impl ShopItem {
    fn new(id: &str, name: &str, price: u64, category: ItemCategory) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            price,
            category,
            image: None,
            owned: false,
            equipped: false,
        }
    }

    fn with_image(mut self, image: &str) -> Self {
        self.image = Some(image.to_string());
        self
    }

    /// Starter items come owned and equipped.
    fn starter(mut self) -> Self {
        self.owned = true;
        self.equipped = true;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    items: Vec<ShopItem>,
}

impl Default for Catalog {
    fn default() -> Self {
        use ItemCategory::*;
        Self::new(vec![
            ShopItem::new("theme-cosmic", "Cosmic Purple", 500, Theme).starter(),
            ShopItem::new("theme-forest", "Forest Calm", 750, Theme),
            ShopItem::new("theme-ocean", "Ocean Waves", 1000, Theme),
            ShopItem::new("theme-sunset", "Golden Sunset", 1250, Theme),
            ShopItem::new("avatar-robot", "Cyber Bot", 300, Avatar)
                .with_image("avatar-robot.png")
                .starter(),
            ShopItem::new("avatar-wizard", "Wise Wizard", 400, Avatar)
                .with_image("avatar-wizard.png"),
            ShopItem::new("avatar-ninja", "Shadow Ninja", 500, Avatar),
            ShopItem::new("avatar-dragon", "Fire Dragon", 750, Avatar),
            ShopItem::new("music-lofi", "Lo-fi Beats", 200, Music).starter(),
            ShopItem::new("music-classical", "Classical Focus", 250, Music),
            ShopItem::new("music-nature", "Nature Sounds", 300, Music),
            ShopItem::new("music-electronic", "Electronic Vibes", 400, Music),
        ])
    }
}

impl Catalog {
    pub fn new(items: Vec<ShopItem>) -> Self {
        Self { items }
    }

    pub fn items(&self) -> &[ShopItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&ShopItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn items_in(&self, category: ItemCategory) -> impl Iterator<Item = &ShopItem> {
        self.items.iter().filter(move |i| i.category == category)
    }

    pub fn equipped(&self, category: ItemCategory) -> Option<&ShopItem> {
        self.items_in(category).find(|i| i.equipped)
    }

    /// Buy `id`, debiting `coins` by its price.
    ///
    /// On error neither the catalog nor `coins` is touched.
    pub fn purchase(&mut self, id: &str, coins: &mut u64) -> Result<&ShopItem, CatalogError> {
        let item = self
            .items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| CatalogError::UnknownItem(id.to_string()))?;
        if item.owned {
            return Err(CatalogError::AlreadyOwned(item.id.clone()));
        }
        if *coins < item.price {
            return Err(CatalogError::InsufficientFunds {
                item: item.id.clone(),
                price: item.price,
                balance: *coins,
            });
        }

        *coins -= item.price;
        item.owned = true;
        tracing::info!(item = %item.id, price = item.price, balance = *coins, "item purchased");
        Ok(item)
    }

    /// Make `id` the active item of its category.
    pub fn equip(&mut self, id: &str) -> Result<&ShopItem, CatalogError> {
        let index = self
            .items
            .iter()
            .position(|i| i.id == id)
            .ok_or_else(|| CatalogError::UnknownItem(id.to_string()))?;
        if !self.items[index].owned {
            return Err(CatalogError::NotOwned(id.to_string()));
        }

        let category = self.items[index].category;
        for (i, item) in self.items.iter_mut().enumerate() {
            if item.category == category {
                item.equipped = i == index;
            }
        }
        tracing::info!(item = id, category = category.as_str(), "item equipped");
        Ok(&self.items[index])
    }
}
