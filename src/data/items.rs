#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShopItem {
    pub name: &'static str,
    pub description: &'static str,
    pub price: i32,
    pub effect: ShopEffect,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ShopEffect {
    Heal { amount: i32 },
    FullHeal,
    Sharpen { bonus: i32 },
    VigorAmulet { bonus: i32 },
    RestorePower { uses: i32 },
}

/// Fixed menu shared by every shop scene, in display order.
pub fn shop_catalogue() -> Vec<ShopItem> {
    vec![
        ShopItem::new(
            "Small potion",
            "+20 health",
            5,
            ShopEffect::Heal { amount: 20 },
        ),
        ShopItem::new("Large potion", "full health", 9, ShopEffect::FullHeal),
        ShopItem::new(
            "Whetstone",
            "+3 damage",
            8,
            ShopEffect::Sharpen { bonus: 3 },
        ),
        ShopItem::new(
            "Vigor amulet",
            "+10 max health, once",
            10,
            ShopEffect::VigorAmulet { bonus: 10 },
        ),
        ShopItem::new(
            "Power tonic",
            "tops up special power to 2 uses until your next fight",
            4,
            ShopEffect::RestorePower { uses: 2 },
        ),
    ]
}

impl ShopItem {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        price: i32,
        effect: ShopEffect,
    ) -> Self {
        Self {
            name,
            description,
            price,
            effect,
        }
    }
}
