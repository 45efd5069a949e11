//! The restaurant menu quoted to the model
//!
//! This is display data only. Prices are never summed or checked locally; the
//! model does all of that from the text rendered into the system instruction.

/// A price in cents, rendered as `12.95`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Price(u32);

impl Price {
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    pub fn cents(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// A menu line. Multiple prices are large/medium/small, in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub name: &'static str,
    pub prices: &'static [Price],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuSection {
    pub heading: &'static str,
    pub items: &'static [MenuItem],
}

/// The full menu, section by section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Menu {
    pub sections: &'static [MenuSection],
}

const fn p(cents: u32) -> Price {
    Price::from_cents(cents)
}

pub const PIZZA_MENU: Menu = Menu {
    sections: &[
        MenuSection {
            heading: "The menu includes",
            items: &[
                MenuItem {
                    name: "Pepperoni pizza",
                    prices: &[p(1295), p(1000), p(700)],
                },
                MenuItem {
                    name: "Cheese pizza",
                    prices: &[p(1095), p(925), p(650)],
                },
                MenuItem {
                    name: "Eggplant pizza",
                    prices: &[p(1195), p(975), p(675)],
                },
                MenuItem {
                    name: "Fries",
                    prices: &[p(450), p(350)],
                },
                MenuItem {
                    name: "Greek salad",
                    prices: &[p(725)],
                },
            ],
        },
        MenuSection {
            heading: "Toppings",
            items: &[
                MenuItem {
                    name: "Extra cheese",
                    prices: &[p(200)],
                },
                MenuItem {
                    name: "Mushrooms",
                    prices: &[p(150)],
                },
                MenuItem {
                    name: "Sausage",
                    prices: &[p(300)],
                },
                MenuItem {
                    name: "Canadian bacon",
                    prices: &[p(350)],
                },
                MenuItem {
                    name: "AI sauce",
                    prices: &[p(150)],
                },
                MenuItem {
                    name: "Peppers",
                    prices: &[p(100)],
                },
            ],
        },
        MenuSection {
            heading: "Drinks",
            items: &[
                MenuItem {
                    name: "Coke",
                    prices: &[p(300), p(200), p(100)],
                },
                MenuItem {
                    name: "Sprite",
                    prices: &[p(300), p(200), p(100)],
                },
                MenuItem {
                    name: "Bottled water",
                    prices: &[p(500)],
                },
            ],
        },
    ],
};

impl MenuItem {
    /// `- Fries: 4.50, 3.50`
    pub fn render(&self) -> String {
        let prices = self
            .prices
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!("- {}: {}", self.name, prices)
    }
}

impl Menu {
    /// Render as the plain-text listing embedded in the system instruction.
    /// No trailing newline.
    pub fn render(&self) -> String {
        self.sections
            .iter()
            .map(|section| {
                let mut block = format!("{}:", section.heading);
                for item in section.items {
                    block.push('\n');
                    block.push_str(&item.render());
                }
                block
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn items(&self) -> impl Iterator<Item = &MenuItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }
}
