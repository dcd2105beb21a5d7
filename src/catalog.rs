//! The fixed set of PG properties generated pages can recommend.
//!
//! Locations and curations reference properties by id. The table is small and
//! changes only when a property opens or closes, so it is compiled in rather
//! than loaded.

/// A PG property with a hand-written listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Property {
    pub id: &'static str,
    pub name: &'static str,
    /// Display tag: `Girls`, `Boys` or `Co-ed`.
    pub gender: &'static str,
    /// Starting monthly rent, already formatted.
    pub price: &'static str,
    pub url: &'static str,
    pub amenities: &'static [&'static str],
}

pub const PROPERTIES: &[Property] = &[
    Property {
        id: "sanvi-girls-pg",
        name: "Sanvi Girls PG",
        gender: "Girls",
        price: "₹16,899",
        url: "/pages/pg/sanvi-girls-pg.html",
        amenities: &["AC", "WiFi", "Meals", "CCTV", "Laundry"],
    },
    Property {
        id: "krishna-boys-pg",
        name: "Krishna Boys PG",
        gender: "Boys",
        price: "₹16,299",
        url: "/pages/pg/krishna-boys-pg.html",
        amenities: &["AC", "WiFi", "Meals", "CCTV", "Parking"],
    },
    Property {
        id: "swami-vivekanand-pg",
        name: "Swami Vivekanand PG",
        gender: "Co-ed",
        price: "₹17,500",
        url: "/pages/pg/swami-vivekanand-pg.html",
        amenities: &["AC", "WiFi", "Meals", "CCTV", "Smart TV"],
    },
    Property {
        id: "balaji-pg",
        name: "Balaji PG",
        gender: "Boys",
        price: "₹15,999",
        url: "/pages/pg/balaji-pg.html",
        amenities: &["AC", "WiFi", "Meals", "CCTV", "Study Desk"],
    },
    Property {
        id: "lakshmi-girls-pg",
        name: "Lakshmi Girls PG",
        gender: "Girls",
        price: "₹16,499",
        url: "/pages/pg/lakshmi-girls-pg.html",
        amenities: &["AC", "WiFi", "Meals", "CCTV", "Laundry"],
    },
];

pub fn property(id: &str) -> Option<&'static Property> {
    PROPERTIES.iter().find(|p| p.id == id)
}

/// Resolve ids in order, silently dropping unknown ones.
pub fn resolve<'a, I>(ids: I) -> Vec<&'static Property>
where
    I: IntoIterator<Item = &'a String>,
{
    ids.into_iter()
        .filter_map(|id| {
            let found = property(id);
            if found.is_none() {
                tracing::debug!(id = %id, "dropping unknown property id");
            }
            found
        })
        .collect()
}
