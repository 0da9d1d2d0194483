//! Sample catalog and starting selections for a fresh plan.

use wedplan_domain::{CatalogEntry, Category, CategoryTag, ItemId, SelectedItem};

use crate::catalog::{CatalogProvider, CatalogStore};
use crate::CoreError;

const PRESELECTED: &[(Category, ItemId)] = &[
    (Category::WeddingHall, 1),
    (Category::WeddingPhoto, 1),
    (Category::WeddingPhoto, 2),
    (Category::WeddingPhoto, 5),
    (Category::NewlywedHome, 1),
    (Category::Honeymoon, 1),
    (Category::Meeting, 3),
    (Category::Household, 1),
    (Category::Household, 2),
    (Category::Household, 10),
    (Category::WeddingDay, 1),
    (Category::WeddingDay, 2),
    (Category::WeddingDay, 3),
    (Category::WeddingDay, 4),
    (Category::WeddingDay, 5),
];

fn entries_for(category: Category) -> Vec<CatalogEntry> {
    match category {
        Category::WeddingHall => vec![
            CatalogEntry::new(1, "Grand Wedding Hall", 15_000_000, 14_500_000)
                .with_details("Gangnam, 200 guests, modern style"),
            CatalogEntry::new(2, "Royal Wedding Hall", 18_000_000, 17_800_000)
                .with_details("Seocho, 250 guests, classic style"),
        ],
        Category::Meeting => vec![
            CatalogEntry::new(1, "Home - Bride's family", 500_000, 450_000)
                .with_details("Gangnam, traditional style, hanjeongsik"),
            CatalogEntry::new(2, "Home - Groom's family", 500_000, 480_000)
                .with_details("Seocho, traditional style, hanjeongsik"),
            CatalogEntry::new(3, "Restaurant - Fine hanjeongsik", 800_000, 750_000)
                .with_details("Jung-gu, modern style, hanjeongsik"),
        ],
        Category::NewlywedHome => vec![
            CatalogEntry::new(1, "Raemian Apartment", 829_000_000, 825_000_000)
                .with_details("Bldg 101 Unit 1501, south facing, purchase"),
            CatalogEntry::new(2, "Xi Apartment", 500_000_000, 505_000_000)
                .with_details("Bldg 202 Unit 1203, east facing, jeonse lease"),
        ],
        Category::Honeymoon => vec![
            CatalogEntry::new(1, "Maldives 5N7D", 7_500_000, 7_200_000)
                .with_details("Resort, agency meeting done 25.01.20"),
            CatalogEntry::new(2, "Europe 3 countries 7N9D", 11_500_000, 11_200_000)
                .with_details("Package tour"),
            CatalogEntry::new(3, "Hawaii 4N6D", 5_800_000, 5_600_000)
                .with_details("Independent travel"),
        ],
        Category::WeddingPhoto => vec![
            CatalogEntry::new(1, "Studio - Premium Studio", 2_000_000, 1_900_000)
                .with_details("Ceremony shoot, 2 dresses, album"),
            CatalogEntry::new(2, "Hair & Makeup - Beauty Salon A", 800_000, 750_000)
                .with_details("Bridal makeup, hair styling, rehearsal"),
            CatalogEntry::new(3, "Studio - Garden Studio", 1_600_000, 1_600_000)
                .with_details("Outdoor shoot, 1 dress"),
            CatalogEntry::new(5, "Dress - Wedding Dress Shop", 1_500_000, 1_450_000)
                .with_details("1 wedding dress, 1 color dress, accessories"),
        ],
        Category::Household => vec![
            CatalogEntry::new(1, "Refrigerator - LG", 2_500_000, 2_300_000)
                .with_details("DIOS V8700, side-by-side, 870L, inverter compressor"),
            CatalogEntry::new(2, "TV - Samsung", 1_800_000, 1_700_000)
                .with_details("QLED 65 inch, 4K, HDR, smart TV"),
            CatalogEntry::new(3, "Washer - LG", 1_200_000, 1_150_000)
                .with_details("TWINWash 21kg, drum, AI DD"),
            CatalogEntry::new(5, "Vacuum - Dyson", 800_000, 750_000)
                .with_details("V15 Detect, cordless, laser dust detection"),
            CatalogEntry::new(10, "Bed - Simmons", 3_000_000, 2_800_000)
                .with_details("Beautyrest Black, king size, pocket springs"),
        ],
        Category::WeddingDay => vec![
            CatalogEntry::new(1, "Wedding attire", 1_000_000, 950_000)
                .with_details("Groom, bride, wedding hall, 2 people"),
            CatalogEntry::new(2, "Wedding song", 300_000, 250_000)
                .with_details("Friend A, friend B, wedding hall, 2 people"),
            CatalogEntry::new(3, "Master of ceremonies", 500_000, 500_000)
                .with_details("Professional MC, wedding hall, 1 person"),
            CatalogEntry::new(4, "Wedding planner", 2_000_000, 1_800_000)
                .with_details("Planner Kim, wedding hall, 1 person"),
            CatalogEntry::new(5, "Catering", 5_000_000, 4_800_000)
                .with_details("Hall catering, wedding hall, 200 people"),
            CatalogEntry::new(6, "Bouquet", 200_000, 180_000)
                .with_details("Florist, wedding hall, 1 person"),
        ],
    }
}

/// Fills an empty catalog with sample vendors for every category.
pub fn seed_catalog(catalog: &dyn CatalogStore) -> Result<(), CoreError> {
    for category in Category::ALL {
        let tag = CategoryTag::from(category);
        for entry in entries_for(category) {
            catalog.insert(&tag, entry)?;
        }
    }
    Ok(())
}

/// Snapshots of the entries a fresh plan starts with selected.
pub fn initial_selections(catalog: &dyn CatalogProvider) -> Vec<SelectedItem> {
    PRESELECTED
        .iter()
        .filter_map(|&(category, id)| {
            let tag = CategoryTag::from(category);
            catalog.entry(&tag, id).map(|entry| entry.to_selected(tag))
        })
        .collect()
}
