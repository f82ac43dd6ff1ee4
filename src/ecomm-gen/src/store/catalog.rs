use enum_iterator::Sequence;
use serde::Serialize;
use serde::Serializer;
use strum_macros::Display;

#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Display, Sequence)]
pub enum Category {
    #[strum(serialize = "Beverages")]
    Beverages,
    #[strum(serialize = "Packaged Foods & Snacks")]
    PackagedFoodsAndSnacks,
    #[strum(serialize = "Personal Care & Beauty")]
    PersonalCareAndBeauty,
    #[strum(serialize = "Household & Cleaning")]
    HouseholdAndCleaning,
    #[strum(serialize = "Health & Wellness")]
    HealthAndWellness,
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: Category,
}

const fn entry(name: &'static str, category: Category) -> CatalogEntry {
    CatalogEntry { name, category }
}

use Category::*;

/// Fast-moving consumer goods every generated product is named after.
pub const CATALOG: &[CatalogEntry] = &[
    entry("Coca-Cola Classic", Beverages),
    entry("Pepsi", Beverages),
    entry("Red Bull Energy Drink", Beverages),
    entry("Lipton Iced Tea", Beverages),
    entry("Nescafe Classic Coffee", Beverages),
    entry("Starbucks Frappuccino", Beverages),
    entry("Fiji Natural Artesian Water", Beverages),
    entry("Gatorade Thirst Quencher", Beverages),
    entry("Tropicana Pure Premium Orange Juice", Beverages),
    entry("Minute Maid Lemonade", Beverages),
    entry("Lay's Classic Potato Chips", PackagedFoodsAndSnacks),
    entry("Doritos Nacho Cheese", PackagedFoodsAndSnacks),
    entry("Kit Kat Chocolate Bar", PackagedFoodsAndSnacks),
    entry("Oreo Cookies", PackagedFoodsAndSnacks),
    entry("Pringles Original", PackagedFoodsAndSnacks),
    entry("Kellogg's Frosted Flakes", PackagedFoodsAndSnacks),
    entry("Quaker Oats Old Fashioned", PackagedFoodsAndSnacks),
    entry("Campbell's Tomato Soup", PackagedFoodsAndSnacks),
    entry("Kraft Macaroni & Cheese", PackagedFoodsAndSnacks),
    entry("Heinz Ketchup", PackagedFoodsAndSnacks),
    entry("Nutella Hazelnut Spread", PackagedFoodsAndSnacks),
    entry("Skippy Creamy Peanut Butter", PackagedFoodsAndSnacks),
    entry("Snickers Chocolate Bar", PackagedFoodsAndSnacks),
    entry("Cheerios Cereal", PackagedFoodsAndSnacks),
    entry("Tostitos Scoops Tortilla Chips", PackagedFoodsAndSnacks),
    entry("Dove Beauty Bar", PersonalCareAndBeauty),
    entry("Crest 3D White Toothpaste", PersonalCareAndBeauty),
    entry("Colgate Total Toothpaste", PersonalCareAndBeauty),
    entry("Pantene Pro-V Shampoo", PersonalCareAndBeauty),
    entry("Head & Shoulders Dandruff Shampoo", PersonalCareAndBeauty),
    entry("Axe Body Spray", PersonalCareAndBeauty),
    entry("Old Spice Deodorant", PersonalCareAndBeauty),
    entry("Gillette Mach3 Razor", PersonalCareAndBeauty),
    entry("Johnson's Baby Shampoo", PersonalCareAndBeauty),
    entry("L'Oréal Paris Elvive Shampoo", PersonalCareAndBeauty),
    entry("Nivea Crème", PersonalCareAndBeauty),
    entry("Vaseline Intensive Care Lotion", PersonalCareAndBeauty),
    entry("Tide Laundry Detergent Pods", HouseholdAndCleaning),
    entry("Clorox Bleach", HouseholdAndCleaning),
    entry("Lysol Disinfectant Spray", HouseholdAndCleaning),
    entry("Windex Glass Cleaner", HouseholdAndCleaning),
    entry("Dawn Dish Soap", HouseholdAndCleaning),
    entry("Bounty Paper Towels", HouseholdAndCleaning),
    entry("Charmin Ultra Soft Toilet Paper", HouseholdAndCleaning),
    entry("Febreze Air Freshener", HouseholdAndCleaning),
    entry("Swiffer WetJet Floor Cleaner", HouseholdAndCleaning),
    entry("Glad Tall Kitchen Trash Bags", HouseholdAndCleaning),
    entry("Mr. Clean Magic Eraser", HouseholdAndCleaning),
    entry("Advil Pain Reliever Tablets", HealthAndWellness),
    entry("Tylenol Extra Strength Caplets", HealthAndWellness),
    entry("DayQuil Cold & Flu", HealthAndWellness),
    entry("Zyrtec Allergy Tablets", HealthAndWellness),
    entry("Band-Aid Brand Adhesive Bandages", HealthAndWellness),
    entry("Pepto-Bismol Liquid", HealthAndWellness),
];

#[cfg(test)]
pub(crate) fn category_of(name: &str) -> Option<Category> {
    CATALOG.iter().find(|e| e.name == name).map(|e| e.category)
}
