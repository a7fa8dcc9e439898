//! Product title categorizer.
//!
//! Tags a free-text shop result title with the fixed pet-supply categories
//! whose keywords occur in it. Matching is deliberately naive: case-sensitive
//! literal substrings with no word-boundary handling, so a keyword inside a
//! longer word still counts. Purely additive; a title can land in several
//! categories or none.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Food,
    Toy,
    Hygiene,
    Apparel,
    Walking,
    Home,
}

impl ProductCategory {
    pub const ALL: [Self; 6] =
        [Self::Food, Self::Toy, Self::Hygiene, Self::Apparel, Self::Walking, Self::Home];

    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            Self::Food => &["사료", "간식", "캔", "우유", "영양제", "껌"],
            Self::Toy => &["장난감", "토이", "노즈워크", "공", "인형"],
            Self::Hygiene => &[
                "샴푸", "브러쉬", "발톱깎이", "배변패드", "기저귀", "탈취제", "물티슈", "치약",
                "칫솔",
            ],
            Self::Apparel => &["옷", "신발", "양말", "케이프", "악세사리"],
            Self::Walking => &["목줄", "하네스", "리드줄", "이동가방", "유모차"],
            Self::Home => &["켄넬", "집", "울타리", "방석", "쿠션", "계단", "매트", "식기"],
        }
    }
}

/// Keywords found in a title, grouped per category. Empty lists are valid and
/// mean "uncategorized" for that category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductCategories {
    pub food: Vec<String>,
    pub toy: Vec<String>,
    pub hygiene: Vec<String>,
    pub apparel: Vec<String>,
    pub walking: Vec<String>,
    pub home: Vec<String>,
}

impl ProductCategories {
    fn slot_mut(&mut self, category: ProductCategory) -> &mut Vec<String> {
        match category {
            ProductCategory::Food => &mut self.food,
            ProductCategory::Toy => &mut self.toy,
            ProductCategory::Hygiene => &mut self.hygiene,
            ProductCategory::Apparel => &mut self.apparel,
            ProductCategory::Walking => &mut self.walking,
            ProductCategory::Home => &mut self.home,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.food.is_empty()
            && self.toy.is_empty()
            && self.hygiene.is_empty()
            && self.apparel.is_empty()
            && self.walking.is_empty()
            && self.home.is_empty()
    }
}

/// Tags a product title. Total: never fails, and an unmatched title returns
/// all six lists empty.
pub fn categorize_title(title: &str) -> ProductCategories {
    let mut detected = ProductCategories::default();
    for category in ProductCategory::ALL {
        let slot = detected.slot_mut(category);
        for keyword in category.keywords() {
            if title.contains(keyword) {
                slot.push((*keyword).to_string());
            }
        }
    }
    detected
}
