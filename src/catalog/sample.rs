//! Built-in sample catalog
//!
//! Eight reference products used when no catalog file is configured.

use super::types::Product;

struct Entry {
    id: &'static str,
    name: &'static str,
    brand: &'static str,
    alcohol_content: &'static str,
    category: &'static str,
    allergens: &'static [&'static str],
    description: &'static str,
    rating: f64,
    review_count: u32,
}

const ENTRIES: &[Entry] = &[
    Entry {
        id: "1",
        name: "アサヒスーパードライ",
        brand: "アサヒビール",
        alcohol_content: "5.0%",
        category: "ビール",
        allergens: &["大麦", "ホップ", "米"],
        description: "キレの良い辛口ビール。すっきりとした後味。",
        rating: 4.2,
        review_count: 245,
    },
    Entry {
        id: "2",
        name: "スミノフアイス ワイルドグレープ",
        brand: "スミノフ",
        alcohol_content: "4.0%",
        category: "カクテル",
        allergens: &["糖類", "香料", "酸味料", "着色料"],
        description: "グレープの爽やかな風味。甘酸っぱい味わい。",
        rating: 3.8,
        review_count: 189,
    },
    Entry {
        id: "3",
        name: "ほろよい 白いサワー",
        brand: "サントリー",
        alcohol_content: "3.0%",
        category: "チューハイ",
        allergens: &["糖類", "酸味料", "香料"],
        description: "まろやかで飲みやすい。低アルコールでやさしい味。",
        rating: 4.1,
        review_count: 312,
    },
    Entry {
        id: "4",
        name: "ほろよい ハピクルサワー",
        brand: "サントリー",
        alcohol_content: "3.0%",
        category: "チューハイ",
        allergens: &["糖類", "酸味料", "香料", "乳酸"],
        description: "乳酸菌飲料のような爽やかな酸味とまろやかさ。",
        rating: 3.9,
        review_count: 156,
    },
    Entry {
        id: "5",
        name: "本条の檸檬酒 オリジナルレモンサワー",
        brand: "本条",
        alcohol_content: "7.0%",
        category: "レモンサワー",
        allergens: &["レモン果汁", "糖類", "酸味料"],
        description: "瀬戸内産レモンを使用。本格的な酸味とキレ。",
        rating: 4.3,
        review_count: 98,
    },
    Entry {
        id: "6",
        name: "本条の檸檬酒 ブルーベリーサワー",
        brand: "本条",
        alcohol_content: "7.0%",
        category: "フルーツサワー",
        allergens: &["ブルーベリー果汁", "糖類", "酸味料"],
        description: "ブルーベリーの甘酸っぱさが楽しめるサワー",
        rating: 4.0,
        review_count: 76,
    },
    Entry {
        id: "7",
        name: "アサヒ 贅沢搾り グレープフルーツ",
        brand: "アサヒ",
        alcohol_content: "4.0%",
        category: "チューハイ",
        allergens: &["グレープフルーツ果汁", "糖類"],
        description: "贅沢に搾ったグレープフルーツの果汁感",
        rating: 4.1,
        review_count: 167,
    },
    Entry {
        id: "8",
        name: "スミノフアイス",
        brand: "スミノフ",
        alcohol_content: "4.0%",
        category: "カクテル",
        allergens: &["糖類", "香料"],
        description: "プレミアムウォッカベースのアイスカクテル",
        rating: 3.7,
        review_count: 203,
    },
];

/// The sample products, in catalog order
#[must_use]
pub fn sample_products() -> Vec<Product> {
    ENTRIES
        .iter()
        .map(|e| Product {
            alcohol_content: e.alcohol_content.to_string(),
            description: e.description.to_string(),
            image: "/placeholder.svg".to_string(),
            rating: e.rating,
            review_count: e.review_count,
            ..Product::new(
                e.id,
                e.name,
                e.brand,
                e.category,
                e.allergens.iter().map(|a| (*a).to_string()).collect(),
            )
        })
        .collect()
}
