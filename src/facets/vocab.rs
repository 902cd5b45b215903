//! Fixed facet vocabularies and label classification
//!
//! The query engine decides what an active label means by looking it up in
//! these lists, in order: the no-additive sentinel, manufacturers, genres,
//! then specific additives. The first hit wins.

use std::fmt;

/// Label emitted when the additive mode is "none"
pub const NO_ADDITIVES_LABEL: &str = "添加物なし";

/// Manufacturer value meaning "every manufacturer"
pub const ALL_MANUFACTURERS: &str = "all";

pub const MANUFACTURERS: &[&str] = &[
    "アサヒビール",
    "キリンビール",
    "サントリー",
    "サッポロビール",
    "スミノフ",
    "本条",
    "宝酒造",
    "チョーヤ",
];

pub const GENRES: &[&str] = &[
    "チューハイ",
    "カクテル",
    "ビール",
    "日本酒",
    "焼酎",
    "ワイン",
    "ウイスキー",
    "リキュール",
];

pub const ADDITIVES: &[&str] = &[
    "香料",
    "着色料",
    "保存料",
    "酸味料",
    "甘味料",
    "安定剤",
    "乳化剤",
    "増粘剤",
];

/// Which facet a label belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelClass {
    /// The `添加物なし` sentinel
    NoAdditives,
    Manufacturer,
    Genre,
    /// A specific additive substance
    Additive,
    /// Not in any vocabulary
    Unrecognized,
}

impl LabelClass {
    /// Classify a label against the fixed vocabularies
    #[must_use]
    pub fn of(label: &str) -> Self {
        if label == NO_ADDITIVES_LABEL {
            Self::NoAdditives
        } else if MANUFACTURERS.contains(&label) {
            Self::Manufacturer
        } else if GENRES.contains(&label) {
            Self::Genre
        } else if ADDITIVES.contains(&label) {
            Self::Additive
        } else {
            Self::Unrecognized
        }
    }

    /// Section heading shown next to a filter tag
    #[must_use]
    pub const fn heading(self) -> &'static str {
        match self {
            Self::NoAdditives | Self::Additive => "添加物",
            Self::Manufacturer => "メーカー",
            Self::Genre => "ジャンル",
            Self::Unrecognized => "その他",
        }
    }
}

/// One of the three selectable vocabularies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vocabulary {
    Manufacturers,
    Genres,
    Additives,
}

impl Vocabulary {
    pub const ALL: [Self; 3] = [Self::Manufacturers, Self::Genres, Self::Additives];

    /// Terms in display order
    #[must_use]
    pub const fn terms(self) -> &'static [&'static str] {
        match self {
            Self::Manufacturers => MANUFACTURERS,
            Self::Genres => GENRES,
            Self::Additives => ADDITIVES,
        }
    }

    /// Heading shown above the vocabulary
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Manufacturers => "メーカー",
            Self::Genres => "お酒のジャンル",
            Self::Additives => "添加物",
        }
    }
}

impl fmt::Display for Vocabulary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Manufacturers => "manufacturers",
            Self::Genres => "genres",
            Self::Additives => "additives",
        };
        f.write_str(name)
    }
}
