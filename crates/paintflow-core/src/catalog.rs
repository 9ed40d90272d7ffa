//! 色卡目錄模型

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// 色系
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShadeFamily {
    Reds,
    Blues,
    Greens,
    Yellows,
    Neutrals,
    Whites,
}

impl ShadeFamily {
    pub const ALL: [ShadeFamily; 6] = [
        ShadeFamily::Reds,
        ShadeFamily::Blues,
        ShadeFamily::Greens,
        ShadeFamily::Yellows,
        ShadeFamily::Neutrals,
        ShadeFamily::Whites,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ShadeFamily::Reds => "Reds",
            ShadeFamily::Blues => "Blues",
            ShadeFamily::Greens => "Greens",
            ShadeFamily::Yellows => "Yellows",
            ShadeFamily::Neutrals => "Neutrals",
            ShadeFamily::Whites => "Whites",
        }
    }

    /// 依名稱查詢色系，未知名稱返回 `None`
    pub fn from_name(name: &str) -> Option<ShadeFamily> {
        ShadeFamily::ALL.into_iter().find(|family| family.as_str() == name)
    }
}

impl fmt::Display for ShadeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 色卡
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shade {
    #[serde(default)]
    pub shade_name: String,

    /// 色系名稱（原樣保存，未知色系不參與排序優先）
    #[serde(default)]
    pub shade_family: String,

    #[serde(default)]
    pub is_trending: bool,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Shade {
    /// 創建新的色卡
    pub fn new(shade_name: impl Into<String>, shade_family: impl Into<String>) -> Self {
        Self {
            shade_name: shade_name.into(),
            shade_family: shade_family.into(),
            is_trending: false,
            extra: Map::new(),
        }
    }

    /// 建構器模式：標記為流行色
    pub fn trending(mut self) -> Self {
        self.is_trending = true;
        self
    }

    pub fn family(&self) -> Option<ShadeFamily> {
        ShadeFamily::from_name(&self.shade_family)
    }
}
