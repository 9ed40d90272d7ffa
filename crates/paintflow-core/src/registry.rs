//! 情境登錄表
//!
//! 從 JSON 載入情境定義，格式為以情境代號為鍵的物件：
//!
//! ```json
//! {
//!   "TRUCK_STRIKE": {
//!     "name": "Truck Strike",
//!     "demand_multiplier": 1.15,
//!     "inventory_multiplier": 0.55,
//!     "affected_regions": ["North", "Central"]
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::scenario::{ScenarioDefinition, ScenarioId};
use crate::ScenarioError;

/// 情境清單項目（切換器使用）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioListing {
    pub id: ScenarioId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// 情境登錄表
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScenarioRegistry {
    scenarios: BTreeMap<ScenarioId, ScenarioDefinition>,
}

impl ScenarioRegistry {
    /// 創建空的登錄表
    pub fn new() -> Self {
        Self::default()
    }

    /// 建構器模式：登錄情境定義
    pub fn with_scenario(mut self, id: ScenarioId, definition: ScenarioDefinition) -> crate::Result<Self> {
        self.insert(id, definition)?;
        Ok(self)
    }

    /// 登錄（或取代）情境定義，登錄前先驗證
    pub fn insert(&mut self, id: ScenarioId, definition: ScenarioDefinition) -> crate::Result<()> {
        definition.validate(id)?;
        self.scenarios.insert(id, definition);
        Ok(())
    }

    /// 從 JSON 字串載入
    pub fn from_json_str(raw: &str) -> crate::Result<Self> {
        let scenarios: BTreeMap<ScenarioId, ScenarioDefinition> = serde_json::from_str(raw)?;
        for (id, definition) in &scenarios {
            definition.validate(*id)?;
        }
        Ok(Self { scenarios })
    }

    /// 從 JSON 檔案載入
    pub fn from_path(path: impl AsRef<Path>) -> crate::Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// 依代號查詢定義
    pub fn find(&self, id: ScenarioId) -> Option<&ScenarioDefinition> {
        self.scenarios.get(&id)
    }

    /// 依字串代號查詢定義（不區分大小寫）
    pub fn get(&self, raw_id: &str) -> crate::Result<&ScenarioDefinition> {
        let id: ScenarioId = raw_id.parse()?;
        self.find(id)
            .ok_or_else(|| ScenarioError::ScenarioNotFound(id.to_string()))
    }

    /// 依固定順序列出已登錄的情境
    pub fn listings(&self) -> Vec<ScenarioListing> {
        self.scenarios
            .iter()
            .map(|(id, definition)| ScenarioListing {
                id: *id,
                name: definition.name.clone(),
                description: definition.description.clone(),
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }
}
