//! Portfolio project model.

use porto_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::Record;

/// A row from the `portfolios` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub link: String,
}

impl Record for Portfolio {
    const ENTITY: &'static str = "Portfolio";

    fn id(&self) -> DbId {
        self.id
    }

    fn set_id(&mut self, id: DbId) {
        self.id = id;
    }
}
