use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use crate::schema::categories;

/// A node in the category tree. `parent_id` is a plain back-reference;
/// a category never owns its parent.
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Selectable, Identifiable)]
#[diesel(table_name = categories)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = categories)]
pub struct NewCategory {
    pub name: String,
    pub parent_id: Option<i64>,
}
