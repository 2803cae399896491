use bigdecimal::BigDecimal;
use diesel::{Insertable, Queryable, QueryableByName};
use serde::{Deserialize, Serialize};

use crate::models::event::Event;
use crate::schema::budgets;

/// A single line item in an event's budget. `budget_status` is a free-form
/// label; no enumeration is enforced. `total_cost` is stored as given and is
/// not required to equal `item_cost * item_quantity`.
#[derive(
    Clone, Debug, Serialize, Deserialize, Associations, Identifiable, Queryable, QueryableByName,
)]
#[diesel(belongs_to(Event, foreign_key = event_id))]
#[diesel(table_name = budgets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Budget {
    pub id: i64,
    pub item_name: String,
    pub item_quantity: i32,
    pub item_cost: BigDecimal,
    pub total_cost: BigDecimal,
    pub budget_status: String,
    pub event_id: i64,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = budgets)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewBudget<'a> {
    pub item_name: &'a str,
    pub item_quantity: i32,
    pub item_cost: &'a BigDecimal,
    pub total_cost: &'a BigDecimal,
    pub budget_status: &'a str,
    pub event_id: i64,
}
