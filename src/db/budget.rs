use bigdecimal::BigDecimal;
use diesel::{dsl, ExpressionMethods, QueryDsl, RunQueryDsl};

use crate::db::{DaoError, DbThreadPool};
use crate::models::budget::{Budget, NewBudget};
use crate::schema::budgets as budget_fields;
use crate::schema::budgets::dsl::budgets;

pub struct Dao {
    db_thread_pool: DbThreadPool,
}

impl Dao {
    pub fn new(db_thread_pool: &DbThreadPool) -> Self {
        Self {
            db_thread_pool: db_thread_pool.clone(),
        }
    }

    /// Inserts a budget line item for an event and returns the created row.
    /// `total_cost` is stored as given; no arithmetic relationship with
    /// `item_cost` and `item_quantity` is enforced.
    pub fn create_budget(
        &self,
        item_name: &str,
        item_quantity: i32,
        item_cost: &BigDecimal,
        total_cost: &BigDecimal,
        budget_status: &str,
        event_id: i64,
    ) -> Result<Budget, DaoError> {
        let new_budget = NewBudget {
            item_name,
            item_quantity,
            item_cost,
            total_cost,
            budget_status,
            event_id,
        };

        Ok(dsl::insert_into(budgets)
            .values(&new_budget)
            .get_result::<Budget>(&mut self.db_thread_pool.get()?)?)
    }

    pub fn get_budget(&self, budget_id: i64) -> Result<Budget, DaoError> {
        Ok(budgets
            .find(budget_id)
            .get_result::<Budget>(&mut self.db_thread_pool.get()?)?)
    }

    pub fn get_budgets_for_event(&self, event_id: i64) -> Result<Vec<Budget>, DaoError> {
        Ok(budgets
            .filter(budget_fields::event_id.eq(event_id))
            .order(budget_fields::id.asc())
            .get_results::<Budget>(&mut self.db_thread_pool.get()?)?)
    }

    /// Rewrites the scalar fields of a budget. The owning event cannot be
    /// changed once a budget has been created.
    #[allow(clippy::too_many_arguments)]
    pub fn update_budget(
        &self,
        budget_id: i64,
        item_name: &str,
        item_quantity: i32,
        item_cost: &BigDecimal,
        total_cost: &BigDecimal,
        budget_status: &str,
    ) -> Result<(), DaoError> {
        let affected_rows = dsl::update(budgets.find(budget_id))
            .set((
                budget_fields::item_name.eq(item_name),
                budget_fields::item_quantity.eq(item_quantity),
                budget_fields::item_cost.eq(item_cost),
                budget_fields::total_cost.eq(total_cost),
                budget_fields::budget_status.eq(budget_status),
            ))
            .execute(&mut self.db_thread_pool.get()?)?;

        if affected_rows == 0 {
            return Err(DaoError::QueryFailure(diesel::result::Error::NotFound));
        }

        Ok(())
    }

    pub fn set_budget_status(&self, budget_id: i64, budget_status: &str) -> Result<(), DaoError> {
        let affected_rows = dsl::update(budgets.find(budget_id))
            .set(budget_fields::budget_status.eq(budget_status))
            .execute(&mut self.db_thread_pool.get()?)?;

        if affected_rows == 0 {
            return Err(DaoError::QueryFailure(diesel::result::Error::NotFound));
        }

        Ok(())
    }

    pub fn delete_budget(&self, budget_id: i64) -> Result<(), DaoError> {
        let affected_rows =
            diesel::delete(budgets.find(budget_id)).execute(&mut self.db_thread_pool.get()?)?;

        if affected_rows == 0 {
            return Err(DaoError::QueryFailure(diesel::result::Error::NotFound));
        }

        Ok(())
    }

    /// Sums `total_cost` over every budget belonging to the given event.
    /// Events with no budgets yield zero.
    pub fn get_event_total_cost(&self, event_id: i64) -> Result<BigDecimal, DaoError> {
        let total = budgets
            .filter(budget_fields::event_id.eq(event_id))
            .select(dsl::sum(budget_fields::total_cost))
            .get_result::<Option<BigDecimal>>(&mut self.db_thread_pool.get()?)?;

        Ok(total.unwrap_or_else(|| BigDecimal::from(0)))
    }
}
