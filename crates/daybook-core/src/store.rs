//! The record store: sole owner of the snapshot with write-through
//! persistence.

use chrono::{NaiveDate, Utc};
use tracing::{debug, warn};
use uuid::Uuid;

use daybook_domain::{
    Expense, ExpensePeriod, Group, Identifiable, Income, Investment, Loan, Reminder, SavingsGoal,
    SavingsTransaction, ShoppingItem, Snapshot,
};

use crate::{CoreError, ReminderNotifier, SnapshotStorage};

/// Owns every record collection and persists the full snapshot after each
/// mutation. There is a single writer; collaborators receive snapshots or
/// references scoped to one call.
///
/// Persistence is fail-soft in both directions: a missing or corrupt
/// document loads as empty, and a failed write keeps the in-memory state
/// authoritative for the session.
pub struct Store {
    snapshot: Snapshot,
    storage: Box<dyn SnapshotStorage>,
    notifier: Box<dyn ReminderNotifier>,
}

impl Store {
    /// Opens the store over the given backend, loading whatever snapshot is
    /// already persisted. Load failures start an empty session.
    pub fn open(storage: Box<dyn SnapshotStorage>, notifier: Box<dyn ReminderNotifier>) -> Self {
        let snapshot = match storage.load() {
            Ok(snapshot) => snapshot,
            Err(err) => {
                warn!("could not load snapshot, starting empty: {err}");
                Snapshot::default()
            }
        };
        Self {
            snapshot,
            storage,
            notifier,
        }
    }

    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    pub fn reminders(&self) -> &[Reminder] {
        &self.snapshot.reminders
    }

    pub fn groups(&self) -> &[Group] {
        &self.snapshot.groups
    }

    pub fn shopping_items(&self) -> &[ShoppingItem] {
        &self.snapshot.shopping_items
    }

    pub fn periods(&self) -> &[ExpensePeriod] {
        &self.snapshot.periods
    }

    pub fn goals(&self) -> &[SavingsGoal] {
        &self.snapshot.goals
    }

    pub fn investments(&self) -> &[Investment] {
        &self.snapshot.investments
    }

    pub fn loans(&self) -> &[Loan] {
        &self.snapshot.loans
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.snapshot.expenses
    }

    /// Writes the current snapshot through to storage. Failures are logged
    /// and the in-memory state stands; the next mutation retries.
    fn persist(&self) {
        if let Err(err) = self.storage.save(&self.snapshot) {
            warn!("could not persist snapshot, keeping in-memory state: {err}");
        }
    }

    fn require_group(&self, group_id: Option<Uuid>) -> Result<(), CoreError> {
        match group_id {
            Some(id) if !self.snapshot.groups.iter().any(|group| group.id == id) => {
                Err(CoreError::UnknownGroup(id))
            }
            _ => Ok(()),
        }
    }

    // ----- reminders -----

    pub fn add_reminder(&mut self, reminder: Reminder) -> Result<(), CoreError> {
        self.require_group(reminder.group_id)?;
        self.snapshot.reminders.push(reminder);
        self.persist();
        Ok(())
    }

    pub fn update_reminder(&mut self, reminder: Reminder) -> Result<(), CoreError> {
        self.require_group(reminder.group_id)?;
        if !replace_by_id(&mut self.snapshot.reminders, reminder.clone()) {
            return Err(CoreError::ReminderNotFound(reminder.id));
        }
        self.persist();
        Ok(())
    }

    /// Removes a reminder and cancels any alert still pending for it.
    pub fn remove_reminder(&mut self, id: Uuid) -> Result<(), CoreError> {
        let removed =
            remove_by_id(&mut self.snapshot.reminders, id).ok_or(CoreError::ReminderNotFound(id))?;
        if let Some(notification_ref) = removed.notification_ref.as_deref() {
            self.notifier.cancel(notification_ref);
        }
        self.persist();
        Ok(())
    }

    /// Flips completion. Completing a reminder stamps the completion date
    /// and cancels its pending alert; un-completing clears the stamp.
    pub fn toggle_reminder_completion(&mut self, id: Uuid) -> Result<(), CoreError> {
        let notifier = &self.notifier;
        let reminder = self
            .snapshot
            .reminders
            .iter_mut()
            .find(|reminder| reminder.id == id)
            .ok_or(CoreError::ReminderNotFound(id))?;

        reminder.is_completed = !reminder.is_completed;
        if reminder.is_completed {
            reminder.completed_date = Some(Utc::now());
            if let Some(notification_ref) = reminder.notification_ref.take() {
                notifier.cancel(&notification_ref);
            }
        } else {
            reminder.completed_date = None;
        }
        self.persist();
        Ok(())
    }

    /// Asks the notifier for an alert at the reminder's due date, replacing
    /// any previously scheduled one, and keeps the returned reference.
    pub fn schedule_reminder(&mut self, id: Uuid) -> Result<(), CoreError> {
        let notifier = &self.notifier;
        let reminder = self
            .snapshot
            .reminders
            .iter_mut()
            .find(|reminder| reminder.id == id)
            .ok_or(CoreError::ReminderNotFound(id))?;
        let due_date = reminder
            .due_date
            .ok_or_else(|| CoreError::Validation("reminder has no due date".into()))?;

        if let Some(old_ref) = reminder.notification_ref.take() {
            notifier.cancel(&old_ref);
        }
        let body = reminder.notes.as_deref().unwrap_or("You have a reminder");
        let notification_ref = notifier.schedule(reminder.id, &reminder.title, body, due_date);
        reminder.notification_ref = Some(notification_ref);
        self.persist();
        Ok(())
    }

    // ----- groups -----

    pub fn add_group(&mut self, group: Group) -> Result<(), CoreError> {
        if group.title.trim().is_empty() {
            return Err(CoreError::Validation("group title must not be empty".into()));
        }
        self.snapshot.groups.push(group);
        self.persist();
        Ok(())
    }

    pub fn update_group(&mut self, group: Group) -> Result<(), CoreError> {
        if group.title.trim().is_empty() {
            return Err(CoreError::Validation("group title must not be empty".into()));
        }
        if !replace_by_id(&mut self.snapshot.groups, group.clone()) {
            return Err(CoreError::GroupNotFound(group.id));
        }
        self.persist();
        Ok(())
    }

    /// Deletes a group and cascades to every reminder referencing it, so no
    /// dangling group ids survive. Pending alerts of removed reminders are
    /// cancelled.
    pub fn delete_group(&mut self, id: Uuid) -> Result<(), CoreError> {
        if remove_by_id(&mut self.snapshot.groups, id).is_none() {
            return Err(CoreError::GroupNotFound(id));
        }
        let notifier = &self.notifier;
        let before = self.snapshot.reminders.len();
        self.snapshot.reminders.retain(|reminder| {
            if reminder.group_id == Some(id) {
                if let Some(notification_ref) = reminder.notification_ref.as_deref() {
                    notifier.cancel(notification_ref);
                }
                false
            } else {
                true
            }
        });
        debug!(
            group = %id,
            removed = before - self.snapshot.reminders.len(),
            "cascade-deleted reminders with group"
        );
        self.persist();
        Ok(())
    }

    // ----- shopping items -----

    pub fn add_shopping_item(&mut self, item: ShoppingItem) -> Result<(), CoreError> {
        if item.quantity == 0 {
            return Err(CoreError::Validation("quantity must be at least one".into()));
        }
        self.snapshot.shopping_items.push(item);
        self.persist();
        Ok(())
    }

    pub fn update_shopping_item(&mut self, item: ShoppingItem) -> Result<(), CoreError> {
        if item.quantity == 0 {
            return Err(CoreError::Validation("quantity must be at least one".into()));
        }
        if !replace_by_id(&mut self.snapshot.shopping_items, item.clone()) {
            return Err(CoreError::ShoppingItemNotFound(item.id));
        }
        self.persist();
        Ok(())
    }

    pub fn remove_shopping_item(&mut self, id: Uuid) -> Result<(), CoreError> {
        remove_by_id(&mut self.snapshot.shopping_items, id)
            .ok_or(CoreError::ShoppingItemNotFound(id))?;
        self.persist();
        Ok(())
    }

    pub fn toggle_shopping_item(&mut self, id: Uuid) -> Result<(), CoreError> {
        let item = self
            .snapshot
            .shopping_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::ShoppingItemNotFound(id))?;
        item.is_completed = !item.is_completed;
        self.persist();
        Ok(())
    }

    pub fn archive_shopping_item(&mut self, id: Uuid) -> Result<(), CoreError> {
        let item = self
            .snapshot
            .shopping_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::ShoppingItemNotFound(id))?;
        item.is_archived = true;
        item.archived_date = Some(Utc::now());
        self.persist();
        Ok(())
    }

    pub fn unarchive_shopping_item(&mut self, id: Uuid) -> Result<(), CoreError> {
        let item = self
            .snapshot
            .shopping_items
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(CoreError::ShoppingItemNotFound(id))?;
        item.is_archived = false;
        item.archived_date = None;
        self.persist();
        Ok(())
    }

    // ----- expense periods -----

    /// Newest periods go to the front so the fallback "first period is
    /// current" matches most-recently-created.
    pub fn add_period(&mut self, period: ExpensePeriod) -> Result<(), CoreError> {
        if period.end_date <= period.start_date {
            return Err(CoreError::Validation(
                "period end date must be after start date".into(),
            ));
        }
        self.snapshot.periods.insert(0, period);
        self.persist();
        Ok(())
    }

    pub fn remove_period(&mut self, id: Uuid) -> Result<(), CoreError> {
        remove_by_id(&mut self.snapshot.periods, id).ok_or(CoreError::PeriodNotFound(id))?;
        self.persist();
        Ok(())
    }

    /// The period whose date range contains `today`; when none matches, the
    /// first period in the list (the most recently created one).
    pub fn active_period(&self, today: NaiveDate) -> Option<&ExpensePeriod> {
        self.snapshot
            .periods
            .iter()
            .find(|period| period.contains(today))
            .or_else(|| self.snapshot.periods.first())
    }

    fn active_period_index(&self, today: NaiveDate) -> Result<usize, CoreError> {
        if let Some(index) = self
            .snapshot
            .periods
            .iter()
            .position(|period| period.contains(today))
        {
            return Ok(index);
        }
        if self.snapshot.periods.is_empty() {
            return Err(CoreError::NoActivePeriod);
        }
        Ok(0)
    }

    pub fn add_income(&mut self, income: Income) -> Result<(), CoreError> {
        let index = self.active_period_index(Utc::now().date_naive())?;
        self.snapshot.periods[index].incomes.push(income);
        self.persist();
        Ok(())
    }

    pub fn add_expense(&mut self, expense: Expense) -> Result<(), CoreError> {
        let index = self.active_period_index(Utc::now().date_naive())?;
        self.snapshot.periods[index].expenses.push(expense);
        self.persist();
        Ok(())
    }

    pub fn remove_income(&mut self, period_id: Uuid, income_id: Uuid) -> Result<(), CoreError> {
        let period = self
            .snapshot
            .periods
            .iter_mut()
            .find(|period| period.id == period_id)
            .ok_or(CoreError::PeriodNotFound(period_id))?;
        let before = period.incomes.len();
        period.incomes.retain(|income| income.id != income_id);
        if period.incomes.len() == before {
            return Err(CoreError::Validation("income not found in period".into()));
        }
        self.persist();
        Ok(())
    }

    pub fn remove_expense(&mut self, period_id: Uuid, expense_id: Uuid) -> Result<(), CoreError> {
        let period = self
            .snapshot
            .periods
            .iter_mut()
            .find(|period| period.id == period_id)
            .ok_or(CoreError::PeriodNotFound(period_id))?;
        let before = period.expenses.len();
        period.expenses.retain(|expense| expense.id != expense_id);
        if period.expenses.len() == before {
            return Err(CoreError::Validation("expense not found in period".into()));
        }
        self.persist();
        Ok(())
    }

    /// Appends to the standalone expense log kept outside any period.
    pub fn record_expense(&mut self, expense: Expense) {
        self.snapshot.expenses.push(expense);
        self.persist();
    }

    pub fn remove_expense_record(&mut self, id: Uuid) -> Result<(), CoreError> {
        remove_by_id(&mut self.snapshot.expenses, id)
            .ok_or_else(|| CoreError::Validation("expense record not found".into()))?;
        self.persist();
        Ok(())
    }

    // ----- savings goals -----

    pub fn add_goal(&mut self, goal: SavingsGoal) -> Result<(), CoreError> {
        self.snapshot.goals.push(goal);
        self.persist();
        Ok(())
    }

    pub fn update_goal(&mut self, goal: SavingsGoal) -> Result<(), CoreError> {
        if !replace_by_id(&mut self.snapshot.goals, goal.clone()) {
            return Err(CoreError::GoalNotFound(goal.id));
        }
        self.persist();
        Ok(())
    }

    pub fn remove_goal(&mut self, id: Uuid) -> Result<(), CoreError> {
        remove_by_id(&mut self.snapshot.goals, id).ok_or(CoreError::GoalNotFound(id))?;
        self.persist();
        Ok(())
    }

    /// Applies a deposit or withdrawal to a goal. Withdrawals past zero are
    /// rejected without mutating.
    pub fn apply_goal_transaction(
        &mut self,
        goal_id: Uuid,
        transaction: SavingsTransaction,
    ) -> Result<(), CoreError> {
        let goal = self
            .snapshot
            .goals
            .iter_mut()
            .find(|goal| goal.id == goal_id)
            .ok_or(CoreError::GoalNotFound(goal_id))?;
        if goal.current_amount + transaction.amount < 0.0 {
            return Err(CoreError::Validation(
                "withdrawal exceeds current amount".into(),
            ));
        }
        goal.apply(transaction);
        self.persist();
        Ok(())
    }

    // ----- investments -----

    pub fn add_investment(&mut self, investment: Investment) -> Result<(), CoreError> {
        self.snapshot.investments.push(investment);
        self.persist();
        Ok(())
    }

    pub fn update_investment(&mut self, investment: Investment) -> Result<(), CoreError> {
        if !replace_by_id(&mut self.snapshot.investments, investment.clone()) {
            return Err(CoreError::InvestmentNotFound(investment.id));
        }
        self.persist();
        Ok(())
    }

    pub fn remove_investment(&mut self, id: Uuid) -> Result<(), CoreError> {
        remove_by_id(&mut self.snapshot.investments, id)
            .ok_or(CoreError::InvestmentNotFound(id))?;
        self.persist();
        Ok(())
    }

    pub fn update_investment_value(
        &mut self,
        id: Uuid,
        current_value: f64,
    ) -> Result<(), CoreError> {
        let investment = self
            .snapshot
            .investments
            .iter_mut()
            .find(|investment| investment.id == id)
            .ok_or(CoreError::InvestmentNotFound(id))?;
        investment.current_value = current_value;
        self.persist();
        Ok(())
    }

    // ----- loans -----

    pub fn add_loan(&mut self, loan: Loan) -> Result<(), CoreError> {
        if loan.end_date <= loan.start_date {
            return Err(CoreError::Validation(
                "loan end date must be after start date".into(),
            ));
        }
        self.snapshot.loans.push(loan);
        self.persist();
        Ok(())
    }

    pub fn update_loan(&mut self, loan: Loan) -> Result<(), CoreError> {
        if !replace_by_id(&mut self.snapshot.loans, loan.clone()) {
            return Err(CoreError::LoanNotFound(loan.id));
        }
        self.persist();
        Ok(())
    }

    pub fn remove_loan(&mut self, id: Uuid) -> Result<(), CoreError> {
        remove_by_id(&mut self.snapshot.loans, id).ok_or(CoreError::LoanNotFound(id))?;
        self.persist();
        Ok(())
    }

    /// Pays down a loan. Payments must be positive and may never push the
    /// remaining balance below zero; rejected payments leave the loan
    /// untouched.
    pub fn make_loan_payment(&mut self, id: Uuid, payment: f64) -> Result<(), CoreError> {
        let loan = self
            .snapshot
            .loans
            .iter_mut()
            .find(|loan| loan.id == id)
            .ok_or(CoreError::LoanNotFound(id))?;
        if payment <= 0.0 {
            return Err(CoreError::Validation("payment must be positive".into()));
        }
        if payment > loan.remaining_amount {
            return Err(CoreError::PaymentExceedsBalance {
                payment,
                remaining: loan.remaining_amount,
            });
        }
        loan.remaining_amount -= payment;
        self.persist();
        Ok(())
    }

    // ----- lifecycle -----

    /// Clears every collection and persists the empty snapshot. Pending
    /// alerts are cancelled first so no stale reminder can fire afterwards.
    pub fn reset_all(&mut self) {
        self.notifier.cancel_all();
        self.snapshot = Snapshot::default();
        debug!("reset all collections");
        self.persist();
    }
}

fn replace_by_id<T: Identifiable>(items: &mut [T], updated: T) -> bool {
    match items.iter_mut().find(|item| item.id() == updated.id()) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

fn remove_by_id<T: Identifiable>(items: &mut Vec<T>, id: Uuid) -> Option<T> {
    let index = items.iter().position(|item| item.id() == id)?;
    Some(items.remove(index))
}
