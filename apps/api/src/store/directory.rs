#![allow(dead_code)]

// Directory operations: login, logout, activity stamping. There is a single
// process-wide active session; logging in replaces it.

use chrono::{DateTime, Utc};
use tracing::info;

use super::Ats;
use crate::models::Account;

impl Ats {
    /// Checks credentials against the directory (exact match on both email
    /// and password). On success stamps the account, bumps its session
    /// counter, makes it the active session, and logs the event. Returns the
    /// updated account, or `None` for any credential mismatch.
    pub fn login(
        &mut self,
        email: &str,
        password: &str,
        now: DateTime<Utc>,
    ) -> Option<Account> {
        let idx = self
            .accounts
            .iter()
            .position(|a| a.email == email && a.password == password)?;

        let (id, name) = {
            let account = &mut self.accounts[idx];
            account.last_login = now;
            account.last_action = now;
            account.total_sessions += 1;
            (account.id, account.name.clone())
        };
        self.active_id = Some(id);
        self.log_activity(&name, "logged in".to_string(), now);
        info!(account_id = id, email, "login");

        Some(self.accounts[idx].clone())
    }

    /// Ends the active session if there is one. Stamps the account's last
    /// action and logs the event; a no-op when nobody is logged in.
    pub fn logout(&mut self, now: DateTime<Utc>) {
        let id = match self.active_id.take() {
            Some(id) => id,
            None => return,
        };
        let name = match self.accounts.iter_mut().find(|a| a.id == id) {
            Some(account) => {
                account.last_action = now;
                account.name.clone()
            }
            None => return,
        };
        self.log_activity(&name, "logged out".to_string(), now);
        info!(account_id = id, "logout");
    }

    pub fn active(&self) -> Option<&Account> {
        let id = self.active_id?;
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn account(&self, id: u64) -> Option<&Account> {
        self.accounts.iter().find(|a| a.id == id)
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Moves an account's last-action timestamp forward.
    pub fn touch(&mut self, id: u64, now: DateTime<Utc>) {
        if let Some(account) = self.accounts.iter_mut().find(|a| a.id == id) {
            account.last_action = now;
        }
    }

    pub(super) fn active_name(&self) -> Option<String> {
        self.active().map(|a| a.name.clone())
    }
}
