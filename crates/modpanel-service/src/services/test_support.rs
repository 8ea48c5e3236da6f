//! In-memory repositories for service tests
//!
//! One mutex guards every table, so each repository call is atomic the same
//! way a PostgreSQL transaction is.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use sqlx::postgres::PgPoolOptions;

use modpanel_common::auth::{ApiKey, JwtService};
use modpanel_core::entities::{
    ActionLog, ActivePlayer, Ban, Moderator, NewActionLog, NewBan, NewCommand, PendingCommand,
    RosterEntry,
};
use modpanel_core::error::DomainError;
use modpanel_core::traits::{
    ActionLogRepository, BanRepository, CommandQueueRepository, ModeratorRepository,
    RepoResult, RosterRepository,
};
use modpanel_core::value_objects::{CommandId, UserId};

use super::context::{ServiceContext, ServiceContextBuilder};

pub const TEST_API_KEY: &str = "game-secret";
pub const TEST_JWT_SECRET: &str = "test-jwt-secret";

#[derive(Default)]
struct Tables {
    commands: Vec<PendingCommand>,
    bans: BTreeMap<i64, Ban>,
    logs: Vec<ActionLog>,
    players: BTreeMap<i64, ActivePlayer>,
    moderators: Vec<(Moderator, String)>,
}

impl Tables {
    fn push_command(&mut self, command: &NewCommand) -> CommandId {
        let id = CommandId::new(self.commands.len() as i64 + 1);
        self.commands.push(PendingCommand {
            id,
            user_id: command.user_id,
            action: command.action,
            reason: command.reason.clone(),
            moderator: command.moderator.clone(),
            created_at: Utc::now(),
            processed: false,
        });
        self.push_log(&command.audit_entry());
        id
    }

    fn push_log(&mut self, entry: &NewActionLog) -> i64 {
        let id = self.logs.len() as i64 + 1;
        self.logs.push(ActionLog {
            id,
            user_id: Some(entry.user_id.into_inner()),
            action: entry.action.to_string(),
            moderator: entry.moderator.clone(),
            details: entry.details.clone(),
            timestamp: Utc::now(),
        });
        id
    }

    fn upsert_ban(&mut self, ban: &NewBan) {
        let key = ban.user_id.into_inner();
        let username = ban
            .username
            .clone()
            .or_else(|| self.bans.get(&key).and_then(|b| b.username.clone()));
        self.bans.insert(
            key,
            Ban {
                user_id: ban.user_id,
                username,
                reason: ban.reason.clone(),
                banned_by: ban.banned_by.clone(),
                banned_at: Utc::now(),
            },
        );
    }
}

/// Every repository trait over one shared set of tables
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    fail_writes: Mutex<bool>,
}

impl MemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    fn check_writable(&self) -> RepoResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(DomainError::DatabaseError("connection refused".to_string()));
        }
        Ok(())
    }

    /// Make every subsequent write fail like a lost database connection
    pub fn fail_writes(&self) {
        *self.fail_writes.lock().unwrap() = true;
    }

    pub fn log_count(&self) -> usize {
        self.tables().logs.len()
    }

    pub fn command_count(&self) -> usize {
        self.tables().commands.len()
    }
}

#[async_trait]
impl CommandQueueRepository for MemoryStore {
    async fn enqueue(&self, command: &NewCommand) -> RepoResult<CommandId> {
        self.check_writable()?;
        Ok(self.tables().push_command(command))
    }

    async fn enqueue_ban(&self, command: &NewCommand, ban: &NewBan) -> RepoResult<CommandId> {
        self.check_writable()?;
        let mut tables = self.tables();
        let id = tables.push_command(command);
        tables.upsert_ban(ban);
        Ok(id)
    }

    async fn drain(&self) -> RepoResult<Vec<PendingCommand>> {
        let mut tables = self.tables();
        let mut claimed = Vec::new();
        for command in tables.commands.iter_mut().filter(|c| !c.processed) {
            command.processed = true;
            claimed.push(command.clone());
        }
        Ok(claimed)
    }

    async fn find_by_id(&self, id: CommandId) -> RepoResult<Option<PendingCommand>> {
        Ok(self.tables().commands.iter().find(|c| c.id == id).cloned())
    }

    async fn pending_count(&self) -> RepoResult<i64> {
        Ok(self.tables().commands.iter().filter(|c| !c.processed).count() as i64)
    }
}

#[async_trait]
impl BanRepository for MemoryStore {
    async fn upsert(&self, ban: &NewBan) -> RepoResult<()> {
        self.check_writable()?;
        self.tables().upsert_ban(ban);
        Ok(())
    }

    async fn remove(&self, user_id: UserId, moderator: &str) -> RepoResult<bool> {
        self.check_writable()?;
        let mut tables = self.tables();
        let removed = tables.bans.remove(&user_id.into_inner()).is_some();
        tables.push_log(&NewActionLog::unban(user_id, moderator));
        Ok(removed)
    }

    async fn find(&self, user_id: UserId) -> RepoResult<Option<Ban>> {
        Ok(self.tables().bans.get(&user_id.into_inner()).cloned())
    }

    async fn list(&self) -> RepoResult<Vec<Ban>> {
        let mut bans: Vec<Ban> = self.tables().bans.values().cloned().collect();
        bans.sort_by(|a, b| b.banned_at.cmp(&a.banned_at));
        Ok(bans)
    }
}

#[async_trait]
impl ActionLogRepository for MemoryStore {
    async fn append(&self, entry: &NewActionLog) -> RepoResult<i64> {
        self.check_writable()?;
        Ok(self.tables().push_log(entry))
    }

    async fn recent(&self, limit: i64) -> RepoResult<Vec<ActionLog>> {
        let tables = self.tables();
        Ok(tables
            .logs
            .iter()
            .rev()
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }

    async fn find_by_user(&self, user_id: UserId, limit: i64) -> RepoResult<Vec<ActionLog>> {
        let tables = self.tables();
        Ok(tables
            .logs
            .iter()
            .rev()
            .filter(|l| l.user_id == Some(user_id.into_inner()))
            .take(usize::try_from(limit).unwrap_or(0))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl RosterRepository for MemoryStore {
    async fn replace(&self, players: &[RosterEntry]) -> RepoResult<u64> {
        self.check_writable()?;
        let mut tables = self.tables();
        tables.players.clear();
        for entry in RosterEntry::dedup_last_wins(players) {
            tables.players.insert(
                entry.user_id.into_inner(),
                ActivePlayer {
                    user_id: entry.user_id,
                    name: entry.name,
                    last_seen: Utc::now(),
                },
            );
        }
        Ok(tables.players.len() as u64)
    }

    async fn list(&self) -> RepoResult<Vec<ActivePlayer>> {
        let mut players: Vec<ActivePlayer> = self.tables().players.values().cloned().collect();
        players.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(players)
    }
}

#[async_trait]
impl ModeratorRepository for MemoryStore {
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<Moderator>> {
        Ok(self
            .tables()
            .moderators
            .iter()
            .find(|(m, _)| m.username == username)
            .map(|(m, _)| m.clone()))
    }

    async fn get_password_hash(&self, username: &str) -> RepoResult<Option<String>> {
        Ok(self
            .tables()
            .moderators
            .iter()
            .find(|(m, _)| m.username == username)
            .map(|(_, hash)| hash.clone()))
    }

    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<Moderator> {
        self.check_writable()?;
        let mut tables = self.tables();
        if tables.moderators.iter().any(|(m, _)| m.username == username) {
            return Err(DomainError::ModeratorExists(username.to_string()));
        }
        let moderator = Moderator {
            id: tables.moderators.len() as i64 + 1,
            username: username.to_string(),
            created_at: Utc::now(),
        };
        tables
            .moderators
            .push((moderator.clone(), password_hash.to_string()));
        Ok(moderator)
    }

    async fn count(&self) -> RepoResult<i64> {
        Ok(self.tables().moderators.len() as i64)
    }
}

/// Context wired to a fresh in-memory store. Must run inside a tokio runtime.
pub fn memory_context() -> (ServiceContext, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::default());
    // Never connected; nothing in the services touches the pool directly.
    let pool = PgPoolOptions::new()
        .connect_lazy("postgres://localhost/modpanel_unused")
        .unwrap();

    let ctx = ServiceContextBuilder::new()
        .pool(pool)
        .command_repo(store.clone())
        .ban_repo(store.clone())
        .action_log_repo(store.clone())
        .roster_repo(store.clone())
        .moderator_repo(store.clone())
        .jwt_service(JwtService::new(TEST_JWT_SECRET, 3600))
        .api_key(ApiKey::new(TEST_API_KEY))
        .build()
        .unwrap();

    (ctx, store)
}
