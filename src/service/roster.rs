use chrono::{DateTime, Utc};

use crate::{
    data::roster::{RosterStore, RosterSweep},
    error::AppError,
    model::roster::LiveMember,
    util::time::RosterClock,
};

pub struct RosterService<'a> {
    store: &'a RosterStore,
    clock: &'a RosterClock,
}

impl<'a> RosterService<'a> {
    pub fn new(store: &'a RosterStore, clock: &'a RosterClock) -> Self {
        Self { store, clock }
    }

    /// Records every live member missing from the roster, stamped with the current time
    ///
    /// Used by the startup sweep and the scheduled sweep to catch joins that happened
    /// while the bot was offline. Members who left after `sweep` began are not added
    /// back.
    ///
    /// # Arguments
    /// - `sweep`: Sweep begun before `members` were fetched
    /// - `members`: Live members of all guilds the bot is in
    ///
    /// # Returns
    /// - `Ok(usize)`: Number of members added to the roster
    /// - `Err(AppError::RosterErr)`: Roster could not be read or written
    pub async fn sync_members(
        &self,
        sweep: &RosterSweep<'_>,
        members: &[LiveMember],
    ) -> Result<usize, AppError> {
        self.sync_members_at(sweep, members, Utc::now()).await
    }

    /// Same as [`Self::sync_members`] with an explicit sweep time.
    pub async fn sync_members_at(
        &self,
        sweep: &RosterSweep<'_>,
        members: &[LiveMember],
        at: DateTime<Utc>,
    ) -> Result<usize, AppError> {
        let as_of = self.clock.stamp(at);

        tracing::debug!(
            "Reconciling {} live members against roster {}",
            members.len(),
            self.store.path().display()
        );

        let added = self.store.reconcile(sweep, members, &as_of).await?;

        if added > 0 {
            tracing::info!("Added {} missing member(s) to roster", added);
        } else {
            tracing::debug!("Roster already lists every live member");
        }

        Ok(added)
    }

    /// Records a member who just joined a guild
    ///
    /// Bot accounts are not recorded, matching the sweep.
    ///
    /// # Returns
    /// - `Ok(true)`: A record was appended
    /// - `Ok(false)`: The member is a bot and was skipped
    /// - `Err(AppError::RosterErr)`: Roster could not be appended to
    pub async fn record_join(&self, member: &LiveMember) -> Result<bool, AppError> {
        self.record_join_at(member, Utc::now()).await
    }

    pub async fn record_join_at(
        &self,
        member: &LiveMember,
        at: DateTime<Utc>,
    ) -> Result<bool, AppError> {
        if member.is_bot {
            tracing::debug!("Not recording bot account {} in roster", member.id);
            return Ok(false);
        }

        self.store
            .append(member.id, &member.display_name, &self.clock.stamp(at))
            .await?;

        tracing::info!(
            "Recorded member {} ({}) in roster",
            member.display_name,
            member.id
        );

        Ok(true)
    }

    /// Removes every roster record of a member who left a guild.
    ///
    /// Returns the number of records removed; a member without a record is not an
    /// error.
    pub async fn record_leave(&self, member_id: u64) -> Result<usize, AppError> {
        let removed = self.store.remove(member_id).await?;

        match removed.first().and_then(|line| line.display_name()) {
            Some(display_name) => tracing::info!(
                "Removed {} roster record(s) of member {} ({})",
                removed.len(),
                display_name,
                member_id
            ),
            None => tracing::debug!("Member {} left but had no roster record", member_id),
        }

        Ok(removed.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use test_utils::builder::TestBuilder;

    fn clock() -> RosterClock {
        RosterClock::new(chrono_tz::Europe::Berlin, "CET")
    }

    fn sweep_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap()
    }

    /// Tests a sweep against a roster that already knows Alice.
    ///
    /// Verifies the sweep time is rendered in the roster zone with its label.
    ///
    /// Expected: Ok(1) with Bob appended at 12:00 local time
    #[tokio::test]
    async fn sync_appends_missing_members() {
        let test = TestBuilder::new()
            .with_roster_line("1|Alice|2024-01-01 00:00:00 CET")
            .build()
            .unwrap();
        let store = RosterStore::new(test.roster_path());
        let clock = clock();
        let service = RosterService::new(&store, &clock);

        let added = service
            .sync_members_at(
                &store.begin_sweep(),
                &[
                    LiveMember::new(1, "Alice", false),
                    LiveMember::new(2, "Bob", false),
                ],
                sweep_time(),
            )
            .await
            .unwrap();

        assert_eq!(added, 1);
        assert_eq!(
            test.roster_lines().unwrap(),
            vec![
                "1|Alice|2024-01-01 00:00:00 CET".to_string(),
                "2|Bob|2024-06-01 12:00:00 CET".to_string()
            ]
        );
    }

    /// Tests a leave handled while a sweep is fetching live members.
    ///
    /// Verifies the member list fetched before the leave does not bring the departed
    /// member back.
    ///
    /// Expected: Ok(0) with only Alice left in the roster
    #[tokio::test]
    async fn sync_does_not_restore_member_who_left_mid_sweep() {
        let test = TestBuilder::new()
            .with_roster_lines([
                "1|Alice|2024-01-01 00:00:00 CET",
                "2|Bob|2024-01-02 00:00:00 CET",
            ])
            .build()
            .unwrap();
        let store = RosterStore::new(test.roster_path());
        let clock = clock();
        let service = RosterService::new(&store, &clock);

        let sweep = store.begin_sweep();
        let fetched = [
            LiveMember::new(1, "Alice", false),
            LiveMember::new(2, "Bob", false),
        ];
        service.record_leave(2).await.unwrap();
        let added = service
            .sync_members_at(&sweep, &fetched, sweep_time())
            .await
            .unwrap();

        assert_eq!(added, 0);
        assert_eq!(
            test.roster_lines().unwrap(),
            vec!["1|Alice|2024-01-01 00:00:00 CET".to_string()]
        );
    }

    /// Tests recording a human member join.
    ///
    /// Expected: Ok(true) with one record appended
    #[tokio::test]
    async fn join_appends_record() {
        let test = TestBuilder::new().build().unwrap();
        let store = RosterStore::new(test.roster_path());
        let clock = clock();
        let service = RosterService::new(&store, &clock);

        let recorded = service
            .record_join_at(&LiveMember::new(3, "Carol", false), sweep_time())
            .await
            .unwrap();

        assert!(recorded);
        assert_eq!(
            test.roster_lines().unwrap(),
            vec!["3|Carol|2024-06-01 12:00:00 CET".to_string()]
        );
    }

    /// Tests that bot joins are not recorded.
    ///
    /// Expected: Ok(false) and no roster file created
    #[tokio::test]
    async fn join_skips_bots() {
        let test = TestBuilder::new().build().unwrap();
        let store = RosterStore::new(test.roster_path());
        let clock = clock();
        let service = RosterService::new(&store, &clock);

        let recorded = service
            .record_join(&LiveMember::new(4, "HelperBot", true))
            .await
            .unwrap();

        assert!(!recorded);
        assert!(!test.roster_exists());
    }

    /// Tests recording a leave for a member with a record and one without.
    ///
    /// Expected: Ok(1) then Ok(0), legacy line untouched
    #[tokio::test]
    async fn leave_removes_record() {
        let test = TestBuilder::new()
            .with_roster_lines(["old_name", "1|Alice|2024-01-01 00:00:00 CET"])
            .build()
            .unwrap();
        let store = RosterStore::new(test.roster_path());
        let clock = clock();
        let service = RosterService::new(&store, &clock);

        assert_eq!(service.record_leave(1).await.unwrap(), 1);
        assert_eq!(service.record_leave(1).await.unwrap(), 0);
        assert_eq!(test.roster_lines().unwrap(), vec!["old_name".to_string()]);
    }

    /// Tests that a roster I/O failure surfaces as an application error.
    ///
    /// Expected: Err(AppError::RosterErr)
    #[tokio::test]
    async fn roster_failure_is_propagated() {
        let test = TestBuilder::new().build().unwrap();
        let store = RosterStore::new(test.dir());
        let clock = clock();
        let service = RosterService::new(&store, &clock);

        let result = service
            .sync_members(&store.begin_sweep(), &[LiveMember::new(1, "Alice", false)])
            .await;

        assert!(matches!(result, Err(AppError::RosterErr(_))));
    }
}
