use super::*;
use test_utils::builder::TestBuilder;

mod reconcile;
mod records;

const ALICE: &str = "1|Alice|2024-01-01 00:00:00 CET";
const BOB: &str = "2|Bob|2024-01-02 00:00:00 CET";
const LEGACY: &str = "legacy_user - Joined: 2023-05-01 10:00:00 CET";
