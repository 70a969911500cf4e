//! Mock lookup - Deterministic fake profiles for hosts without outbound access

use async_trait::async_trait;

use crate::application::errors::LookupError;
use crate::domain::entities::LookupProfile;
use crate::domain::traits::LookupAdapter;

const SEED_MODULUS: u64 = 1000;

const USERNAMES: &[&str] = &[
    "ShadowHunter",
    "DragonSlayer",
    "MysticBlade",
    "StormRider",
    "PhoenixFire",
    "IronWolf",
    "NightFury",
    "ThunderStrike",
    "FrostQueen",
    "SilentArrow",
];

const RANKS: &[&str] = &[
    "Warrior",
    "Elite",
    "Master",
    "Grandmaster",
    "Epic",
    "Legend",
    "Mythic",
    "Mythical Glory",
];

const HEROES: &[&str] = &[
    "Layla",
    "Miya",
    "Alucard",
    "Tigreal",
    "Eudora",
    "Zilong",
    "Gusion",
    "Fanny",
    "Chou",
    "Kagura",
    "Lancelot",
    "Franco",
];

/// Profiles derived from the user id alone.
///
/// The seed is `user_id mod 1000`, so ids 1000 apart produce the same profile.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockLookup;

impl MockLookup {
    pub fn new() -> Self {
        Self
    }

    /// Numeric ids use their value; anything else falls back to a byte sum
    pub fn seed(user_id: &str) -> u64 {
        match user_id.parse::<u64>() {
            Ok(n) => n % SEED_MODULUS,
            Err(_) => user_id.bytes().map(u64::from).sum::<u64>() % SEED_MODULUS,
        }
    }

    pub fn profile(user_id: &str, zone_id: &str) -> LookupProfile {
        let seed = Self::seed(user_id);
        let pick = |pool: &[&str]| pool[(seed % pool.len() as u64) as usize].to_string();

        let mut profile = LookupProfile::new(user_id, zone_id, pick(USERNAMES));
        profile.level = Some(10 + (seed % 91) as u32);
        profile.rank = Some(pick(RANKS));
        profile.hero = Some(pick(HEROES));
        profile.win_rate = Some(45.0 + (seed % 200) as f32 / 10.0);
        profile.matches = Some(150 + (seed * 7) as u32);
        profile
    }
}

#[async_trait]
impl LookupAdapter for MockLookup {
    fn name(&self) -> &str {
        "mock"
    }

    async fn lookup(&self, user_id: &str, zone_id: &str) -> Result<LookupProfile, LookupError> {
        Ok(Self::profile(user_id, zone_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn same_input_same_profile() {
        let lookup = MockLookup::new();
        let first = lookup.lookup("123456789", "2001").await.unwrap();
        let second = lookup.lookup("123456789", "2001").await.unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn ids_a_modulus_apart_collide() {
        let low = MockLookup::profile("4242", "1");
        let high = MockLookup::profile("5242", "1");

        assert_eq!(MockLookup::seed("4242"), MockLookup::seed("5242"));
        assert_eq!(low.nickname, high.nickname);
        assert_eq!(low.level, high.level);
        assert_eq!(low.rank, high.rank);
        assert_eq!(low.hero, high.hero);
        assert_eq!(low.win_rate, high.win_rate);
        assert_eq!(low.matches, high.matches);
    }

    #[test]
    fn stats_follow_the_seed() {
        let profile = MockLookup::profile("1999", "9");

        assert_eq!(MockLookup::seed("1999"), 999);
        assert_eq!(profile.zone_id, "9");
        assert_eq!(profile.nickname, USERNAMES[9]);
        assert_eq!(profile.level, Some(10 + 999 % 91));
        assert_eq!(profile.rank.as_deref(), Some(RANKS[999 % 8]));
        assert_eq!(profile.hero.as_deref(), Some(HEROES[999 % 12]));
        assert_eq!(profile.win_rate, Some(45.0 + 199.0 / 10.0));
        assert_eq!(profile.matches, Some(150 + 999 * 7));
    }

    #[test]
    fn non_numeric_ids_still_resolve() {
        assert_eq!(MockLookup::seed("abc"), (97 + 98 + 99) % 1000);
        let profile = MockLookup::profile("abc", "1");
        assert!(profile.level.unwrap() >= 10);
    }
}
