#![forbid(unsafe_code)]

//! Steam application IDs of well-known titles.
//!
//! Sources: `ISteamApps/GetAppList/v2`, `IStoreService/GetAppList/v1` and
//! <https://steamdb.info/>.

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppId(pub u64);

#[rustfmt::skip]
impl AppId {
    pub const UNKNOWN: AppId = AppId(0);
    pub const COUNTER_STRIKE: AppId = AppId(10);
    pub const TEAM_FORTRESS_CLASSIC: AppId = AppId(20);
    pub const DAY_OF_DEFEAT: AppId = AppId(30);
    pub const DEATHMATCH_CLASSIC: AppId = AppId(40);
    pub const OPPOSING_FORCE: AppId = AppId(50);
    pub const RICOCHET: AppId = AppId(60);
    pub const HALF_LIFE: AppId = AppId(70);
    pub const COUNTER_STRIKE_CZ: AppId = AppId(80);
    pub const HALF_LIFE_BLUE_SHIFT: AppId = AppId(130);
    pub const HALF_LIFE_2: AppId = AppId(220);
    pub const COUNTER_STRIKE_SOURCE: AppId = AppId(240);
    pub const DAY_OF_DEFEAT_SOURCE: AppId = AppId(300);
    pub const HALF_LIFE_DM_SOURCE: AppId = AppId(360);
    pub const PORTAL: AppId = AppId(400);
    pub const TEAM_FORTRESS_2: AppId = AppId(440);
    pub const SPACEWAR: AppId = AppId(480);
    pub const LEFT_4_DEAD: AppId = AppId(500);
    pub const LEFT_4_DEAD_2: AppId = AppId(550);
    pub const DOTA_2: AppId = AppId(570);
    pub const PORTAL_2: AppId = AppId(620);
    pub const ALIEN_SWARM: AppId = AppId(630);
    pub const COUNTER_STRIKE_2: AppId = AppId(730);
    pub const KILLING_FLOOR: AppId = AppId(1250);
    pub const THE_SHIP: AppId = AppId(2400);
    pub const GARRYS_MOD: AppId = AppId(4000);
    pub const DEADLOCK: AppId = AppId(1422450);
    pub const ARMA_3: AppId = AppId(107410);
    pub const DAYZ: AppId = AppId(221100);
    pub const DAYZ_EXP: AppId = AppId(1024020);
    pub const RUST: AppId = AppId(252490);
    pub const PUBG_BATTLEGROUNDS: AppId = AppId(578080);
    pub const GTA_5: AppId = AppId(271590);
    pub const PALWORLD: AppId = AppId(1623730);
    pub const STARDEW_VALLEY: AppId = AppId(413150);
    pub const RAINBOW_SIX_SIEGE: AppId = AppId(359550);
    pub const WARFRAME: AppId = AppId(230410);
    pub const ELDEN_RING: AppId = AppId(1245620);
    pub const APEX_LEGENDS: AppId = AppId(1172470);
    pub const WAR_THUNDER: AppId = AppId(236390);
    pub const PROJECT_ZOMBOID: AppId = AppId(108600);
    pub const ARK_SURVIVAL_ASCENDED: AppId = AppId(2399830);
    pub const ARK_SURVIVAL_EVOLVED: AppId = AppId(346110);
    pub const SEVEN_DAYS_TO_DIE: AppId = AppId(251570);
    pub const PAYDAY_2: AppId = AppId(218620);
    pub const FACTORIO: AppId = AppId(427520);
    pub const TERRARIA: AppId = AppId(105600);
    pub const RIMWORLD: AppId = AppId(294100);
    pub const SATISFACTORY: AppId = AppId(526870);
    pub const DONT_STARVE_TOGETHER: AppId = AppId(322330);
    pub const SCUM: AppId = AppId(513710);
    pub const SQUAD: AppId = AppId(393380);
}

const NAMES: &[(AppId, &str)] = &[
    (AppId::UNKNOWN, "Any unexpected app"),
    (AppId::COUNTER_STRIKE, "Counter Strike 1.6"),
    (AppId::TEAM_FORTRESS_CLASSIC, "Team Fortress Classic"),
    (AppId::DAY_OF_DEFEAT, "Day Of Defeat"),
    (AppId::DEATHMATCH_CLASSIC, "Half-Life: DeathMatch Classic"),
    (AppId::OPPOSING_FORCE, "Opposing Force"),
    (AppId::RICOCHET, "Ricochet"),
    (AppId::HALF_LIFE, "Half-Life"),
    (AppId::COUNTER_STRIKE_CZ, "Counter Strike: Condition Zero"),
    (AppId::HALF_LIFE_BLUE_SHIFT, "Half-Life: BlueShift"),
    (AppId::HALF_LIFE_2, "Half-Life 2"),
    (AppId::COUNTER_STRIKE_SOURCE, "Counter Strike Source"),
    (AppId::DAY_OF_DEFEAT_SOURCE, "Day Of Defeat Source"),
    (AppId::HALF_LIFE_DM_SOURCE, "Half-Life: DeathMatch Source"),
    (AppId::PORTAL, "Portal"),
    (AppId::TEAM_FORTRESS_2, "Team Fortress 2"),
    (AppId::SPACEWAR, "Spacewar"),
    (AppId::LEFT_4_DEAD, "Left 4 Dead"),
    (AppId::LEFT_4_DEAD_2, "Left 4 Dead 2"),
    (AppId::DOTA_2, "Dota 2"),
    (AppId::PORTAL_2, "Portal 2"),
    (AppId::ALIEN_SWARM, "Alien Swarm"),
    (AppId::COUNTER_STRIKE_2, "Counter Strike 2"),
    (AppId::KILLING_FLOOR, "Killing Floor"),
    (AppId::THE_SHIP, "The Ship"),
    (AppId::GARRYS_MOD, "Garry's Mod"),
    (AppId::DEADLOCK, "Deadlock"),
    (AppId::ARMA_3, "Arma 3"),
    (AppId::DAYZ, "DayZ"),
    (AppId::DAYZ_EXP, "DayZ Experimental"),
    (AppId::RUST, "Rust"),
    (AppId::PUBG_BATTLEGROUNDS, "PUBG: BATTLEGROUNDS"),
    (AppId::GTA_5, "Grand Theft Auto V"),
    (AppId::PALWORLD, "Palworld"),
    (AppId::STARDEW_VALLEY, "Stardew Valley"),
    (AppId::RAINBOW_SIX_SIEGE, "Tom Clancy's Rainbow Six Siege"),
    (AppId::WARFRAME, "Warframe"),
    (AppId::ELDEN_RING, "ELDEN RING"),
    (AppId::APEX_LEGENDS, "Apex Legends"),
    (AppId::WAR_THUNDER, "War Thunder"),
    (AppId::PROJECT_ZOMBOID, "Project Zomboid"),
    (AppId::ARK_SURVIVAL_ASCENDED, "ARK: Survival Ascended"),
    (AppId::ARK_SURVIVAL_EVOLVED, "ARK: Survival Evolved"),
    (AppId::SEVEN_DAYS_TO_DIE, "7 Days to Die"),
    (AppId::PAYDAY_2, "PAYDAY 2"),
    (AppId::FACTORIO, "Factorio"),
    (AppId::TERRARIA, "Terraria"),
    (AppId::RIMWORLD, "RimWorld"),
    (AppId::SATISFACTORY, "Satisfactory"),
    (AppId::DONT_STARVE_TOGETHER, "Don't Starve Together"),
    (AppId::SCUM, "SCUM"),
    (AppId::SQUAD, "Squad"),
];

impl AppId {
    /// Human readable name, if the ID is one of the known titles.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|(id, _)| *id == self)
            .map(|(_, name)| *name)
    }

    pub fn known() -> impl Iterator<Item = AppId> {
        NAMES.iter().map(|(id, _)| *id)
    }
}

impl From<u64> for AppId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl From<AppId> for u64 {
    fn from(id: AppId) -> Self {
        id.0
    }
}

/// The name when known, the number otherwise.
impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}
