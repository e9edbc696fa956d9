#![forbid(unsafe_code)]

use crate::Error;
use std::fmt;

/// Keys understood by the server list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKey {
    /// `1` dedicated servers, `0` listen servers.
    Dedicated,
    /// `1` servers using anti-cheat (VAC, BattlEye).
    Secure,
    /// Game directory, e.g. `cstrike`.
    GameDir,
    Map,
    Linux,
    Password,
    /// `1` servers that are not empty.
    Empty,
    /// `1` servers that are not full.
    Full,
    Proxy,
    AppId,
    NotAppId,
    /// `1` servers without players.
    NoPlayers,
    White,
    /// Tag from `sv_tags`, e.g. `battleye`.
    GameType,
    GameData,
    /// Server name, wildcards allowed.
    Name,
    /// Server version, wildcards allowed (`1.3.*`).
    Version,
    /// One server per unique IP address.
    SingleAddr,
    /// IP address with optional port.
    GameAddr,
}

impl FilterKey {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dedicated => "dedicated",
            Self::Secure => "secure",
            Self::GameDir => "gamedir",
            Self::Map => "map",
            Self::Linux => "linux",
            Self::Password => "password",
            Self::Empty => "empty",
            Self::Full => "full",
            Self::Proxy => "proxy",
            Self::AppId => "appid",
            Self::NotAppId => "napp",
            Self::NoPlayers => "noplayers",
            Self::White => "white",
            Self::GameType => "gametype",
            Self::GameData => "gamedata",
            Self::Name => "name_match",
            Self::Version => "version_match",
            Self::SingleAddr => "collapse_addr_hash",
            Self::GameAddr => "gameaddr",
        }
    }
}

impl fmt::Display for FilterKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builder for the backslash separated filter string.
///
/// Plain conditions must all match. NOR conditions must all fail and NAND
/// conditions must not all match. NOR and NAND cannot be combined.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filter {
    conditions: Vec<String>,
    nor: Vec<String>,
    nand: Vec<String>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: FilterKey, value: impl fmt::Display) -> &mut Self {
        self.conditions.push(condition(key, value));
        self
    }

    pub fn add_nor(&mut self, key: FilterKey, value: impl fmt::Display) -> &mut Self {
        self.nor.push(condition(key, value));
        self
    }

    pub fn add_nand(&mut self, key: FilterKey, value: impl fmt::Display) -> &mut Self {
        self.nand.push(condition(key, value));
        self
    }

    /// Remove the first matching plain condition.
    pub fn remove(&mut self, key: FilterKey, value: impl fmt::Display) -> &mut Self {
        remove_first(&mut self.conditions, &condition(key, value));
        self
    }

    pub fn remove_nor(&mut self, key: FilterKey, value: impl fmt::Display) -> &mut Self {
        remove_first(&mut self.nor, &condition(key, value));
        self
    }

    pub fn remove_nand(&mut self, key: FilterKey, value: impl fmt::Display) -> &mut Self {
        remove_first(&mut self.nand, &condition(key, value));
        self
    }

    pub fn build(&self) -> Result<String, Error> {
        if !self.nor.is_empty() && !self.nand.is_empty() {
            return Err(Error::InvalidFilter);
        }

        let mut parts = Vec::with_capacity(3);
        if !self.conditions.is_empty() {
            parts.push(self.conditions.join("\\"));
        }
        if !self.nor.is_empty() {
            parts.push(format!("nor\\{}\\{}", self.nor.len(), self.nor.join("\\")));
        }
        if !self.nand.is_empty() {
            parts.push(format!("nand\\{}\\{}", self.nand.len(), self.nand.join("\\")));
        }
        Ok(parts.join("\\"))
    }
}

fn condition(key: FilterKey, value: impl fmt::Display) -> String {
    format!("{key}\\{value}")
}

fn remove_first(conditions: &mut Vec<String>, target: &str) {
    if let Some(pos) = conditions.iter().position(|c| c == target) {
        conditions.remove(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_and_nor() {
        let mut filter = Filter::new();
        filter
            .add(FilterKey::AppId, 221100)
            .add(FilterKey::GameType, "battleye")
            .add_nor(FilterKey::GameType, "external")
            .add_nor(FilterKey::Map, "test");

        assert_eq!(
            filter.build().unwrap(),
            r"appid\221100\gametype\battleye\nor\2\gametype\external\map\test"
        );
    }

    #[test]
    fn nand_only() {
        let mut filter = Filter::new();
        filter.add_nand(FilterKey::Password, 1);
        assert_eq!(filter.build().unwrap(), r"nand\1\password\1");
    }

    #[test]
    fn nor_and_nand_conflict() {
        let mut filter = Filter::new();
        filter
            .add_nor(FilterKey::Full, 1)
            .add_nand(FilterKey::Empty, 1);
        assert!(matches!(filter.build(), Err(Error::InvalidFilter)));

        filter.remove_nand(FilterKey::Empty, 1);
        assert_eq!(filter.build().unwrap(), r"nor\1\full\1");
    }

    #[test]
    fn remove_drops_first_match() {
        let mut filter = Filter::new();
        filter
            .add(FilterKey::Map, "a")
            .add(FilterKey::Map, "b")
            .add(FilterKey::Map, "a");
        filter.remove(FilterKey::Map, "a").remove(FilterKey::Linux, 1);
        assert_eq!(filter.build().unwrap(), r"map\b\map\a");
    }

    #[test]
    fn empty_filter() {
        assert_eq!(Filter::new().build().unwrap(), "");
    }
}
