//! Who the local viewer is: a Discord user, or a guest when auth fails.

use bobble_engine::Rng;
use serde::{Deserialize, Serialize};

const CDN: &str = "https://cdn.discordapp.com";

/// Identity as handed to the lobby and the HUD.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub username: String,
    pub avatar: String,
}

/// The subset of a Discord user object the game reads.
#[derive(Debug, Clone, Deserialize)]
pub struct DiscordUser {
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub discriminator: Option<String>,
    #[serde(default)]
    pub global_name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl DiscordUser {
    pub fn display_name(&self) -> String {
        match &self.global_name {
            Some(name) => name.clone(),
            None => format!("{}#{}", self.username, self.discriminator.as_deref().unwrap_or("0")),
        }
    }

    pub fn avatar_url(&self) -> String {
        match &self.avatar {
            Some(hash) => format!("{}/avatars/{}/{}.png?size=256", CDN, self.id, hash),
            None => default_avatar_url(default_avatar_index(&self.id)),
        }
    }
}

/// Default avatar slot for users without a custom one: `(id >> 22) % 6`.
pub fn default_avatar_index(id: &str) -> u64 {
    id.parse::<u64>().map(|snowflake| (snowflake >> 22) % 6).unwrap_or(0)
}

pub fn default_avatar_url(index: u64) -> String {
    format!("{}/embed/avatars/{}.png", CDN, index)
}

impl From<DiscordUser> for Identity {
    fn from(user: DiscordUser) -> Self {
        Self {
            username: user.display_name(),
            avatar: user.avatar_url(),
            id: user.id,
        }
    }
}

impl Identity {
    /// Parse a Discord user payload.
    pub fn from_discord_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<DiscordUser>(json).map(Identity::from)
    }

    /// Locally generated fallback identity.
    pub fn guest(rng: &mut Rng) -> Self {
        Self {
            id: rng.token(11),
            username: format!("Player{}", rng.next_int(1000)),
            avatar: default_avatar_url(0),
        }
    }

    /// Discord identity when the payload parses, guest otherwise.
    pub fn resolve(json: Option<&str>, rng: &mut Rng) -> Self {
        match json.map(Self::from_discord_json) {
            Some(Ok(identity)) => identity,
            Some(Err(err)) => {
                log::warn!("discord identity unusable, playing as guest: {}", err);
                Self::guest(rng)
            }
            None => Self::guest(rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn global_name_wins() {
        let id = Identity::from_discord_json(
            r#"{"id":"80351110224678912","username":"nelly","discriminator":"1337","global_name":"Nelly","avatar":"8342729096ea3675442027381ff50dfe"}"#,
        )
        .unwrap();
        assert_eq!(id.username, "Nelly");
        assert_eq!(
            id.avatar,
            "https://cdn.discordapp.com/avatars/80351110224678912/8342729096ea3675442027381ff50dfe.png?size=256"
        );
    }

    #[test]
    fn legacy_name_and_default_avatar() {
        let id = Identity::from_discord_json(
            r#"{"id":"80351110224678912","username":"nelly","discriminator":"1337","avatar":null}"#,
        )
        .unwrap();
        assert_eq!(id.username, "nelly#1337");
        let slot = (80351110224678912u64 >> 22) % 6;
        assert_eq!(id.avatar, format!("https://cdn.discordapp.com/embed/avatars/{}.png", slot));
    }

    #[test]
    fn guest_fallback() {
        let mut rng = Rng::new(7);
        let id = Identity::resolve(Some("not json"), &mut rng);
        assert!(id.username.starts_with("Player"));
        let n: u32 = id.username["Player".len()..].parse().unwrap();
        assert!(n < 1000);
        assert_eq!(id.avatar, "https://cdn.discordapp.com/embed/avatars/0.png");
        assert_eq!(id.id.len(), 11);
    }

    #[test]
    fn non_numeric_id_uses_first_default_avatar() {
        assert_eq!(default_avatar_index("guest"), 0);
    }
}
