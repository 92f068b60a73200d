//! Lobby roster model: team slots, character picks and the club carousel.
//!
//! Transport-free. A host (socket server, or the local single-instance mode in
//! the WASM exports) feeds it commands per session and relays the returned
//! [`Broadcast`] to every member of the instance. Every mutation answers with
//! the full snapshot; there are no partial updates.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::sim::Side;

pub const TEAM_CAPACITY: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Club {
    pub name: &'static str,
    pub logo: &'static str,
}

pub const CLUBS: [Club; 6] = [
    Club { name: "Bastard Munchen", logo: "/media/teams/b_munchen_logo.png" },
    Club { name: "Manshine City", logo: "/media/teams/m_city_logo.png" },
    Club { name: "Ubers", logo: "/media/teams/ubers_logo.png" },
    Club { name: "FC Barcha", logo: "/media/teams/fc_barcha_logo.png" },
    Club { name: "Re Al", logo: "/media/teams/re_al_logo.png" },
    Club { name: "PxG", logo: "/media/teams/pxg_logo.png" },
];

/// Pickable characters and their portraits.
pub const CHARACTERS: [(&str, &str); 6] = [
    ("Isagi Yoichi", "/media/characters/Isagi_Yoichi.jpeg"),
    ("Itoshi Rin", "/media/characters/Itoshi_Rin.png"),
    ("Meguru Bachira", "/media/characters/Meguru_Bachira.png"),
    ("Oliver Aiku", "/media/characters/Oliver_Aiku.png"),
    ("Gin Gagamaru", "/media/characters/Gin_Gagamaru.png"),
    ("Seishirou Nagi", "/media/characters/Seishiro_Nagi.png"),
];

pub fn character_portrait(name: &str) -> Option<&'static str> {
    CHARACTERS.iter().find(|(n, _)| *n == name).map(|(_, p)| *p)
}

#[derive(Debug, Error)]
pub enum LobbyError {
    #[error("session has not joined an instance")]
    NotJoined,
    #[error("unknown team side {0:?}")]
    UnknownTeam(String),
    #[error("{} team is full", .0.as_str())]
    TeamFull(Side),
    #[error("player is not on the {} team", .0.as_str())]
    NotOnTeam(Side),
    #[error("{0} is already taken on this team")]
    CharacterTaken(String),
    #[error("both teams need at least one player")]
    TeamsIncomplete,
    #[error("malformed command: {0}")]
    Malformed(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: String,
    pub name: String,
    pub avatar: String,
    pub character: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teams {
    pub left: Vec<RosterEntry>,
    pub right: Vec<RosterEntry>,
}

impl Teams {
    pub fn get(&self, side: Side) -> &Vec<RosterEntry> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn get_mut(&mut self, side: Side) -> &mut Vec<RosterEntry> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    fn remove_player(&mut self, id: &str) {
        self.left.retain(|p| p.id != id);
        self.right.retain(|p| p.id != id);
    }
}

/// Indices into [`CLUBS`], always distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedTeams {
    pub left: usize,
    pub right: usize,
}

impl Default for SelectedTeams {
    fn default() -> Self {
        Self { left: 0, right: 1 }
    }
}

impl SelectedTeams {
    pub fn get(&self, side: Side) -> usize {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Step one side through the carousel, skipping the club the other side holds.
    pub fn cycle(&mut self, side: Side, step: i32) {
        if step == 0 {
            return;
        }
        let n = CLUBS.len() as i32;
        let delta = step.signum();
        let taken = self.get(side.other()) as i32;
        let mut idx = self.get(side) as i32;
        for _ in 0..step.abs() {
            idx = (idx + delta).rem_euclid(n);
            if idx == taken {
                idx = (idx + delta).rem_euclid(n);
            }
        }
        match side {
            Side::Left => self.left = idx as usize,
            Side::Right => self.right = idx as usize,
        }
    }
}

/// Full snapshot broadcast after every mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LobbyState {
    pub teams: Teams,
    pub started: bool,
    pub selected_teams: SelectedTeams,
}

/// Commands a session can send, as tagged JSON (`{"type": "join_team", ...}`).
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    JoinInstance { instance: String },
    JoinTeam { team: String, id: String, name: String, avatar: String },
    SelectCharacter { team: String, character: String },
    CycleClub { team: String, step: i32 },
    StartGame,
    RequestLobbyState,
    Leave,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Message {
    LobbyState(LobbyState),
    GameStarted,
}

/// A message for every session in `instance`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Broadcast {
    pub instance: String,
    pub message: Message,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(pub u32);

#[derive(Debug, Default)]
struct Session {
    instance: Option<String>,
    /// Roster id bound when the session joins a team.
    player_id: Option<String>,
}

#[derive(Debug, Default)]
struct Lobby {
    state: LobbyState,
    members: HashSet<SessionId>,
}

fn parse_side(team: &str) -> Result<Side, LobbyError> {
    match team {
        "left" => Ok(Side::Left),
        "right" => Ok(Side::Right),
        other => Err(LobbyError::UnknownTeam(other.to_string())),
    }
}

/// All lobbies of a host, keyed by instance id.
#[derive(Debug, Default)]
pub struct LobbyRegistry {
    lobbies: HashMap<String, Lobby>,
    sessions: HashMap<SessionId, Session>,
    next_session: u32,
}

impl LobbyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self) -> SessionId {
        self.next_session += 1;
        let id = SessionId(self.next_session);
        self.sessions.insert(id, Session::default());
        log::debug!("session {} connected", id.0);
        id
    }

    pub fn snapshot(&self, instance: &str) -> Option<&LobbyState> {
        self.lobbies.get(instance).map(|l| &l.state)
    }

    pub fn lobby_count(&self) -> usize {
        self.lobbies.len()
    }

    /// Parse and run one JSON command. `Ok(None)` means nothing to send.
    pub fn handle_json(&mut self, session: SessionId, json: &str) -> Result<Option<Broadcast>, LobbyError> {
        let command: Command = serde_json::from_str(json)?;
        self.handle(session, command)
    }

    pub fn handle(&mut self, session: SessionId, command: Command) -> Result<Option<Broadcast>, LobbyError> {
        match command {
            Command::JoinInstance { instance } => self.join_instance(session, &instance).map(Some),
            Command::JoinTeam { team, id, name, avatar } => {
                let side = parse_side(&team)?;
                self.join_team(session, side, RosterEntry { id, name, avatar, character: None })
                    .map(Some)
            }
            Command::SelectCharacter { team, character } => {
                let side = parse_side(&team)?;
                self.select_character(session, side, &character).map(Some)
            }
            Command::CycleClub { team, step } => {
                let side = parse_side(&team)?;
                self.cycle_club(session, side, step).map(Some)
            }
            Command::StartGame => self.start_game(session).map(Some),
            Command::RequestLobbyState => self.request_state(session).map(Some),
            Command::Leave => Ok(self.leave(session)),
        }
    }

    fn lobby_of(&mut self, session: SessionId) -> Result<(String, &mut Lobby), LobbyError> {
        let instance = self
            .sessions
            .get(&session)
            .and_then(|s| s.instance.clone())
            .ok_or(LobbyError::NotJoined)?;
        let lobby = self.lobbies.get_mut(&instance).ok_or(LobbyError::NotJoined)?;
        Ok((instance, lobby))
    }

    fn state_broadcast(instance: String, lobby: &Lobby) -> Broadcast {
        Broadcast { instance, message: Message::LobbyState(lobby.state.clone()) }
    }

    /// Enter an instance room, creating its lobby on first join.
    pub fn join_instance(&mut self, session: SessionId, instance: &str) -> Result<Broadcast, LobbyError> {
        let current = self.sessions.get(&session).and_then(|s| s.instance.clone());
        if current.as_deref().is_some_and(|c| c != instance) {
            self.leave_instance(session);
        }
        let lobby = self.lobbies.entry(instance.to_string()).or_insert_with(|| {
            log::info!("lobby created for instance {}", instance);
            Lobby::default()
        });
        lobby.members.insert(session);
        self.sessions.entry(session).or_default().instance = Some(instance.to_string());
        log::debug!("session {} joined instance {}", session.0, instance);
        Ok(Self::state_broadcast(instance.to_string(), lobby))
    }

    /// Put a player on a team, moving them off the other one.
    /// A full team rejects the move and leaves the roster untouched.
    pub fn join_team(&mut self, session: SessionId, side: Side, entry: RosterEntry) -> Result<Broadcast, LobbyError> {
        let (instance, lobby) = self.lobby_of(session)?;
        let team = lobby.state.teams.get(side);
        let others = team.iter().filter(|p| p.id != entry.id).count();
        if others >= TEAM_CAPACITY {
            log::warn!("{} could not join full {} team", entry.name, side.as_str());
            return Err(LobbyError::TeamFull(side));
        }
        lobby.state.teams.remove_player(&entry.id);
        let player_id = entry.id.clone();
        log::info!("{} joined the {} team", entry.name, side.as_str());
        lobby.state.teams.get_mut(side).push(entry);
        let broadcast = Self::state_broadcast(instance, lobby);
        if let Some(s) = self.sessions.get_mut(&session) {
            s.player_id = Some(player_id);
        }
        Ok(broadcast)
    }

    /// Pick a character; a teammate's pick cannot be taken.
    pub fn select_character(&mut self, session: SessionId, side: Side, character: &str) -> Result<Broadcast, LobbyError> {
        let player_id = self.sessions.get(&session).and_then(|s| s.player_id.clone());
        let (instance, lobby) = self.lobby_of(session)?;
        let player_id = player_id.ok_or(LobbyError::NotOnTeam(side))?;
        let team = lobby.state.teams.get_mut(side);
        if team
            .iter()
            .any(|p| p.id != player_id && p.character.as_deref() == Some(character))
        {
            return Err(LobbyError::CharacterTaken(character.to_string()));
        }
        let entry = team
            .iter_mut()
            .find(|p| p.id == player_id)
            .ok_or(LobbyError::NotOnTeam(side))?;
        entry.character = Some(character.to_string());
        log::debug!("{} picked {}", entry.name, character);
        Ok(Self::state_broadcast(instance, lobby))
    }

    pub fn cycle_club(&mut self, session: SessionId, side: Side, step: i32) -> Result<Broadcast, LobbyError> {
        let (instance, lobby) = self.lobby_of(session)?;
        lobby.state.selected_teams.cycle(side, step);
        Ok(Self::state_broadcast(instance, lobby))
    }

    /// Flip the lobby into the match. Needs a player on each side.
    pub fn start_game(&mut self, session: SessionId) -> Result<Broadcast, LobbyError> {
        let (instance, lobby) = self.lobby_of(session)?;
        if lobby.state.teams.left.is_empty() || lobby.state.teams.right.is_empty() {
            return Err(LobbyError::TeamsIncomplete);
        }
        lobby.state.started = true;
        log::info!("game started in instance {}", instance);
        Ok(Broadcast { instance, message: Message::GameStarted })
    }

    pub fn request_state(&mut self, session: SessionId) -> Result<Broadcast, LobbyError> {
        let (instance, lobby) = self.lobby_of(session)?;
        Ok(Self::state_broadcast(instance, lobby))
    }

    /// Disconnect a session. Returns the snapshot for whoever remains, or
    /// `None` when there is no one left to tell.
    pub fn leave(&mut self, session: SessionId) -> Option<Broadcast> {
        let broadcast = self.leave_instance(session);
        self.sessions.remove(&session);
        broadcast
    }

    fn leave_instance(&mut self, session: SessionId) -> Option<Broadcast> {
        let s = self.sessions.get_mut(&session)?;
        let instance = s.instance.take()?;
        let player_id = s.player_id.take();
        let lobby = self.lobbies.get_mut(&instance)?;
        if let Some(id) = player_id {
            lobby.state.teams.remove_player(&id);
        }
        lobby.members.remove(&session);
        if lobby.members.is_empty() {
            self.lobbies.remove(&instance);
            log::info!("lobby deleted for instance {}", instance);
            return None;
        }
        Some(Self::state_broadcast(instance, lobby))
    }
}
