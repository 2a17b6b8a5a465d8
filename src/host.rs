//! Interface to the board-game host framework.
//!
//! The host owns rendering, texture loading, turn sequencing and the main
//! loop. The rules layer only talks to it through [`Host`].

use std::collections::HashMap;

use crate::board::{Player, TextureId};

/// Services the host framework provides to the rules layer.
pub trait Host {
    /// Configure how many players take part in the session.
    fn set_number_of_players(&mut self, count: usize);

    /// Configure the size of the square grid.
    fn configure_grid(&mut self, cols: usize, rows: usize);

    /// Load a texture by file name. Failure handling belongs to the host.
    fn load_texture(&mut self, name: &str) -> TextureId;

    /// Player whose turn it currently is.
    fn current_player(&self) -> Player;

    /// Player seated at `index`, if any.
    fn player_at(&self, index: usize) -> Option<Player> {
        Player::from_index(index)
    }

    /// Signal that setup is finished and play can begin.
    fn start_game(&mut self);
}

/// In-memory host without rendering.
///
/// Records what the rules layer asked for and keeps a simple alternating
/// turn order. Used by the text front-end and the tests.
#[derive(Debug, Clone)]
pub struct HeadlessHost {
    players: usize,
    grid: (usize, usize),
    current: Player,
    started: bool,
    textures: Vec<String>,
    texture_ids: HashMap<String, TextureId>,
    texture_loads: usize,
}

impl HeadlessHost {
    #[must_use]
    pub fn new() -> Self {
        HeadlessHost {
            players: 0,
            grid: (0, 0),
            current: Player::White,
            started: false,
            textures: Vec::new(),
            texture_ids: HashMap::new(),
            texture_loads: 0,
        }
    }

    #[must_use]
    pub fn number_of_players(&self) -> usize {
        self.players
    }

    #[must_use]
    pub fn grid(&self) -> (usize, usize) {
        self.grid
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.started
    }

    /// Hand the turn to the other player.
    pub fn end_turn(&mut self) {
        self.current = self.current.opponent();
        log::debug!("turn passes to {}", self.current);
    }

    pub fn set_current_player(&mut self, player: Player) {
        self.current = player;
    }

    /// File name behind a texture handle.
    #[must_use]
    pub fn texture_name(&self, id: TextureId) -> Option<&str> {
        self.textures.get(id.0 as usize).map(String::as_str)
    }

    /// Number of `load_texture` calls, including repeated names.
    #[must_use]
    pub fn texture_loads(&self) -> usize {
        self.texture_loads
    }

    /// Number of distinct textures loaded.
    #[must_use]
    pub fn distinct_textures(&self) -> usize {
        self.textures.len()
    }
}

impl Default for HeadlessHost {
    fn default() -> Self {
        HeadlessHost::new()
    }
}

impl Host for HeadlessHost {
    fn set_number_of_players(&mut self, count: usize) {
        self.players = count;
    }

    fn configure_grid(&mut self, cols: usize, rows: usize) {
        self.grid = (cols, rows);
    }

    fn load_texture(&mut self, name: &str) -> TextureId {
        self.texture_loads += 1;
        if let Some(&id) = self.texture_ids.get(name) {
            return id;
        }
        let id = TextureId(self.textures.len() as u32);
        log::trace!("loaded texture {name} as {id:?}");
        self.textures.push(name.to_string());
        self.texture_ids.insert(name.to_string(), id);
        id
    }

    fn current_player(&self) -> Player {
        self.current
    }

    fn player_at(&self, index: usize) -> Option<Player> {
        if index < self.players {
            Player::from_index(index)
        } else {
            None
        }
    }

    fn start_game(&mut self) {
        self.started = true;
        self.current = Player::White;
    }
}
