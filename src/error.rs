// error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("Territory index {index} is out of range (the board has {count} territories)")]
    InvalidIndex { index: usize, count: usize },

    #[error("The attacker and the defender must be different territories")]
    SelfAttack,

    #[error("Cannot attack a territory of the same faction ({faction})")]
    SameFactionAttack { faction: String },

    #[error("'{territory}' needs at least 2 troops to attack, it has {troops}")]
    InsufficientTroops { territory: String, troops: u32 },

    #[error("'{territory}' is not controlled by {faction}")]
    NotOwner { territory: String, faction: String },

    #[error("No player plays faction '{0}'")]
    UnknownFaction(String),

    #[error("The game has not started yet")]
    NotStarted,

    #[error("The game is over")]
    GameOver,

    #[error("A board needs at least one territory")]
    EmptyBoard,

    #[error("Territory {index} has no faction")]
    MissingFaction { index: usize },

    #[error("Territory {index}: {field} is longer than {max} characters")]
    FieldTooLong {
        index: usize,
        field: &'static str,
        max: usize,
    },

    #[error("The mission catalog is empty")]
    EmptyCatalog,

    #[error("Player '{player}' has no faction")]
    PlayerWithoutFaction { player: String },

    #[error("Player '{player}': faction is longer than {max} characters")]
    PlayerFactionTooLong { player: String, max: usize },

    #[error("A game needs at least one player")]
    NoPlayers,

    #[error("Faction '{0}' is assigned to more than one player")]
    DuplicateFaction(String),

    #[error("Duplicate territory: {0}")]
    DuplicateTerritory(String),

    #[error("Unknown territory: {0}")]
    UnknownTerritory(String),

    #[error("Input closed")]
    InputClosed,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
