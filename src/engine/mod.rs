//! Game engine: the composition root.
//!
//! `Game` is a state machine over `Phase`:
//!
//! - **Setup → Playing**: `start_game` with a valid name list
//! - **Playing → Playing**: `draw_scene`, `apply_score`, `eliminate`, `undo`
//! - **Playing → GameOver**: an elimination leaves one active player
//! - **any → Setup**: `reset`
//!
//! ```
//! use placar::core::{GameConfig, GameRng, Phase};
//! use placar::engine::Game;
//! use placar::store::MemoryStore;
//!
//! let mut game = Game::with_store(GameConfig::default(), MemoryStore::new(), GameRng::new(7));
//! game.start_game(&["Ana", "Bia", "Caio"]).unwrap();
//!
//! let drawn = game.draw_scene(2).unwrap();
//! assert_eq!(drawn.scene.len(), 2);
//! game.apply_score(3).unwrap();
//!
//! assert!(game.undo());
//! assert!(game.state().has_scene());
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

mod game;

pub use game::Game;
