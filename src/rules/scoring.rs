//! Scoring applier: closes a scene by awarding points to its players.

use tracing::{debug, error};

use crate::core::{GameError, GameState, PlayerId};

/// Add `points` to every active player on stage and clear the scene.
///
/// Scene members eliminated since the draw are skipped. Returns the ids
/// that were scored. If any total would overflow, nobody is scored and the
/// scene stays open.
pub fn apply_score(state: &mut GameState, points: i64) -> Result<Vec<PlayerId>, GameError> {
    if !state.has_scene() {
        return Err(GameError::NoActiveScene);
    }

    let mut scored = Vec::with_capacity(state.current_scene.len());
    let mut totals = Vec::with_capacity(state.current_scene.len());
    for &id in &state.current_scene {
        match state.roster.get(id) {
            Ok(player) if player.is_active() => {
                let total = player
                    .score
                    .checked_add(points)
                    .ok_or(GameError::ScoreOverflow(id))?;
                scored.push(id);
                totals.push(total);
            }
            Ok(_) => {}
            Err(err) => {
                debug_assert!(false, "scene references {id} which is not on the roster");
                error!(%err, "skipping unknown scene player");
            }
        }
    }

    // Nothing is written until every total is known to fit.
    for (&id, total) in scored.iter().zip(totals) {
        state.roster.get_mut(id)?.score = total;
    }
    state.current_scene.clear();

    debug!(points, scored = ?scored, "scene scored");
    Ok(scored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Roster, Scene};

    #[test]
    fn test_score_applies_to_scene_and_clears_it() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia", "Caio"]), 30);
        state.current_scene = Scene::from_slice(&[PlayerId::new(1), PlayerId::new(3)]);

        let scored = apply_score(&mut state, 4).unwrap();

        assert_eq!(scored, vec![PlayerId::new(1), PlayerId::new(3)]);
        assert!(!state.has_scene());
        assert_eq!(state.roster.get(PlayerId::new(1)).unwrap().score, 4);
        assert_eq!(state.roster.get(PlayerId::new(2)).unwrap().score, 0);
        assert_eq!(state.roster.get(PlayerId::new(3)).unwrap().score, 4);
    }

    #[test]
    fn test_score_without_scene_fails() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia"]), 30);
        let before = state.clone();
        assert_eq!(apply_score(&mut state, 3).unwrap_err(), GameError::NoActiveScene);
        assert_eq!(state, before);
    }

    #[test]
    fn test_score_skips_eliminated_scene_member() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia", "Caio"]), 30);
        state.current_scene = Scene::from_slice(&[PlayerId::new(1), PlayerId::new(2)]);
        state.roster.eliminate(PlayerId::new(2)).unwrap();

        let scored = apply_score(&mut state, 5).unwrap();

        assert_eq!(scored, vec![PlayerId::new(1)]);
        assert_eq!(state.roster.get(PlayerId::new(2)).unwrap().score, 0);
    }

    #[test]
    fn test_score_overflow_leaves_state_untouched() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia"]), 30);
        state.roster.add_points(PlayerId::new(2), i64::MAX).unwrap();
        state.current_scene = Scene::from_slice(&[PlayerId::new(1), PlayerId::new(2)]);
        let before = state.clone();

        assert_eq!(
            apply_score(&mut state, 1).unwrap_err(),
            GameError::ScoreOverflow(PlayerId::new(2))
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_negative_points_are_applied() {
        let mut state = GameState::new(Roster::new(["Ana", "Bia"]), 30);
        state.current_scene = Scene::from_slice(&[PlayerId::new(1)]);

        apply_score(&mut state, -3).unwrap();

        assert_eq!(state.roster.get(PlayerId::new(1)).unwrap().score, -3);
    }
}
