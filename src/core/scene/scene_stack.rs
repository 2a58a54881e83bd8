//=========================================================================
// Scene Stack
//=========================================================================
//
// LIFO navigation history.
//
// Scenes are owned by the stack. Only the top two entries are reachable,
// and the stack only grows or shrinks at the top, so the history always
// matches the order in which scenes were entered.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use super::Scene;
use crate::core::error::SceneError;

//=== Scene Stack =========================================================

/// Ordered navigation history; index 0 is the root, the last entry is the
/// active scene.
#[derive(Default)]
pub struct SceneStack {
    scenes: Vec<Box<dyn Scene>>,
}

impl SceneStack {
    //--- Construction -----------------------------------------------------

    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { scenes: Vec::new() }
    }

    //--- Queries ----------------------------------------------------------

    /// Returns the topmost scene.
    ///
    /// # Errors
    ///
    /// [`SceneError::EmptyStack`] if nothing has been pushed.
    pub fn active(&self) -> Result<&dyn Scene, SceneError> {
        self.scenes
            .last()
            .map(|scene| &**scene)
            .ok_or(SceneError::EmptyStack)
    }

    /// Mutable access to the topmost scene.
    ///
    /// # Errors
    ///
    /// [`SceneError::EmptyStack`] if nothing has been pushed.
    pub fn active_mut(&mut self) -> Result<&mut (dyn Scene + 'static), SceneError> {
        self.scenes
            .last_mut()
            .map(|scene| &mut **scene)
            .ok_or(SceneError::EmptyStack)
    }

    /// Returns the scene directly below the active one.
    ///
    /// # Errors
    ///
    /// [`SceneError::InsufficientDepth`] with fewer than two scenes.
    pub fn previous(&self) -> Result<&dyn Scene, SceneError> {
        let depth = self.scenes.len();
        if depth < 2 {
            return Err(SceneError::InsufficientDepth { depth });
        }
        Ok(&*self.scenes[depth - 2])
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    //--- Mutation ---------------------------------------------------------

    /// Places `scene` on top; it becomes the active scene.
    pub fn push(&mut self, scene: Box<dyn Scene>) {
        debug!(target: "scene", "Pushing scene {} at depth {}", scene.name(), self.scenes.len());
        self.scenes.push(scene);
    }

    /// Removes and drops the active scene.
    ///
    /// # Errors
    ///
    /// [`SceneError::EmptyStack`] if nothing is left to pop.
    pub fn pop(&mut self) -> Result<(), SceneError> {
        let scene = self.scenes.pop().ok_or(SceneError::EmptyStack)?;
        debug!(target: "scene", "Popped scene {}, depth is now {}", scene.name(), self.scenes.len());
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::ProbeScene;

    fn probe(name: &'static str) -> Box<dyn Scene> {
        Box::new(ProbeScene::detached(name))
    }

    fn name_of(scene: &dyn Scene) -> &str {
        scene.name()
    }

    //--- Empty Stack ------------------------------------------------------

    #[test]
    fn empty_stack_has_no_active_scene() {
        let mut stack = SceneStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.active().err(), Some(SceneError::EmptyStack));
        assert_eq!(stack.active_mut().err(), Some(SceneError::EmptyStack));
    }

    #[test]
    fn pop_on_empty_stack_fails() {
        let mut stack = SceneStack::new();
        assert_eq!(stack.pop(), Err(SceneError::EmptyStack));
    }

    #[test]
    fn previous_on_empty_stack_reports_depth_zero() {
        let stack = SceneStack::new();
        assert_eq!(
            stack.previous().err(),
            Some(SceneError::InsufficientDepth { depth: 0 })
        );
    }

    //--- Stack Semantics --------------------------------------------------

    #[test]
    fn push_makes_scene_active() {
        let mut stack = SceneStack::new();
        stack.push(probe("a"));
        stack.push(probe("b"));

        assert_eq!(stack.len(), 2);
        assert_eq!(name_of(stack.active().unwrap()), "b");
        assert_eq!(name_of(stack.previous().unwrap()), "a");
    }

    #[test]
    fn pop_exposes_prior_scene() {
        let mut stack = SceneStack::new();
        stack.push(probe("a"));
        stack.push(probe("b"));
        stack.pop().unwrap();

        assert_eq!(name_of(stack.active().unwrap()), "a");
        assert_eq!(stack.len(), 1);
    }

    #[test]
    fn pop_of_last_scene_succeeds_then_second_pop_fails() {
        let mut stack = SceneStack::new();
        stack.push(probe("a"));

        assert_eq!(stack.pop(), Ok(()));
        assert_eq!(stack.pop(), Err(SceneError::EmptyStack));
    }

    #[test]
    fn previous_with_single_scene_is_insufficient_depth() {
        let mut stack = SceneStack::new();
        stack.push(probe("a"));
        assert_eq!(
            stack.previous().err(),
            Some(SceneError::InsufficientDepth { depth: 1 })
        );
    }

    #[test]
    fn active_tracks_last_unpopped_push_across_sequence() {
        let mut stack = SceneStack::new();
        let mut model: Vec<&'static str> = Vec::new();

        let script: &[Option<&'static str>] = &[
            Some("menu"),
            Some("level"),
            Some("pause"),
            None,
            None,
            Some("settings"),
            None,
            Some("level"),
            Some("pause"),
            None,
        ];

        for &step in script {
            match step {
                Some(name) => {
                    stack.push(probe(name));
                    model.push(name);
                }
                None => {
                    stack.pop().unwrap();
                    model.pop();
                }
            }
            assert_eq!(name_of(stack.active().unwrap()), *model.last().unwrap());
            assert_eq!(stack.len(), model.len());
        }
    }

    #[test]
    fn active_mut_reaches_top_scene() {
        let mut stack = SceneStack::new();
        stack.push(probe("a"));
        stack.push(probe("b"));

        stack
            .active_mut()
            .unwrap()
            .surface_mut()
            .clear(crate::core::render::Color::BLACK);

        assert_eq!(stack.active().unwrap().surface().commands().len(), 1);
        assert_eq!(stack.previous().unwrap().surface().commands().len(), 0);
    }
}
