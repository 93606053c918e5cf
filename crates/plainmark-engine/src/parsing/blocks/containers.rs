use super::context::Context;

/// The context recorded at each nesting depth (index = depth).
///
/// Occupied depths are always contiguous from 0. A slot may hold
/// [`Context::None`]; it still counts towards [`ContextStack::max_depth`].
#[derive(Debug, Default, Clone)]
pub struct ContextStack(Vec<Context>);

impl ContextStack {
    /// The context at `depth`, or `None` if the slot was never recorded.
    pub fn at(&self, depth: usize) -> Context {
        self.0.get(depth).copied().unwrap_or_default()
    }

    /// Records `context` at `depth`.
    ///
    /// Depth only grows one level at a time, so `depth` is at most one past
    /// the deepest recorded slot.
    pub fn set(&mut self, depth: usize, context: Context) {
        debug_assert!(depth <= self.0.len(), "depth {depth} skips a level");
        match self.0.get_mut(depth) {
            Some(slot) => *slot = context,
            None => self.0.push(context),
        }
    }

    /// The deepest recorded depth (0 when empty).
    pub fn max_depth(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    /// Removes and returns the deepest context below `depth`, if any.
    pub fn pop_below(&mut self, depth: usize) -> Option<Context> {
        if self.0.len() > depth + 1 {
            self.0.pop()
        } else {
            None
        }
    }
}
