use smallvec::SmallVec;

/// Opaque identity of one in-flight transition, used only to cancel it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TransitionToken(u64);

/// Tokens of transitions that have neither completed nor been cancelled.
///
/// Kept in issue order, but only ever queried for membership.
#[derive(Debug, Default)]
pub struct ActiveTransitions {
    tokens: SmallVec<[TransitionToken; 4]>,
    next_id: u64,
}

impl ActiveTransitions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues a fresh token and marks it active.
    pub fn generate(&mut self) -> TransitionToken {
        self.next_id += 1;
        let token = TransitionToken(self.next_id);
        self.tokens.push(token);
        token
    }

    /// Removes `token`. Returns `false` when it was not active.
    pub fn remove(&mut self, token: TransitionToken) -> bool {
        match self.tokens.iter().position(|active| *active == token) {
            Some(index) => {
                self.tokens.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, token: TransitionToken) -> bool {
        self.tokens.contains(&token)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = TransitionToken> + '_ {
        self.tokens.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_tokens_are_unique_and_active() {
        let mut active = ActiveTransitions::new();
        let first = active.generate();
        let second = active.generate();

        assert_ne!(first, second);
        assert!(active.contains(first));
        assert!(active.contains(second));
        assert_eq!(active.iter().collect::<Vec<_>>(), vec![first, second]);
    }

    #[test]
    fn removing_twice_is_a_no_op() {
        let mut active = ActiveTransitions::new();
        let token = active.generate();

        assert!(active.remove(token));
        assert!(!active.remove(token));
        assert!(active.is_empty());
    }

    #[test]
    fn removed_tokens_are_never_reissued() {
        let mut active = ActiveTransitions::new();
        let first = active.generate();
        active.remove(first);
        let second = active.generate();

        assert_ne!(first, second);
        assert!(!active.contains(first));
        assert_eq!(active.len(), 1);
    }
}
