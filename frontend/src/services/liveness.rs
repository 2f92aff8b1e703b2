use std::cell::Cell;
use std::rc::Rc;

/// Tracks whether the component that spawned a request still exists.
///
/// A component keeps one `Liveness`, hands `token()` clones to the futures it
/// spawns and calls `revoke` from `destroy`. A completion checks `is_alive`
/// before sending its result back, so a late response is dropped instead of
/// updating a defunct view.
#[derive(Debug, Clone)]
pub struct Liveness(Rc<Cell<bool>>);

impl Liveness {
    pub fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn token(&self) -> Liveness {
        self.clone()
    }

    pub fn is_alive(&self) -> bool {
        self.0.get()
    }

    pub fn revoke(&self) {
        self.0.set(false);
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn revoking_reaches_every_token() {
        let liveness = Liveness::new();
        let token = liveness.token();
        assert!(token.is_alive());

        liveness.revoke();

        assert!(!token.is_alive());
        assert!(!liveness.is_alive());
    }
}
