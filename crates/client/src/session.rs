/// Placeholder user session.
///
/// There is no real authentication anywhere in the system; this flag
/// exists so the editor can gate UI affordances and is the only
/// auth-shaped state that should ever live client-side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserSession {
    pub is_authenticated: bool,
    pub username: String,
}

impl UserSession {
    pub fn sign_in(&mut self, username: impl Into<String>) {
        self.is_authenticated = true;
        self.username = username.into();
    }

    pub fn sign_out(&mut self) {
        self.is_authenticated = false;
        self.username.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_in_and_out() {
        let mut session = UserSession::default();
        assert!(!session.is_authenticated);
        session.sign_in("ada");
        assert!(session.is_authenticated);
        assert_eq!(session.username, "ada");
        session.sign_out();
        assert!(!session.is_authenticated);
        assert!(session.username.is_empty());
    }
}
