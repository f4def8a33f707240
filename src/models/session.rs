use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Teacher,
    Student,
}

impl Role {
    pub fn other(self) -> Role {
        match self {
            Role::Teacher => Role::Student,
            Role::Student => Role::Teacher,
        }
    }
}

/// Who is looking at the platform. Logging in only flips a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub logged_in: bool,
    pub role: Role,
}

impl Session {
    pub fn new(logged_in: bool) -> Self {
        Self {
            logged_in,
            role: Role::default(),
        }
    }

    pub fn login(&mut self) {
        self.logged_in = true;
        info!("session logged in as {:?}", self.role);
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        info!("session logged out");
    }

    pub fn switch_role(&mut self) -> Role {
        self.role = self.role.other();
        info!("switched role to {:?}", self.role);
        self.role
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthSubmission {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub name: String,
    pub role: Option<Role>,
}

/// The login / registration form.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct AuthForm {
    pub mode: AuthMode,
}

impl AuthForm {
    pub fn toggle_mode(&mut self) -> AuthMode {
        self.mode = match self.mode {
            AuthMode::Login => AuthMode::Register,
            AuthMode::Register => AuthMode::Login,
        };
        self.mode
    }

    /// Names of the required fields left empty for the current mode.
    pub fn missing_fields(&self, submission: &AuthSubmission) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.mode == AuthMode::Register {
            if submission.name.trim().is_empty() {
                missing.push("name");
            }
            if submission.role.is_none() {
                missing.push("role");
            }
        }
        if submission.email.trim().is_empty() {
            missing.push("email");
        }
        if submission.password.is_empty() {
            missing.push("password");
        }
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_switch_role_round_trip() {
        let mut session = Session::new(true);
        assert_eq!(session.role, Role::Teacher);
        assert_eq!(session.switch_role(), Role::Student);
        assert_eq!(session.switch_role(), Role::Teacher);
    }

    #[test]
    fn test_login_logout() {
        let mut session = Session::new(false);
        session.login();
        assert!(session.logged_in);
        session.logout();
        assert!(!session.logged_in);
    }

    #[test]
    fn test_register_mode_requires_name_and_role() {
        let mut form = AuthForm::default();
        let submission = AuthSubmission {
            email: "anna@sankids.ru".to_string(),
            password: "secret".to_string(),
            ..Default::default()
        };
        assert!(form.missing_fields(&submission).is_empty());

        assert_eq!(form.toggle_mode(), AuthMode::Register);
        assert_eq!(form.missing_fields(&submission), vec!["name", "role"]);
    }
}
