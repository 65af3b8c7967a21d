//! Login session and permission gates

use tracing::info;

use crate::core::error::{AerocodeError, Result};
use crate::core::repository::Repository;
use crate::entities::{Employee, PermissionLevel};

/// The employee currently logged in, if any
///
/// One session exists per shell; it is passed into every gated operation.
#[derive(Debug, Clone, Default)]
pub struct Session {
    current: Option<Employee>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session already logged in as `employee`
    pub fn logged_in(employee: Employee) -> Self {
        Self {
            current: Some(employee),
        }
    }

    pub fn current_user(&self) -> Option<&Employee> {
        self.current.as_ref()
    }

    /// Log in by exact username and password
    ///
    /// A failed attempt keeps whoever was logged in before.
    pub fn login(&mut self, repo: &Repository, username: &str, password: &str) -> Result<&Employee> {
        let employee = repo
            .authenticate(username, password)
            .ok_or(AerocodeError::InvalidCredentials)?
            .clone();

        info!(username = %employee.username, level = %employee.permission_level, "logged in");
        Ok(self.current.insert(employee))
    }

    /// Fail unless someone is logged in
    pub fn require_login(&self) -> Result<&Employee> {
        self.current.as_ref().ok_or(AerocodeError::Unauthenticated)
    }

    /// Fail unless the logged-in employee holds one of `allowed`
    pub fn require_level(&self, allowed: &[PermissionLevel]) -> Result<&Employee> {
        let employee = self.require_login()?;
        if !employee.has_any_level(allowed) {
            return Err(AerocodeError::InsufficientPermission {
                level: employee.permission_level,
                allowed: allowed.to_vec(),
            });
        }
        Ok(employee)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn employee(id: &str, username: &str, level: PermissionLevel) -> Employee {
        Employee {
            id: id.to_string(),
            name: format!("Employee {id}"),
            phone: String::new(),
            address: String::new(),
            username: username.to_string(),
            password: "pw".to_string(),
            permission_level: level,
        }
    }

    #[test]
    fn test_require_login_when_logged_out() {
        let session = Session::new();
        assert!(matches!(
            session.require_login(),
            Err(AerocodeError::Unauthenticated)
        ));
        assert!(matches!(
            session.require_level(PermissionLevel::ANY),
            Err(AerocodeError::Unauthenticated)
        ));
    }

    #[test]
    fn test_require_level() {
        let session = Session::logged_in(employee("F1", "op", PermissionLevel::Operator));
        assert!(session.require_level(PermissionLevel::ANY).is_ok());
        assert!(matches!(
            session.require_level(PermissionLevel::ENGINEERING),
            Err(AerocodeError::InsufficientPermission {
                level: PermissionLevel::Operator,
                ..
            })
        ));
    }

    #[test]
    fn test_login() {
        let dir = tempdir().unwrap();
        let mut repo = Repository::open(dir.path());
        repo.register_employee(employee("F1", "ana", PermissionLevel::Engineer))
            .unwrap();

        let mut session = Session::new();
        let user = session.login(&repo, "ana", "pw").unwrap();
        assert_eq!(user.id, "F1");
        assert_eq!(session.current_user().map(|e| e.id.as_str()), Some("F1"));
    }

    #[test]
    fn test_failed_login_keeps_previous_user() {
        let dir = tempdir().unwrap();
        let mut repo = Repository::open(dir.path());
        repo.register_employee(employee("F1", "ana", PermissionLevel::Engineer))
            .unwrap();

        let mut session = Session::new();
        session.login(&repo, "ana", "pw").unwrap();
        assert!(matches!(
            session.login(&repo, "ana", "wrong"),
            Err(AerocodeError::InvalidCredentials)
        ));
        assert_eq!(session.current_user().map(|e| e.id.as_str()), Some("F1"));
    }
}
