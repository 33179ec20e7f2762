//! Navigable screens
//!
//! String paths are the contract with the routing layer; everything else
//! in the core works with the `Screen` enum.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A navigable screen of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Login,
    Register,
    Dashboard,
    ReportProblem,
    SubmitComplaint,
    ReportDetails(i64),
    Notifications,
    Profile,
    NotFound,
}

impl Screen {
    /// Map a string path to a screen; unmatched paths resolve to NotFound.
    ///
    /// The root path is auth-dependent and handled by [`Screen::resolve`],
    /// not here.
    pub fn parse(path: &str) -> Screen {
        match path {
            "/login" => Screen::Login,
            "/register" => Screen::Register,
            "/dashboard" => Screen::Dashboard,
            "/report-problem" => Screen::ReportProblem,
            "/submit-complaint" => Screen::SubmitComplaint,
            "/notifications" => Screen::Notifications,
            "/profile" => Screen::Profile,
            _ => {
                if let Some(id) = path.strip_prefix("/report/")
                    && let Ok(id) = id.parse::<i64>()
                {
                    return Screen::ReportDetails(id);
                }
                Screen::NotFound
            }
        }
    }

    /// Full path resolution, including the root redirect:
    /// `/` goes to the dashboard when authenticated, else to login.
    pub fn resolve(path: &str, authenticated: bool) -> Screen {
        if path == "/" {
            if authenticated {
                Screen::Dashboard
            } else {
                Screen::Login
            }
        } else {
            Screen::parse(path)
        }
    }

    /// The string path for this screen
    pub fn path(&self) -> String {
        match self {
            Screen::Login => "/login".to_string(),
            Screen::Register => "/register".to_string(),
            Screen::Dashboard => "/dashboard".to_string(),
            Screen::ReportProblem => "/report-problem".to_string(),
            Screen::SubmitComplaint => "/submit-complaint".to_string(),
            Screen::ReportDetails(id) => format!("/report/{}", id),
            Screen::Notifications => "/notifications".to_string(),
            Screen::Profile => "/profile".to_string(),
            Screen::NotFound => "/404".to_string(),
        }
    }

    /// Everything but login, register and the not-found screen requires
    /// an authenticated session.
    pub fn is_protected(&self) -> bool {
        !matches!(self, Screen::Login | Screen::Register | Screen::NotFound)
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
