use std::fmt;

use thiserror::Error;

// shared page fragments
//
// every page carries empty placeholder divs which the loader fills from /components/ before
// any of the navbar features are bound
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FragmentName {
    Navbar,
    Footer,
}

impl FragmentName {
    pub const ALL: [FragmentName; 2] = [FragmentName::Navbar, FragmentName::Footer];

    pub fn as_str(self) -> &'static str {
        match self {
            FragmentName::Navbar => "navbar",
            FragmentName::Footer => "footer",
        }
    }

    pub fn path(self) -> String {
        format!("/components/{}.html", self.as_str())
    }

    pub fn container_id(self) -> String {
        format!("{}-container", self.as_str())
    }
}

impl fmt::Display for FragmentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// both variants mean the same thing to the page, which is that the region stays empty
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FragmentError {
    #[error("fragment unavailable: {0}")]
    Transport(String),
    #[error("fragment unavailable: status {0}")]
    Status(u16),
}

pub fn check_status(status: u16) -> Result<(), FragmentError> {
    if (200..300).contains(&status) {
        Ok(())
    } else {
        Err(FragmentError::Status(status))
    }
}
