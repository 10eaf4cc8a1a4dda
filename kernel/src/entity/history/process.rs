use std::fmt::{Display, Formatter};
use std::str::FromStr;

use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

const USE: &str = "USE";
const CLEAR: &str = "CLEAR";

#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Process {
    #[serde(rename = "USE")]
    Use,
    #[serde(rename = "CLEAR")]
    Clear,
}

impl Process {
    pub fn as_str(&self) -> &'static str {
        match self {
            Process::Use => USE,
            Process::Clear => CLEAR,
        }
    }
}

impl Display for Process {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Process {
    type Err = Report<KernelError>;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            USE => Ok(Process::Use),
            CLEAR => Ok(Process::Clear),
            _ => Err(Report::new(KernelError::Internal)
                .attach_printable(format!("Unknown process state: {s}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use super::Process;

    #[test]
    fn parses_stored_names() {
        assert_eq!("USE".parse::<Process>().unwrap(), Process::Use);
        assert_eq!("CLEAR".parse::<Process>().unwrap(), Process::Clear);
        assert!("use".parse::<Process>().is_err());
        assert!("RETURNED".parse::<Process>().is_err());
    }

    #[test]
    fn display_matches_stored_name() {
        for process in [Process::Use, Process::Clear] {
            assert_eq!(process.to_string().parse::<Process>().unwrap(), process);
        }
    }
}
