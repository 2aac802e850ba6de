use std::io::{self, Write};

use serde::{Serialize, Deserialize};

pub const EATING_NOTICE: &str = "Eating...";
pub const SLEEPING_NOTICE: &str = "Sleeping...";

/// A generic animal. Fields are public and carry no invariants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Animal {
    pub name: String,
    pub number_of_legs: i32,
    pub hungry: bool,
}

impl Animal {
    pub fn new(name: impl Into<String>, number_of_legs: i32, hungry: bool) -> Self {
        Self {
            name: name.into(),
            number_of_legs,
            hungry,
        }
    }

    pub fn eat(&self) {
        let _ = self.write_eat(&mut io::stdout().lock());
    }

    pub fn write_eat<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", EATING_NOTICE)
    }

    pub fn sleep(&self) {
        let _ = self.write_sleep(&mut io::stdout().lock());
    }

    pub fn write_sleep<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", SLEEPING_NOTICE)
    }

    pub fn is_hungry(&self) -> bool {
        self.hungry
    }
}
