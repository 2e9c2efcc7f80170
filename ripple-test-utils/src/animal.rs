// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Animal {
    pub name: String,
    pub legs: u32,
}

impl Animal {
    pub fn new(name: impl Into<String>, legs: u32) -> Self {
        Self {
            name: name.into(),
            legs,
        }
    }
}

impl fmt::Display for Animal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} with {} legs", self.name, self.legs)
    }
}
