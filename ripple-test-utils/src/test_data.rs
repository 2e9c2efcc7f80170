// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{animal::Animal, person::Person};
use std::fmt::{self, Display};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice", 25))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob", 30))
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person::new("Charlie", 35))
}

pub fn person_diane() -> TestData {
    TestData::Person(Person::new("Diane", 40))
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal::new("Dog", 4))
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal::new("Spider", 8))
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal::new("Bird", 2))
}

pub fn person(name: impl Into<String>, age: u32) -> TestData {
    TestData::Person(Person::new(name, age))
}

pub fn animal(name: impl Into<String>, legs: u32) -> TestData {
    TestData::Animal(Animal::new(name, legs))
}

impl TestData {
    /// The person's or animal's name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Animal(a) => &a.name,
        }
    }
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Person(p) => write!(f, "{p}"),
            Self::Animal(a) => write!(f, "{a}"),
        }
    }
}
