// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use crate::{animal::Animal, person::Person, plant::Plant};
use lazyflow_core::Pipeline;
use std::fmt::{self, Display};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataVariant {
    Animal,
    Person,
    Plant,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestData {
    Person(Person),
    Animal(Animal),
    Plant(Plant),
}

impl TestData {
    #[must_use]
    pub const fn variant(&self) -> DataVariant {
        match self {
            Self::Person(_) => DataVariant::Person,
            Self::Animal(_) => DataVariant::Animal,
            Self::Plant(_) => DataVariant::Plant,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Person(p) => &p.name,
            Self::Animal(a) => &a.name,
            Self::Plant(p) => &p.species,
        }
    }
}

pub fn person_alice() -> TestData {
    TestData::Person(Person::new("Alice".to_string(), 25))
}

pub fn person_bob() -> TestData {
    TestData::Person(Person::new("Bob".to_string(), 30))
}

pub fn person_charlie() -> TestData {
    TestData::Person(Person::new("Charlie".to_string(), 35))
}

pub fn person_diane() -> TestData {
    TestData::Person(Person::new("Diane".to_string(), 40))
}

pub fn animal_dog() -> TestData {
    TestData::Animal(Animal::new("Dog".to_string(), 4))
}

pub fn animal_cat() -> TestData {
    TestData::Animal(Animal::new("Cat".to_string(), 4))
}

pub fn animal_spider() -> TestData {
    TestData::Animal(Animal::new("Spider".to_string(), 8))
}

pub fn animal_bird() -> TestData {
    TestData::Animal(Animal::new("Bird".to_string(), 2))
}

pub fn plant_rose() -> TestData {
    TestData::Plant(Plant::new("Rose".to_string(), 15))
}

pub fn plant_fern() -> TestData {
    TestData::Plant(Plant::new("Fern".to_string(), 150))
}

pub fn plant_oak() -> TestData {
    TestData::Plant(Plant::new("Oak".to_string(), 1000))
}

/// Alice, Bob, Charlie and Diane, in that order.
pub fn people() -> Vec<Person> {
    [person_alice(), person_bob(), person_charlie(), person_diane()]
        .into_iter()
        .filter_map(|data| match data {
            TestData::Person(p) => Some(p),
            _ => None,
        })
        .collect()
}

/// An interleaving of every variant: person, animal, plant, person, animal, plant.
pub fn mixed() -> Vec<TestData> {
    vec![
        person_alice(),
        animal_dog(),
        plant_rose(),
        person_bob(),
        animal_spider(),
        plant_oak(),
    ]
}

pub fn mixed_pipeline() -> Pipeline<TestData> {
    Pipeline::from_vec(mixed())
}

impl Display for TestData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestData::Person(p) => write!(f, "{}", p),
            TestData::Animal(a) => write!(f, "{}", a),
            TestData::Plant(p) => write!(f, "{}", p),
        }
    }
}
