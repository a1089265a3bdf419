#![allow(dead_code)]

use gridify::{Gridifiable, MemoryQuery};
use uuid::Uuid;

pub const JOHN_GUID: &str = "e2cec5dd-208d-4bb5-a852-1a9900cf4377";

#[derive(Debug, Clone, PartialEq)]
pub struct Child {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Gridifiable)]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub guid: Option<Uuid>,
    pub tags: Vec<String>,
    #[gridify(skip)]
    pub child: Option<Child>,
}

fn person(id: i64, name: &str, guid: Option<&str>, tags: &[&str]) -> Person {
    Person {
        id,
        name: name.to_owned(),
        guid: guid.map(|raw| raw.parse().expect("fixture guid")),
        tags: tags.iter().map(|tag| (*tag).to_owned()).collect(),
        child: None,
    }
}

/// The 22-record seed dataset.
pub fn seed() -> Vec<Person> {
    vec![
        person(1, "John", Some(JOHN_GUID), &["staff"]),
        person(2, "Jack", None, &["staff", "admin"]),
        person(3, "Rose", Some("7b1f9c4e-0d2a-4f6b-8c3d-5e7a9b1c2d4f"), &[]),
        person(4, "Sara", None, &["ops"]),
        person(5, "Liam", None, &[]),
        person(6, "Bob", None, &[]),
        person(7, "Nora", None, &[]),
        person(8, "Omar", None, &[]),
        person(9, "Kate", None, &[]),
        person(10, "Sam", None, &[]),
        person(11, "Noah", None, &[]),
        person(12, "Tina", None, &[]),
        person(13, "Adam", None, &[]),
        person(14, "Ruth", None, &[]),
        person(15, "Hugo", None, &[]),
        person(16, "Ivy", None, &[]),
        person(17, "Finn", None, &[]),
        person(18, "Owen", None, &[]),
        person(19, "Mia", None, &[]),
        person(20, "Theo", None, &[]),
        person(21, "Zara", None, &[]),
        person(22, "Josh", None, &[]),
    ]
}

pub fn query() -> MemoryQuery<Person> {
    MemoryQuery::new(seed())
}

pub fn ids(people: &[Person]) -> Vec<i64> {
    people.iter().map(|person| person.id).collect()
}

pub fn names(people: &[Person]) -> Vec<&str> {
    people.iter().map(|person| person.name.as_str()).collect()
}
