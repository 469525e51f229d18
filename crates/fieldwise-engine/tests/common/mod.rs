//! Shared record fixtures for the engine tests.
//!
//! Compiled once per test binary; not every binary uses every fixture.
#![allow(dead_code)]

use fieldwise_core::model::{DeclaredMapping, IntoValue, PropertySpec, Value};
use fieldwise_core::record::Record;

/// Plain two-property record used by most scenarios
pub struct Person {
    pub name: String,
    pub age: i32,
}

impl Person {
    pub fn new(name: &str, age: i32) -> Self {
        Self {
            name: name.to_string(),
            age,
        }
    }
}

impl Record for Person {
    fn properties() -> Vec<PropertySpec> {
        vec![
            PropertySpec::of("Name", |p: &Person| p.name.clone()),
            PropertySpec::of("Age", |p: &Person| p.age),
        ]
    }
}

/// Destination shape where the age is a differently named string
pub struct AgeDto {
    pub name: String,
    pub years_old: String,
}

impl Record for AgeDto {
    fn properties() -> Vec<PropertySpec> {
        vec![
            PropertySpec::of("Name", |d: &AgeDto| d.name.clone()),
            PropertySpec::of("YearsOld", |d: &AgeDto| d.years_old.clone()),
        ]
    }
}

/// Destination shape with no age property at all
pub struct Slim {
    pub name: String,
}

impl Record for Slim {
    fn properties() -> Vec<PropertySpec> {
        vec![PropertySpec::of("Name", |s: &Slim| s.name.clone())]
    }
}

/// Domain value type with no default comparer
#[derive(Clone, Copy)]
pub struct Temperature(pub f64);

impl IntoValue for Temperature {
    fn into_value(self) -> Value {
        Value::Float(self.0)
    }
}

/// Record holding a custom-typed property
pub struct Reading {
    pub celsius: Temperature,
}

impl Record for Reading {
    fn properties() -> Vec<PropertySpec> {
        vec![PropertySpec::of("Celsius", |r: &Reading| r.celsius)]
    }
}

/// Record with a float property, for incomparable-value scenarios
pub struct Measurement {
    pub value: f64,
}

impl Record for Measurement {
    fn properties() -> Vec<PropertySpec> {
        vec![PropertySpec::of("Value", |m: &Measurement| m.value)]
    }
}

/// Source record declaring its own mapping against [`TaggedDest`]
pub struct TaggedSource {
    pub id: i64,
}

/// Destination for [`TaggedSource`]'s declared mapping
pub struct TaggedDest {
    pub ident: i64,
}

impl Record for TaggedSource {
    fn properties() -> Vec<PropertySpec> {
        vec![PropertySpec::of("Id", |t: &TaggedSource| t.id)]
    }

    fn declared_mappings() -> Vec<DeclaredMapping> {
        vec![DeclaredMapping::to_property::<TaggedDest>("Id", "Ident")]
    }
}

impl Record for TaggedDest {
    fn properties() -> Vec<PropertySpec> {
        vec![PropertySpec::of("Ident", |t: &TaggedDest| t.ident)]
    }
}
