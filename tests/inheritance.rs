use fieldwise::{StructuralEq, describe, equal};
use core::ops::Deref;

#[derive(StructuralEq, Debug)]
struct Entity {
    id: u64,
    name: String,
}

/// An `Entity` with an extra field, reachable as `Entity` through `Deref`.
#[derive(StructuralEq, Debug)]
struct Employee {
    #[structural(flatten)]
    entity: Entity,
    salary: u32,
}

impl Deref for Employee {
    type Target = Entity;

    fn deref(&self) -> &Entity {
        &self.entity
    }
}

#[derive(StructuralEq, Debug)]
struct Manager {
    #[structural(flatten)]
    employee: Employee,
    reports: u16,
}

fn employee(id: u64, name: &str, salary: u32) -> Employee {
    Employee {
        entity: Entity {
            id,
            name: name.to_string(),
        },
        salary,
    }
}

#[test]
fn flattened_fields_are_listed_in_declaration_order() {
    let descriptor = describe::<Manager>().unwrap();
    let names = descriptor
        .fields()
        .iter()
        .map(|field| field.name())
        .collect::<Vec<_>>();
    assert_eq!(
        names,
        [
            "employee.entity.id",
            "employee.entity.name",
            "employee.salary",
            "reports"
        ]
    );
}

#[test]
fn derived_comparator_sees_every_field() {
    assert!(equal(&employee(1, "ada", 10), &employee(1, "ada", 10)));
    assert!(!equal(&employee(1, "ada", 10), &employee(1, "ada", 20)));
    assert!(!equal(&employee(1, "ada", 10), &employee(1, "bob", 10)));
}

#[test]
fn base_comparator_ignores_derived_fields() {
    let a = employee(1, "ada", 10);
    let b = employee(1, "ada", 20);
    assert!(equal::<Entity>(&a, &b));
    assert!(!equal::<Employee>(&a, &b));
    assert!(!equal::<Entity>(&a, &employee(2, "ada", 10)));
}

#[test]
fn multi_level_ancestry() {
    let manager = |id, reports| Manager {
        employee: employee(id, "grace", 30),
        reports,
    };
    assert!(equal(&manager(1, 3), &manager(1, 3)));
    assert!(!equal(&manager(1, 3), &manager(2, 3)));
    assert!(!equal(&manager(1, 3), &manager(1, 4)));
    assert!(equal::<Employee>(&manager(1, 3).employee, &manager(1, 4).employee));
}
