//! Field-by-field conversions between the `banks` row and the domain types.

use models::bank;
use uuid::Uuid;

use super::domain::{Bank, BankRecord};

pub fn to_domain(entity: &bank::Model) -> Bank {
    Bank { name: entity.name.clone(), location: entity.location.clone() }
}

pub fn to_record(entity: bank::Model) -> BankRecord {
    let bank = to_domain(&entity);
    BankRecord { id: entity.id, bank }
}

/// New row for a bank that has never been stored; assigns a fresh v4 id.
pub fn to_new_entity(bank: &Bank) -> bank::Model {
    bank::Model {
        id: Uuid::new_v4().to_string(),
        name: bank.name.clone(),
        location: bank.location.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_to_record_keeps_every_field() {
        let entity = bank::Model { id: "abc".into(), name: "Bank A".into(), location: "London".into() };
        assert_eq!(to_domain(&entity), Bank::new("Bank A", "London"));

        let rec = to_record(entity);
        assert_eq!(rec.id, "abc");
        assert_eq!(rec.bank, Bank::new("Bank A", "London"));
    }

    #[test]
    fn new_entities_get_distinct_uuid_ids() {
        let bank = Bank::new("Bank A", "London");
        let a = to_new_entity(&bank);
        let b = to_new_entity(&bank);
        assert_ne!(a.id, b.id);
        let parsed = Uuid::parse_str(&a.id).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
        assert_eq!(a.name, "Bank A");
        assert_eq!(a.location, "London");
    }
}
