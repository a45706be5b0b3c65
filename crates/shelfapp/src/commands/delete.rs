use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, category: &str, id: u64) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    let Some(removed) = store.delete_product(category, id)? else {
        result.add_message(CmdMessage::error(format!(
            "Product not found: {category}/{id}"
        )));
        return Ok(result);
    };

    result.add_message(CmdMessage::success(format!(
        "Product deleted: {category}/{id}"
    )));
    Ok(result.with_affected_products(vec![removed]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn deletes_matching_product() {
        let mut fixture = StoreFixture::new()
            .with_product("shoes", "Sprinter")
            .with_product("shoes", "Hiker");

        let result = run(&mut fixture.store, "shoes", 1).unwrap();
        assert!(!result.has_errors());
        assert_eq!(result.affected_products[0].name, "Sprinter");

        let remaining = fixture.store.list_category("shoes");
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, 2);
    }

    #[test]
    fn unknown_id_is_reported_not_raised() {
        let mut fixture = StoreFixture::new().with_product("shoes", "Sprinter");
        let result = run(&mut fixture.store, "shoes", 99).unwrap();
        assert!(result.has_errors());
        assert!(result.affected_products.is_empty());
        assert_eq!(fixture.store.list_category("shoes").len(), 1);
    }

    #[test]
    fn corrupt_document_is_read_once_per_delete() {
        let mut store = InMemoryStore::new();
        store.backend().set_raw_document("{ not json");

        let result = run(&mut store, "shoes", 1).unwrap();
        assert!(result.has_errors());
        assert_eq!(store.diagnostics().failed_reads, 1);
    }

    #[test]
    fn unknown_category_is_reported_not_raised() {
        let mut fixture = StoreFixture::new().with_product("shoes", "Sprinter");
        let result = run(&mut fixture.store, "hats", 1).unwrap();
        assert!(result.has_errors());
    }
}
