use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::DataStore;

/// Every category with its products.
pub fn all<S: DataStore>(store: &S) -> Result<CmdResult> {
    let catalog = store.load_catalog();
    let categories = catalog.keys().cloned().collect();
    Ok(CmdResult::default()
        .with_catalog(catalog)
        .with_categories(categories))
}

/// Products of one category, in rank order.
pub fn category<S: DataStore>(store: &S, category: &str) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed_products(store.list_category(category))
        .with_categories(vec![category.to_string()]))
}

/// Category keys only.
pub fn categories<S: DataStore>(store: &S) -> Result<CmdResult> {
    Ok(CmdResult::default().with_categories(store.categories()))
}
