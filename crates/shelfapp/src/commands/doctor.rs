use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let report = store.check();
    let diagnostics = store.diagnostics();
    let mut result = CmdResult::default();
    let location = report.location.display().to_string();

    if !report.exists {
        result.add_message(CmdMessage::info(format!(
            "No catalog at {location} yet; it is created on the first add."
        )));
    } else if let Some(error) = &report.error {
        result.add_message(CmdMessage::error(format!(
            "Catalog at {location} is unreadable and is being served as empty: {error}"
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "{} products in {} categories ({location})",
            report.products, report.categories
        )));
    }

    for (category, id) in &report.duplicate_ids {
        result.add_message(CmdMessage::error(format!(
            "Duplicate id {id} in category {category}"
        )));
    }
    for (category, id) in &report.misfiled {
        result.add_message(CmdMessage::warning(format!(
            "Product {category}/{id} names a different category"
        )));
    }
    for category in &report.empty_categories {
        result.add_message(CmdMessage::info(format!("Category {category} is empty")));
    }
    if diagnostics.failed_reads > 0 {
        result.add_message(CmdMessage::warning(format!(
            "{} read(s) fell back to an empty catalog",
            diagnostics.failed_reads
        )));
    }

    if report.is_healthy() {
        result.add_message(CmdMessage::success("Catalog is healthy"));
    }
    result.health = Some(report);
    Ok(result)
}
