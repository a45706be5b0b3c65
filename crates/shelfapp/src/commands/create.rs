use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::NewProduct;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, product: NewProduct) -> Result<CmdResult> {
    let product = store.add_product(product)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Product added ({}/{}): {}",
        product.category, product.id, product.name
    )));
    Ok(result.with_affected_products(vec![product]))
}
