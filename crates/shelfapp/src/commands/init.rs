use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S) -> Result<CmdResult> {
    let created = store.init()?;
    let location = store.location().display().to_string();

    let mut result = CmdResult::default();
    if created {
        result.add_message(CmdMessage::success(format!(
            "Initialized empty catalog at {location}"
        )));
    } else {
        result.add_message(CmdMessage::info(format!(
            "Catalog already exists at {location}"
        )));
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn initializes_once() {
        let mut store = InMemoryStore::new();
        let first = run(&mut store).unwrap();
        assert!(first.messages[0].content.starts_with("Initialized"));
        let second = run(&mut store).unwrap();
        assert!(second.messages[0].content.contains("already exists"));
    }
}
