use crate::collection::RecordCollection;
use crate::commands::{CmdMessage, CmdResult, DisplayRecord};
use crate::error::Result;
use crate::schema::Field;
use crate::session::EditSession;

use super::helpers::{resolve_index, stage_all};

pub fn run(
    collection: &mut RecordCollection,
    display_index: usize,
    values: &[(Field, String)],
) -> Result<CmdResult> {
    let position = resolve_index(collection, display_index)?;
    let mut session = EditSession::begin_edit(collection, position)?;
    let mut result = CmdResult::default();

    if values.is_empty() {
        session.cancel()?;
        result.add_message(CmdMessage::info("Nothing to change."));
        return Ok(result);
    }

    stage_all(&mut session, values)?;
    if session.working()? == collection.get(position)? {
        session.cancel()?;
        result.add_message(CmdMessage::info(format!(
            "Contact unchanged ({})",
            display_index
        )));
        return Ok(result);
    }

    let commit = session.confirm()?;
    let record = commit.record.clone();
    collection.commit(commit)?;

    result.add_message(CmdMessage::success(format!(
        "Contact updated ({}): {}",
        display_index,
        record.display_name()
    )));
    Ok(result.with_affected_records(vec![DisplayRecord::at(position, record)]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fixtures::contacts;

    #[test]
    fn updates_only_the_target() {
        let mut collection = RecordCollection::with_records(contacts());
        run(
            &mut collection,
            2,
            &[
                (Field::City, "Thun".to_string()),
                (Field::PostalCode, "3600".to_string()),
            ],
        )
        .unwrap();

        let after = collection.snapshot();
        assert_eq!(after.len(), 3);
        assert_eq!(after[1].city, "Thun");
        assert_eq!(after[1].postal_code, 3600);
        assert_eq!(after[1].first_name, "Ruth");
        assert_eq!(after[0], contacts()[0]);
        assert_eq!(after[2], contacts()[2]);
    }

    #[test]
    fn failed_value_leaves_record_intact() {
        let mut collection = RecordCollection::with_records(contacts());
        let result = run(
            &mut collection,
            1,
            &[
                (Field::City, "Basel".to_string()),
                (Field::Birthday, "soon".to_string()),
            ],
        );
        assert!(result.is_err());
        assert_eq!(collection.snapshot(), contacts().as_slice());
    }

    #[test]
    fn no_values_is_a_no_op() {
        let mut collection = RecordCollection::with_records(contacts());
        let result = run(&mut collection, 1, &[]).unwrap();
        assert!(result.affected_records.is_empty());
        assert_eq!(collection.snapshot(), contacts().as_slice());
    }

    #[test]
    fn identical_values_are_reported_unchanged() {
        let mut collection = RecordCollection::with_records(contacts());
        let before = collection.revision(0).unwrap();
        let result = run(&mut collection, 1, &[(Field::City, "Zuerich".to_string())]).unwrap();
        assert_eq!(result.messages[0].content, "Contact unchanged (1)");
        assert_eq!(collection.revision(0).unwrap(), before);
    }

    #[test]
    fn unknown_index_fails() {
        let mut collection = RecordCollection::with_records(contacts());
        assert!(matches!(
            run(&mut collection, 7, &[(Field::City, "Bern".to_string())]),
            Err(crate::error::RolodexError::IndexOutOfRange { index: 6, .. })
        ));
        assert!(run(&mut collection, 0, &[(Field::City, "Bern".to_string())]).is_err());
    }
}
