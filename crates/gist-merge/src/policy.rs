//! Field merge policies
//!
//! The building blocks every document applier is assembled from:
//!
//! | policy              | absent / empty update | present update                 |
//! |---------------------|-----------------------|--------------------------------|
//! | [`overwrite`]       | keep                  | replace                        |
//! | [`overwrite_nullable`] | keep               | replace, `null` clears         |
//! | [`append`]          | keep                  | concatenate after current      |
//! | [`merge_keyed`]     | keep                  | patch matches by id, then add  |

use gist_model::Keyed;

/// Partial entity applied to the entity with the same id
pub trait Patch<E> {
    /// Id of the entity this patch targets
    fn target_id(&self) -> &str;

    /// Apply present fields to `entity`
    ///
    /// Implementations use the same policies as top-level fields: scalars
    /// overwrite, lists append.
    fn apply_to(&self, entity: &mut E);
}

/// Replace `slot` when a value is present
#[inline]
pub fn overwrite<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

/// Replace a nullable `slot` when the key is present; `Some(None)` clears it
#[inline]
#[allow(clippy::ref_option)]
pub fn overwrite_nullable<T: Clone>(slot: &mut Option<T>, value: &Option<Option<T>>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}

/// Concatenate `items` after `list`, preserving order
#[inline]
pub fn append<T: Clone>(list: &mut Vec<T>, items: &[T]) {
    list.extend_from_slice(items);
}

/// Outcome of a keyed merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyedOutcome {
    /// Entities appended from the add list
    pub added: usize,
    /// Patches that matched at least one entity
    pub patched: usize,
    /// Patches whose id matched nothing
    pub skipped: usize,
}

/// Merge an id-keyed entity collection
///
/// Patches are matched against the collection as it was before this merge,
/// so a patch never targets an entity added by the same update. Unknown ids
/// are skipped; no entity is ever created from a patch. Adds are appended
/// verbatim, in order.
pub fn merge_keyed<E, P>(entities: &mut Vec<E>, adds: &[E], patches: &[P]) -> KeyedOutcome
where
    E: Keyed + Clone,
    P: Patch<E>,
{
    let mut outcome = KeyedOutcome::default();

    for patch in patches {
        let mut matched = false;
        for entity in entities.iter_mut().filter(|e| e.id() == patch.target_id()) {
            patch.apply_to(entity);
            matched = true;
        }
        if matched {
            outcome.patched += 1;
        } else {
            tracing::debug!("Skipping update for unknown id: {}", patch.target_id());
            outcome.skipped += 1;
        }
    }

    append(entities, adds);
    outcome.added = adds.len();

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Card {
        id: String,
        label: String,
        tags: Vec<String>,
    }

    impl Keyed for Card {
        fn id(&self) -> &str {
            &self.id
        }
    }

    struct CardPatch {
        id: String,
        label: Option<String>,
        tags: Vec<String>,
    }

    impl Patch<Card> for CardPatch {
        fn target_id(&self) -> &str {
            &self.id
        }

        fn apply_to(&self, entity: &mut Card) {
            overwrite(&mut entity.label, self.label.as_ref());
            append(&mut entity.tags, &self.tags);
        }
    }

    fn card(id: &str) -> Card {
        Card {
            id: id.to_string(),
            label: id.to_uppercase(),
            tags: vec!["seed".to_string()],
        }
    }

    #[test]
    fn overwrite_keeps_on_absent() {
        let mut slot = "a".to_string();
        overwrite(&mut slot, None);
        assert_eq!(slot, "a");
        overwrite(&mut slot, Some(&"b".to_string()));
        assert_eq!(slot, "b");
    }

    #[test]
    fn overwrite_nullable_tri_state() {
        let mut slot = Some(1);
        overwrite_nullable(&mut slot, &None);
        assert_eq!(slot, Some(1));
        overwrite_nullable(&mut slot, &Some(Some(2)));
        assert_eq!(slot, Some(2));
        overwrite_nullable(&mut slot, &Some(None));
        assert_eq!(slot, None);
    }

    #[test]
    fn append_preserves_order() {
        let mut list = vec![1, 2];
        append(&mut list, &[]);
        assert_eq!(list, [1, 2]);
        append(&mut list, &[3, 4]);
        assert_eq!(list, [1, 2, 3, 4]);
    }

    #[test]
    fn keyed_patch_overwrites_scalars_and_appends_lists() {
        let mut cards = vec![card("a"), card("b")];
        let outcome = merge_keyed(
            &mut cards,
            &[],
            &[CardPatch {
                id: "b".to_string(),
                label: Some("Bee".to_string()),
                tags: vec!["new".to_string()],
            }],
        );

        assert_eq!(outcome, KeyedOutcome { added: 0, patched: 1, skipped: 0 });
        assert_eq!(cards[0], card("a"));
        assert_eq!(cards[1].label, "Bee");
        assert_eq!(cards[1].tags, ["seed", "new"]);
    }

    #[test]
    fn keyed_unknown_id_is_skipped() {
        let mut cards = vec![card("a")];
        let outcome = merge_keyed(
            &mut cards,
            &[],
            &[CardPatch {
                id: "zz".to_string(),
                label: Some("Ghost".to_string()),
                tags: Vec::new(),
            }],
        );

        assert_eq!(outcome.skipped, 1);
        assert_eq!(cards, vec![card("a")]);
    }

    #[test]
    fn keyed_patch_does_not_target_same_update_adds() {
        let mut cards = vec![card("a")];
        let outcome = merge_keyed(
            &mut cards,
            &[card("b")],
            &[CardPatch {
                id: "b".to_string(),
                label: Some("Bee".to_string()),
                tags: Vec::new(),
            }],
        );

        assert_eq!(outcome, KeyedOutcome { added: 1, patched: 0, skipped: 1 });
        assert_eq!(cards[1], card("b"));
    }
}
