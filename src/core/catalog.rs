//! Catalog browsing business logic.
//!
//! Produces the per-student class listing for one catalog page: every
//! currently-offered class in the page's categories, annotated with whether
//! the student already holds an unpaid selection for it. The caller decides
//! which categories make up a page (see [`crate::config::categories`]) and
//! supplies the target year explicitly.

use crate::{
    entities::{Class, StudentClass, class, student_class},
    errors::Result,
};
use sea_orm::{Condition, QueryOrder, prelude::*};
use serde::Serialize;
use std::collections::HashMap;

/// One catalog row: the full catalog entry plus the selection annotation.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogEntry {
    /// The catalog class itself
    #[serde(flatten)]
    pub class: class::Model,
    /// Count of the student's unpaid, non-removed selections for this class
    /// in the target year (0 or 1 in practice; a count rather than a bool to
    /// mirror the aggregate the frontend was built against)
    pub class_selected: i64,
}

/// Returns all currently-offered classes in the given categories, annotated
/// with the student's pending selections.
///
/// Ordering is by the position of each entry's category within
/// `category_order` (the page's display priority), then by the entry's
/// `weight` ascending. Categories absent from `category_order` are filtered
/// out entirely.
///
/// The selection annotation counts only rows that are unpaid (`paid` 0 or
/// NULL), not removed, and target `year`; waitlisted rows still count, since
/// the frontend uses the annotation to grey out checkboxes.
pub async fn classes_by_category(
    db: &DatabaseConnection,
    category_order: &[String],
    student_id: i64,
    year: i32,
) -> Result<Vec<CatalogEntry>> {
    let classes = Class::find()
        .filter(class::Column::Category.is_in(category_order.iter().map(String::as_str)))
        .order_by_asc(class::Column::Weight)
        .all(db)
        .await?;

    let selections = StudentClass::find()
        .filter(student_class::Column::StudentId.eq(student_id))
        .filter(student_class::Column::Year.eq(year))
        .filter(student_class::Column::Removed.eq(0))
        .filter(
            Condition::any()
                .add(student_class::Column::Paid.eq(0))
                .add(student_class::Column::Paid.is_null()),
        )
        .all(db)
        .await?;

    let mut selected_counts: HashMap<i64, i64> = HashMap::new();
    for selection in &selections {
        *selected_counts.entry(selection.class_id).or_insert(0) += 1;
    }

    let rank: HashMap<&str, usize> = category_order
        .iter()
        .enumerate()
        .map(|(position, category)| (category.as_str(), position))
        .collect();

    let mut entries: Vec<CatalogEntry> = classes
        .into_iter()
        .map(|class| {
            let class_selected = selected_counts.get(&class.class_id).copied().unwrap_or(0);
            CatalogEntry {
                class,
                class_selected,
            }
        })
        .collect();

    entries.sort_by_key(|entry| {
        let position = rank
            .get(entry.class.category.as_str())
            .copied()
            .unwrap_or(category_order.len());
        (position, entry.class.weight)
    });

    Ok(entries)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::registration::select_class;
    use crate::test_utils::*;

    fn order(categories: &[&str]) -> Vec<String> {
        categories.iter().map(ToString::to_string).collect()
    }

    #[tokio::test]
    async fn test_category_position_beats_weight() -> Result<()> {
        let (db, _family, student) = setup_with_student().await?;

        // Equal weight, CSL inserted before LC
        let csl = create_test_class(&db, "CSL", 10, "Chinese as a Second Language").await?;
        let lc = create_test_class(&db, "LC", 10, "Language Class 1A").await?;

        let entries =
            classes_by_category(&db, &order(&["LC", "CSL"]), student.student_id, 2024).await?;

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].class.class_id, lc.class_id);
        assert_eq!(entries[1].class.class_id, csl.class_id);
        Ok(())
    }

    #[tokio::test]
    async fn test_weight_orders_within_category() -> Result<()> {
        let (db, _family, student) = setup_with_student().await?;

        let heavy = create_test_class(&db, "LC", 30, "Language Class 3A").await?;
        let light = create_test_class(&db, "LC", 10, "Language Class 1A").await?;
        let middle = create_test_class(&db, "LC", 20, "Language Class 2A").await?;

        let entries = classes_by_category(&db, &order(&["LC"]), student.student_id, 2024).await?;

        let ids: Vec<i64> = entries.iter().map(|e| e.class.class_id).collect();
        assert_eq!(ids, vec![light.class_id, middle.class_id, heavy.class_id]);
        Ok(())
    }

    #[tokio::test]
    async fn test_unlisted_categories_never_appear() -> Result<()> {
        let (db, _family, student) = setup_with_student().await?;

        create_test_class(&db, "LC", 10, "Language Class 1A").await?;
        create_test_class(&db, "EP", 10, "Chess Club").await?;

        let entries = classes_by_category(&db, &order(&["LC"]), student.student_id, 2024).await?;

        assert!(entries.iter().all(|e| e.class.category == "LC"));
        assert_eq!(entries.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_selection_annotation_counts_pending_rows() -> Result<()> {
        let (db, _family, student) = setup_with_student().await?;

        let selected = create_test_class(&db, "LC", 10, "Language Class 1A").await?;
        let unselected = create_test_class(&db, "LC", 20, "Language Class 2A").await?;
        select_class(&db, student.student_id, selected.class_id, 2024, test_now()).await?;

        let entries = classes_by_category(&db, &order(&["LC"]), student.student_id, 2024).await?;

        let by_id: HashMap<i64, i64> = entries
            .iter()
            .map(|e| (e.class.class_id, e.class_selected))
            .collect();
        assert_eq!(by_id[&selected.class_id], 1);
        assert_eq!(by_id[&unselected.class_id], 0);
        Ok(())
    }

    #[tokio::test]
    async fn test_paid_and_removed_selections_not_annotated() -> Result<()> {
        let (db, _family, student) = setup_with_student().await?;

        let paid_class = create_test_class(&db, "LC", 10, "Language Class 1A").await?;
        let removed_class = create_test_class(&db, "LC", 20, "Language Class 2A").await?;
        create_paid_selection(
            &db,
            student.student_id,
            paid_class.class_id,
            2024,
            rust_decimal::Decimal::from(150),
        )
        .await?;
        let removed = select_class(
            &db,
            student.student_id,
            removed_class.class_id,
            2024,
            test_now(),
        )
        .await?;
        mark_selection_removed(&db, removed.sc_id).await?;

        let entries = classes_by_category(&db, &order(&["LC"]), student.student_id, 2024).await?;

        assert!(entries.iter().all(|e| e.class_selected == 0));
        Ok(())
    }

    #[tokio::test]
    async fn test_other_year_selection_not_annotated() -> Result<()> {
        let (db, _family, student) = setup_with_student().await?;

        let class = create_test_class(&db, "LC", 10, "Language Class 1A").await?;
        select_class(&db, student.student_id, class.class_id, 2023, test_now()).await?;

        let entries = classes_by_category(&db, &order(&["LC"]), student.student_id, 2024).await?;

        assert_eq!(entries[0].class_selected, 0);
        Ok(())
    }
}
