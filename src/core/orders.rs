//! Order reporting business logic - summaries and receipt reconstruction.
//!
//! An order is created by the payment layer at checkout; this module only
//! reads it back. `list_orders` and `order_details` drive the statements
//! page. `order_lines` rebuilds a receipt: one line per purchased
//! class-or-activity, an optional sibling discount, and a terminal total.
//! Consumers are document renderers, so the output is a heterogeneous
//! sequence of tagged lines rather than a uniform table.

use crate::{
    entities::{
        Class, Family, Order, OrderStudentClass, Student, StudentClass, VolunteerActivity,
        VolunteerActivityYear, class, order, order_student_class, student, student_class,
        volunteer_activity_year,
    },
    errors::{Error, Result},
};
use rust_decimal::Decimal;
use sea_orm::{Condition, PaginatorTrait, QueryOrder, prelude::*};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Flat per-additional-sibling reduction, in dollars.
const SIBLING_DISCOUNT: i64 = -15;

/// One order on the family's statements page.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    /// The order header
    #[serde(flatten)]
    pub order: order::Model,
    /// How many selections the order covers
    pub number_of_classes: u64,
}

/// A single order header joined with payer identity fields.
#[derive(Debug, Clone, Serialize)]
pub struct OrderDetails {
    /// The order header
    #[serde(flatten)]
    pub order: order::Model,
    /// How many selections the order covers
    pub number_of_classes: u64,
    /// Father's first name
    pub father_fname: Option<String>,
    /// Father's last name
    pub father_lname: Option<String>,
    /// Mother's first name
    pub mother_fname: Option<String>,
    /// Mother's last name
    pub mother_lname: Option<String>,
    /// Father's Chinese name
    pub father_cname: Option<String>,
    /// Mother's Chinese name
    pub mother_cname: Option<String>,
}

/// One line of a reconstructed receipt.
///
/// The discriminant tells renderers what the line is; each variant carries
/// only the fields that apply to it.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderLine {
    /// A purchased class with an enrolled student
    Class(ClassLine),
    /// A family-level volunteer-activity credit (no enrolled student)
    Activity(ActivityLine),
    /// The sibling discount, present only when more than one student billed
    Discount(DiscountLine),
    /// The terminal total, always last
    Total(TotalLine),
}

/// A purchased class line.
#[derive(Debug, Clone, Serialize)]
pub struct ClassLine {
    /// When the order was created
    pub created: DateTimeUtc,
    /// The enrolled student
    pub student_id: i64,
    /// Student's first name
    pub first_name: Option<String>,
    /// Student's last name
    pub last_name: Option<String>,
    /// Student's Chinese name
    pub chinese_name: Option<String>,
    /// The purchased class
    pub class_id: i64,
    /// Price as exact decimal text
    pub paid_price: String,
    /// Class English title
    pub title: Option<String>,
    /// Class Chinese title
    pub chinese_title: Option<String>,
}

/// A volunteer-credit line. The payer stand-in name is always "Family".
#[derive(Debug, Clone, Serialize)]
pub struct ActivityLine {
    /// When the order was created
    pub created: DateTimeUtc,
    /// Payer stand-in display name ("Family")
    pub name: String,
    /// The volunteer activity id carried in the selection's `class_id`
    pub class_id: i64,
    /// Price as exact decimal text
    pub paid_price: String,
    /// Activity display name
    pub title: String,
    /// Passed through from the (absent) class join
    pub chinese_title: Option<String>,
}

/// The sibling discount line.
#[derive(Debug, Clone, Serialize)]
pub struct DiscountLine {
    /// Display name ("Sibling Discount")
    pub name: String,
    /// Signed discount amount, always negative
    pub amount: Decimal,
}

/// The terminal total line.
#[derive(Debug, Clone, Serialize)]
pub struct TotalLine {
    /// Display name ("Total")
    pub name: String,
    /// Sum of every preceding line's amount
    pub amount: Decimal,
}

/// Lists the family's orders sorted by payment status, each annotated with
/// the count of covered selections.
///
/// Orders whose payment status is explicitly 0 are excluded; a NULL status
/// (payment still pending) passes.
pub async fn list_orders(db: &DatabaseConnection, family_id: i64) -> Result<Vec<OrderSummary>> {
    let orders = Order::find()
        .filter(order::Column::FamilyId.eq(family_id))
        .filter(
            Condition::any()
                .add(order::Column::Paid.is_null())
                .add(order::Column::Paid.ne(0)),
        )
        .order_by_asc(order::Column::Paid)
        .all(db)
        .await?;

    let mut summaries = Vec::with_capacity(orders.len());
    for order in orders {
        let number_of_classes = OrderStudentClass::find()
            .filter(order_student_class::Column::OrderId.eq(order.order_id))
            .count(db)
            .await?;
        summaries.push(OrderSummary {
            order,
            number_of_classes,
        });
    }

    Ok(summaries)
}

/// Fetches a single order's header joined with the payer's display names.
///
/// Fails with [`Error::OrderNotFound`] unless the order belongs to the
/// requesting family and has a non-null payment status.
pub async fn order_details(
    db: &DatabaseConnection,
    family_id: i64,
    order_id: i64,
) -> Result<OrderDetails> {
    let order = Order::find()
        .filter(order::Column::OrderId.eq(order_id))
        .filter(order::Column::FamilyId.eq(family_id))
        .filter(order::Column::Paid.is_not_null())
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { order_id })?;

    let family = Family::find_by_id(order.family_id)
        .one(db)
        .await?
        .ok_or(Error::FamilyNotFound { family_id })?;

    let number_of_classes = OrderStudentClass::find()
        .filter(order_student_class::Column::OrderId.eq(order.order_id))
        .count(db)
        .await?;

    Ok(OrderDetails {
        order,
        number_of_classes,
        father_fname: family.father_fname,
        father_lname: family.father_lname,
        mother_fname: family.mother_fname,
        mother_lname: family.mother_lname,
        father_cname: family.father_cname,
        mother_cname: family.mother_cname,
    })
}

/// Reconstructs an order into its priced receipt lines.
///
/// Fails with [`Error::OrderNotFound`] unless the order belongs to the
/// requesting family and has a non-null payment status. Billable class rows
/// additionally require a nonzero payment status: an order with a header but
/// no billable rows still yields a single Total line with amount 0.
///
/// Rows sort by student date of birth descending with volunteer-credit rows
/// (no student) last, then by selection id. A row with no student resolves
/// its title through the volunteer activity tables rather than the class
/// catalog. When more than one distinct student is billed, a sibling
/// discount of `(n - 1) * -15` is appended before the total.
pub async fn order_lines(
    db: &DatabaseConnection,
    family_id: i64,
    order_id: i64,
) -> Result<Vec<OrderLine>> {
    let order = Order::find()
        .filter(order::Column::OrderId.eq(order_id))
        .filter(order::Column::FamilyId.eq(family_id))
        .filter(order::Column::Paid.is_not_null())
        .one(db)
        .await?
        .ok_or(Error::OrderNotFound { order_id })?;

    let rows = if order.paid == Some(0) {
        Vec::new()
    } else {
        billable_rows(db, order.order_id).await?
    };

    let mut lines = Vec::with_capacity(rows.len() + 2);
    let mut total = Decimal::ZERO;
    let mut billed_students: BTreeSet<i64> = BTreeSet::new();

    for (selection, student, class) in rows {
        let price = selection.paid_price.unwrap_or_default();
        total += price;

        match student {
            None => {
                let title = activity_title(db, selection.class_id).await?;
                lines.push(OrderLine::Activity(ActivityLine {
                    created: order.created,
                    name: "Family".to_string(),
                    class_id: selection.class_id,
                    paid_price: price.to_string(),
                    title,
                    chinese_title: class.and_then(|c| c.chinese_title),
                }));
            }
            Some(student) => {
                if student.student_id > 0 {
                    billed_students.insert(student.student_id);
                }
                lines.push(OrderLine::Class(ClassLine {
                    created: order.created,
                    student_id: student.student_id,
                    first_name: student.first_name,
                    last_name: student.last_name,
                    chinese_name: student.chinese_name,
                    class_id: selection.class_id,
                    paid_price: price.to_string(),
                    title: class.as_ref().map(|c| c.title.clone()),
                    chinese_title: class.and_then(|c| c.chinese_title),
                }));
            }
        }
    }

    let sibling_count = i64::try_from(billed_students.len()).unwrap_or(i64::MAX);
    if sibling_count > 1 {
        let discount = Decimal::from((sibling_count - 1) * SIBLING_DISCOUNT);
        total += discount;
        lines.push(OrderLine::Discount(DiscountLine {
            name: "Sibling Discount".to_string(),
            amount: discount,
        }));
    }

    lines.push(OrderLine::Total(TotalLine {
        name: "Total".to_string(),
        amount: total,
    }));

    Ok(lines)
}

type BillableRow = (
    student_class::Model,
    Option<student::Model>,
    Option<class::Model>,
);

/// Retrieves the order's selections with their optional student and class
/// joins, sorted for receipt display.
async fn billable_rows(db: &DatabaseConnection, order_id: i64) -> Result<Vec<BillableRow>> {
    let links = OrderStudentClass::find()
        .filter(order_student_class::Column::OrderId.eq(order_id))
        .all(db)
        .await?;
    let sc_ids: Vec<i64> = links.iter().map(|link| link.sc_id).collect();

    let selections = StudentClass::find()
        .filter(student_class::Column::ScId.is_in(sc_ids))
        .order_by_asc(student_class::Column::ScId)
        .all(db)
        .await?;

    let student_ids: Vec<i64> = selections
        .iter()
        .filter_map(|selection| selection.student_id)
        .collect();
    let student_by_id: HashMap<i64, student::Model> = Student::find()
        .filter(student::Column::StudentId.is_in(student_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|student| (student.student_id, student))
        .collect();

    let class_ids: Vec<i64> = selections
        .iter()
        .map(|selection| selection.class_id)
        .collect();
    let class_by_id: HashMap<i64, class::Model> = Class::find()
        .filter(class::Column::ClassId.is_in(class_ids))
        .all(db)
        .await?
        .into_iter()
        .map(|class| (class.class_id, class))
        .collect();

    let mut rows: Vec<BillableRow> = selections
        .into_iter()
        .map(|selection| {
            let student = selection
                .student_id
                .and_then(|id| student_by_id.get(&id).cloned());
            let class = class_by_id.get(&selection.class_id).cloned();
            (selection, student, class)
        })
        .collect();

    // Dob descending puts volunteer rows (no student, no dob) last
    rows.sort_by(|a, b| {
        let dob_a = a.1.as_ref().and_then(|student| student.dob);
        let dob_b = b.1.as_ref().and_then(|student| student.dob);
        dob_b.cmp(&dob_a).then(a.0.sc_id.cmp(&b.0.sc_id))
    });

    Ok(rows)
}

/// Resolves a volunteer-credit row's display title.
///
/// The selection's `class_id` is a volunteer activity id; it must appear in
/// the activity-year table to be billable.
async fn activity_title(db: &DatabaseConnection, volunteer_id: i64) -> Result<String> {
    let offered = VolunteerActivityYear::find()
        .filter(volunteer_activity_year::Column::VolunteerId.eq(volunteer_id))
        .one(db)
        .await?;

    let activity = match offered {
        Some(link) => VolunteerActivity::find_by_id(link.volunteer_id).one(db).await?,
        None => None,
    };

    activity
        .map(|activity| activity.name)
        .ok_or(Error::ActivityNotFound { volunteer_id })
}
