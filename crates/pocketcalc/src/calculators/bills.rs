//! Recurring bills normalised to a monthly figure and grouped by category.

use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::{parse_finite, percent_of};

const BILLS_TO_INCOME_RATIO: f64 = 0.50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillCategory {
    Housing,
    Utilities,
    Transportation,
    Insurance,
    Subscriptions,
    Food,
    Healthcare,
    Debt,
    #[default]
    Other,
}

impl BillCategory {
    pub const fn ordered() -> [Self; 9] {
        [
            Self::Housing,
            Self::Utilities,
            Self::Transportation,
            Self::Insurance,
            Self::Subscriptions,
            Self::Food,
            Self::Healthcare,
            Self::Debt,
            Self::Other,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Utilities => "Utilities",
            Self::Transportation => "Transportation",
            Self::Insurance => "Insurance",
            Self::Subscriptions => "Subscriptions",
            Self::Food => "Food",
            Self::Healthcare => "Healthcare",
            Self::Debt => "Debt",
            Self::Other => "Other",
        }
    }
}

impl FromStr for BillCategory {
    type Err = BillImportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        Self::ordered()
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BillImportError::UnknownCategory(needle.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillFrequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Quarterly,
    Annually,
}

impl BillFrequency {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Weekly,
            Self::Biweekly,
            Self::Monthly,
            Self::Quarterly,
            Self::Annually,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Biweekly => "Biweekly",
            Self::Monthly => "Monthly",
            Self::Quarterly => "Quarterly",
            Self::Annually => "Annually",
        }
    }

    /// Factor turning one payment at this frequency into an average monthly amount.
    pub fn monthly_multiplier(self) -> f64 {
        match self {
            Self::Weekly => 4.33,
            Self::Biweekly => 2.17,
            Self::Monthly => 1.0,
            Self::Quarterly => 1.0 / 3.0,
            Self::Annually => 1.0 / 12.0,
        }
    }
}

impl FromStr for BillFrequency {
    type Err = BillImportError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let needle = value.trim();
        if needle.eq_ignore_ascii_case("yearly") {
            return Ok(Self::Annually);
        }
        Self::ordered()
            .into_iter()
            .find(|frequency| frequency.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| BillImportError::UnknownFrequency(needle.to_string()))
    }
}

/// One editable row. The amount stays as typed so half-entered rows survive editing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BillItem {
    pub name: String,
    pub amount: String,
    pub category: BillCategory,
    pub frequency: BillFrequency,
}

impl BillItem {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        category: BillCategory,
        frequency: BillFrequency,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            category,
            frequency,
        }
    }

    /// Monthly equivalent, or `None` when the row is unnamed or the amount does not parse.
    pub fn monthly_amount(&self) -> Option<f64> {
        if self.name.trim().is_empty() {
            return None;
        }
        parse_finite(&self.amount).map(|amount| amount * self.frequency.monthly_multiplier())
    }
}

/// Ordered list of bill rows that always keeps at least one row for editing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillList {
    items: Vec<BillItem>,
}

impl Default for BillList {
    fn default() -> Self {
        Self {
            items: vec![BillItem::default()],
        }
    }
}

impl BillList {
    pub fn from_items(items: Vec<BillItem>) -> Self {
        if items.is_empty() {
            Self::default()
        } else {
            Self { items }
        }
    }

    pub fn example() -> Self {
        Self::from_items(vec![
            BillItem::new("Rent", "1400", BillCategory::Housing, BillFrequency::Monthly),
            BillItem::new("Electric", "90", BillCategory::Utilities, BillFrequency::Monthly),
            BillItem::new("Groceries", "120", BillCategory::Food, BillFrequency::Weekly),
            BillItem::new(
                "Car Insurance",
                "600",
                BillCategory::Insurance,
                BillFrequency::Quarterly,
            ),
            BillItem::new(
                "Streaming",
                "15.99",
                BillCategory::Subscriptions,
                BillFrequency::Monthly,
            ),
        ])
    }

    pub fn items(&self) -> &[BillItem] {
        &self.items
    }

    /// Appends an empty row and returns its index.
    pub fn add(&mut self) -> usize {
        self.items.push(BillItem::default());
        self.items.len() - 1
    }

    pub fn push(&mut self, item: BillItem) {
        self.items.push(item);
    }

    /// Removes the row at `index`. The last remaining row cannot be removed.
    pub fn remove(&mut self, index: usize) -> Option<BillItem> {
        if self.items.len() <= 1 || index >= self.items.len() {
            return None;
        }
        Some(self.items.remove(index))
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut BillItem> {
        self.items.get_mut(index)
    }

    pub fn summary(&self) -> BillsSummary {
        summarize(&self.items)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: BillCategory,
    pub label: &'static str,
    pub monthly_total: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct BillsSummary {
    pub counted_bills: usize,
    pub monthly_total: f64,
    pub yearly_total: f64,
    pub categories: Vec<CategoryTotal>,
    pub recommended_income: f64,
}

pub fn summarize(items: &[BillItem]) -> BillsSummary {
    let counted: Vec<(BillCategory, f64)> = items
        .iter()
        .filter_map(|item| item.monthly_amount().map(|amount| (item.category, amount)))
        .collect();

    let monthly_total: f64 = counted.iter().map(|(_, amount)| amount).sum();

    let categories = BillCategory::ordered()
        .into_iter()
        .filter_map(|category| {
            let total: f64 = counted
                .iter()
                .filter(|(item_category, _)| *item_category == category)
                .map(|(_, amount)| amount)
                .sum();
            (total > 0.0).then(|| CategoryTotal {
                category,
                label: category.label(),
                monthly_total: total,
                percentage: percent_of(total, monthly_total),
            })
        })
        .collect();

    let summary = BillsSummary {
        counted_bills: counted.len(),
        monthly_total,
        yearly_total: monthly_total * 12.0,
        categories,
        recommended_income: monthly_total / BILLS_TO_INCOME_RATIO,
    };

    debug!(
        counted = summary.counted_bills,
        monthly_total = summary.monthly_total,
        "summarized monthly bills"
    );
    summary
}

#[derive(Debug, thiserror::Error)]
pub enum BillImportError {
    #[error("malformed bills csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("unknown bill category '{0}'")]
    UnknownCategory(String),
    #[error("unknown bill frequency '{0}'")]
    UnknownFrequency(String),
}

#[derive(Debug, Deserialize)]
struct BillRow {
    name: String,
    amount: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    frequency: Option<String>,
}

/// Reads `name,amount,category,frequency` rows with a header line. Blank category or
/// frequency cells fall back to Other / Monthly.
pub fn read_csv<R: Read>(reader: R) -> Result<BillList, BillImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);

    let mut items = Vec::new();
    for row in csv_reader.deserialize::<BillRow>() {
        let row = row?;
        let category = match row.category.as_deref().filter(|value| !value.is_empty()) {
            Some(value) => value.parse()?,
            None => BillCategory::default(),
        };
        let frequency = match row.frequency.as_deref().filter(|value| !value.is_empty()) {
            Some(value) => value.parse()?,
            None => BillFrequency::default(),
        };
        items.push(BillItem::new(row.name, row.amount, category, frequency));
    }

    Ok(BillList::from_items(items))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekly_bill_uses_fixed_multiplier() {
        let item = BillItem::new("Gym", "100", BillCategory::Other, BillFrequency::Weekly);
        let monthly = item.monthly_amount().expect("valid bill");
        assert!((monthly - 433.0).abs() < 1e-9);
    }

    #[test]
    fn rows_without_name_or_amount_are_excluded() {
        let items = vec![
            BillItem::new("", "50", BillCategory::Utilities, BillFrequency::Monthly),
            BillItem::new("Water", "", BillCategory::Utilities, BillFrequency::Monthly),
            BillItem::new("Gas", "abc", BillCategory::Utilities, BillFrequency::Monthly),
            BillItem::new("Power", "80", BillCategory::Utilities, BillFrequency::Monthly),
        ];
        let summary = summarize(&items);
        assert_eq!(summary.counted_bills, 1);
        assert_eq!(summary.monthly_total, 80.0);
        assert_eq!(summary.recommended_income, 160.0);
    }

    #[test]
    fn categories_follow_declaration_order_with_shares() {
        let items = vec![
            BillItem::new("Netflix", "25", BillCategory::Subscriptions, BillFrequency::Monthly),
            BillItem::new("Rent", "1200", BillCategory::Housing, BillFrequency::Annually),
            BillItem::new("Hulu", "75", BillCategory::Subscriptions, BillFrequency::Monthly),
        ];
        let summary = summarize(&items);
        assert!((summary.monthly_total - 200.0).abs() < 1e-9);
        let labels: Vec<_> = summary.categories.iter().map(|entry| entry.label).collect();
        assert_eq!(labels, vec!["Housing", "Subscriptions"]);
        assert!((summary.categories[0].percentage - 50.0).abs() < 1e-9);
        assert!((summary.categories[1].monthly_total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn list_never_drops_below_one_row() {
        let mut list = BillList::default();
        assert_eq!(list.items().len(), 1);
        assert!(list.remove(0).is_none());

        let index = list.add();
        assert_eq!(index, 1);
        list.get_mut(index).expect("row exists").name = "Phone".to_string();
        let removed = list.remove(index).expect("second row removable");
        assert_eq!(removed.name, "Phone");
        assert_eq!(list.items().len(), 1);
        assert!(list.remove(5).is_none());
    }

    #[test]
    fn empty_list_summarizes_to_zero() {
        let summary = BillList::default().summary();
        assert_eq!(summary, BillsSummary::default());
    }

    #[test]
    fn csv_import_parses_labels_case_insensitively() {
        let data = "name,amount,category,frequency\n\
                    Rent,1500,housing,monthly\n\
                    Insurance,300,Insurance,QUARTERLY\n\
                    Misc,20,,\n";
        let list = read_csv(data.as_bytes()).expect("csv imports");
        assert_eq!(list.items().len(), 3);
        assert_eq!(list.items()[1].frequency, BillFrequency::Quarterly);
        assert_eq!(list.items()[2].category, BillCategory::Other);
        assert_eq!(list.items()[2].frequency, BillFrequency::Monthly);
        assert!((list.summary().monthly_total - 1620.0).abs() < 1e-9);
    }

    #[test]
    fn csv_import_rejects_unknown_frequency() {
        let data = "name,amount,category,frequency\nRent,1500,Housing,daily\n";
        match read_csv(data.as_bytes()) {
            Err(BillImportError::UnknownFrequency(value)) => assert_eq!(value, "daily"),
            other => panic!("expected unknown frequency, got {other:?}"),
        }
    }
}
