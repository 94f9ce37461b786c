use kingdom_catalog::{AddOn, Bundle, CatalogItem, Catalogs};
use serde::{Deserialize, Serialize};

use crate::selection::SelectionState;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineKind {
    Bundle,
    Item,
    AddOn,
}

/// One priced line of a quote
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuoteLine {
    pub kind: LineKind,
    pub id: String,
    pub name: String,
    pub price: i64,
}

/// Total with the line items it is made of
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Quote {
    pub lines: Vec<QuoteLine>,
    pub item_subtotal: i64,
    pub add_on_subtotal: i64,
    pub total: i64,
    pub currency: String,
    /// Savings advertised by the active bundle; informational
    pub bundle_savings: i64,
}

/// Prices a selection against the static catalogs.
///
/// An active bundle that resolves replaces the item subtotal with its flat
/// price. Add-ons are always summed on top. Ids that do not resolve add zero.
pub struct OrderPricingCalculator<'a> {
    catalogs: &'a Catalogs,
}

impl<'a> OrderPricingCalculator<'a> {
    pub fn new(catalogs: &'a Catalogs) -> Self {
        Self { catalogs }
    }

    pub fn compute_total(&self, state: &SelectionState) -> i64 {
        self.item_subtotal(state).saturating_add(self.add_on_subtotal(state))
    }

    pub fn item_subtotal(&self, state: &SelectionState) -> i64 {
        match self.active_bundle(state) {
            Some(bundle) => bundle.price,
            None => saturating_sum(self.selected_items(state).map(|i| i.price)),
        }
    }

    pub fn add_on_subtotal(&self, state: &SelectionState) -> i64 {
        saturating_sum(self.selected_add_ons(state).map(|a| a.price))
    }

    /// Line-by-line breakdown for display and checkout
    pub fn quote(&self, state: &SelectionState) -> Quote {
        let mut lines = Vec::new();
        let bundle = self.active_bundle(state);

        match bundle {
            Some(bundle) => lines.push(QuoteLine {
                kind: LineKind::Bundle,
                id: bundle.id.clone(),
                name: bundle.name.clone(),
                price: bundle.price,
            }),
            None => lines.extend(self.selected_items(state).map(|item| QuoteLine {
                kind: LineKind::Item,
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
            })),
        }

        lines.extend(self.selected_add_ons(state).map(|add_on| QuoteLine {
            kind: LineKind::AddOn,
            id: add_on.id.clone(),
            name: add_on.name.clone(),
            price: add_on.price,
        }));

        let item_subtotal = self.item_subtotal(state);
        let add_on_subtotal = self.add_on_subtotal(state);

        Quote {
            lines,
            item_subtotal,
            add_on_subtotal,
            total: item_subtotal.saturating_add(add_on_subtotal),
            currency: self.catalogs.currency.clone(),
            bundle_savings: bundle.map(|b| b.savings).unwrap_or(0),
        }
    }

    fn active_bundle(&self, state: &SelectionState) -> Option<&'a Bundle> {
        state
            .selected_bundle_id
            .as_deref()
            .and_then(|id| self.catalogs.bundle(id))
    }

    fn selected_items<'s>(&self, state: &'s SelectionState) -> impl Iterator<Item = &'a CatalogItem> + 's
    where
        'a: 's,
    {
        let catalogs = self.catalogs;
        state.selected_item_ids.iter().filter_map(move |id| catalogs.item(id))
    }

    fn selected_add_ons<'s>(&self, state: &'s SelectionState) -> impl Iterator<Item = &'a AddOn> + 's
    where
        'a: 's,
    {
        let catalogs = self.catalogs;
        state.selected_add_on_ids.iter().filter_map(move |id| catalogs.add_on(id))
    }
}

// Hand-built catalogs skip load validation, so sums must not overflow
fn saturating_sum(prices: impl Iterator<Item = i64>) -> i64 {
    prices.fold(0, i64::saturating_add)
}
