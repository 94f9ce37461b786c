use crate::{OrderPricingCalculator, SelectionState};
use kingdom_catalog::Catalogs;
use proptest::prelude::*;

// Mix of ids the storefront knows and ids it has never heard of
fn item_id() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "sales-assistant",
            "customer-support",
            "lead-qualifier",
            "appointment-setter",
            "social-media",
            "content-writer",
        ])
        .prop_map(String::from),
        "[a-z]{1,8}-stale".prop_map(String::from),
    ]
}

fn add_on_id() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::sample::select(vec![
            "custom-branding",
            "analytics-dashboard",
            "priority-support",
            "extra-integrations",
        ])
        .prop_map(String::from),
        "[a-z]{1,8}-stale".prop_map(String::from),
    ]
}

fn bundle_id() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["sales-suite", "growth-suite", "complete-collection"])
        .prop_map(String::from)
}

prop_compose! {
    fn arbitrary_selection()
        (items in prop::collection::btree_set(item_id(), 0..8),
         add_ons in prop::collection::btree_set(add_on_id(), 0..5))
        -> SelectionState
    {
        SelectionState {
            selected_item_ids: items,
            selected_add_on_ids: add_ons,
            selected_bundle_id: None,
        }
    }
}

proptest! {
    #[test]
    fn prop_total_without_bundle_is_sum_of_known_prices(state in arbitrary_selection()) {
        let catalogs = Catalogs::storefront();
        let expected_items: i64 = state.selected_item_ids.iter()
            .filter_map(|id| catalogs.item(id))
            .map(|i| i.price)
            .sum();
        let expected_add_ons: i64 = state.selected_add_on_ids.iter()
            .filter_map(|id| catalogs.add_on(id))
            .map(|a| a.price)
            .sum();

        let total = OrderPricingCalculator::new(&catalogs).compute_total(&state);
        prop_assert_eq!(total, expected_items + expected_add_ons);
    }

    #[test]
    fn prop_bundle_item_subtotal_is_flat(
        state in arbitrary_selection(),
        bundle in bundle_id(),
        toggles in prop::collection::vec(item_id(), 0..6)
    ) {
        let catalogs = Catalogs::storefront();
        let calculator = OrderPricingCalculator::new(&catalogs);
        let mut state = state;
        state.select_bundle(&bundle, &catalogs);
        for id in &toggles {
            state.toggle_item(id);
        }

        let price = catalogs.bundle(&bundle).map(|b| b.price).unwrap_or_default();
        prop_assert_eq!(calculator.item_subtotal(&state), price);
    }

    #[test]
    fn prop_toggle_item_twice_restores(state in arbitrary_selection(), id in item_id()) {
        let mut toggled = state.clone();
        toggled.toggle_item(&id);
        toggled.toggle_item(&id);
        prop_assert_eq!(toggled, state);
    }

    #[test]
    fn prop_select_bundle_ignores_prior_items(
        first in arbitrary_selection(),
        second in arbitrary_selection(),
        bundle in bundle_id()
    ) {
        let catalogs = Catalogs::storefront();
        let calculator = OrderPricingCalculator::new(&catalogs);

        // Same add-ons, different prior items
        let mut a = first.clone();
        let mut b = SelectionState {
            selected_add_on_ids: first.selected_add_on_ids.clone(),
            ..second
        };
        a.select_bundle(&bundle, &catalogs);
        b.select_bundle(&bundle, &catalogs);

        prop_assert_eq!(calculator.compute_total(&a), calculator.compute_total(&b));
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_clear_totals_zero(state in arbitrary_selection(), bundle in bundle_id()) {
        let catalogs = Catalogs::storefront();
        let mut state = state;
        state.select_bundle(&bundle, &catalogs);
        state.clear();
        prop_assert_eq!(OrderPricingCalculator::new(&catalogs).compute_total(&state), 0);
    }

    #[test]
    fn prop_unknown_ids_do_not_change_total(
        state in arbitrary_selection(),
        stale in "[a-z]{1,8}-stale"
    ) {
        let catalogs = Catalogs::storefront();
        let calculator = OrderPricingCalculator::new(&catalogs);
        let before = calculator.compute_total(&state);

        let mut with_stale = state.clone();
        with_stale.selected_item_ids.insert(stale.clone());
        with_stale.selected_add_on_ids.insert(stale);

        prop_assert_eq!(calculator.compute_total(&with_stale), before);
    }

    #[test]
    fn prop_quote_agrees_with_total(state in arbitrary_selection(), bundle in prop::option::of(bundle_id())) {
        let catalogs = Catalogs::storefront();
        let calculator = OrderPricingCalculator::new(&catalogs);
        let mut state = state;
        if let Some(bundle) = bundle {
            state.select_bundle(&bundle, &catalogs);
        }

        let quote = calculator.quote(&state);
        prop_assert_eq!(quote.total, calculator.compute_total(&state));
        prop_assert_eq!(quote.lines.iter().map(|l| l.price).sum::<i64>(), quote.total);
    }
}
