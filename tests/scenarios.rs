//! End-to-end behavior of the selector and phone widgets through the public API.

use std::collections::BTreeSet;
use std::rc::Rc;

use flagdial::app::{compute_visible_list, derive_local_part, recompose, WidgetFocus};
use flagdial::infrastructure::pointer::{Point, PointerBus, Rect};
use flagdial::{
    handle_event, handle_selector_event, Action, Catalog, CountryRecord, CountrySelector, Event,
    PhoneWidget, StaticCatalog, WidgetConfig,
};

fn three_countries() -> Vec<CountryRecord> {
    vec![
        CountryRecord::new("United States", "US", "+1", "🇺🇸"),
        CountryRecord::new("United Kingdom", "GB", "+44", "🇬🇧"),
        CountryRecord::new("Germany", "DE", "+49", "🇩🇪"),
    ]
}

fn catalog() -> Rc<dyn Catalog> {
    Rc::new(StaticCatalog::new(three_countries()).unwrap())
}

fn codes(records: &[CountryRecord]) -> Vec<&str> {
    records.iter().map(|r| r.code.as_str()).collect()
}

#[test]
fn excluded_and_preferred_countries() {
    let exclude: BTreeSet<String> = ["DE".to_string()].into();
    let preferred = vec!["GB".to_string()];

    let visible = compute_visible_list(&three_countries(), "", &exclude, &preferred);
    assert_eq!(codes(visible.records()), ["GB", "US"]);
}

#[test]
fn dial_code_search() {
    let visible = compute_visible_list(&three_countries(), "44", &BTreeSet::new(), &[]);
    assert_eq!(codes(visible.records()), ["GB"]);
}

#[test]
fn local_part_edit_keeps_dial_code() {
    let us = CountryRecord::new("United States", "US", "+1", "🇺🇸");
    assert_eq!(derive_local_part("+15551234567", Some(&us)), "5551234567");
    assert_eq!(recompose("5559999999", Some(&us)), "+15559999999");

    let bus = PointerBus::new();
    let mut widget = PhoneWidget::new(WidgetConfig::default(), catalog(), "+15551234567", &bus);
    assert_eq!(widget.local_part(), "5551234567");

    let (_, actions) = handle_event(&mut widget, &Event::NumberEdited("5559999999".to_string()));
    assert_eq!(
        actions,
        vec![Action::PhoneChanged {
            full_number: "+15559999999".to_string(),
            country: Some(us),
        }]
    );
}

#[test]
fn unresolved_default_country_emits_bare_number() {
    let bus = PointerBus::new();
    let config = WidgetConfig {
        default_country: "FR".to_string(),
        ..Default::default()
    };
    let mut widget = PhoneWidget::new(config, catalog(), "", &bus);
    assert!(widget.selector().selected().is_none());

    let (_, actions) = handle_event(&mut widget, &Event::NumberEdited("555".to_string()));
    assert_eq!(
        actions,
        vec![Action::PhoneChanged {
            full_number: "555".to_string(),
            country: None,
        }]
    );
}

#[test]
fn outside_click_closes_and_next_open_is_blank() {
    let bus = PointerBus::new();
    let mut selector = CountrySelector::new(WidgetConfig::default(), catalog(), None, &bus);

    handle_selector_event(&mut selector, &Event::Toggle);
    handle_selector_event(&mut selector, &Event::Search("germ".to_string()));
    selector.update_bounds([Rect::new(1, 1, 10, 40)]);

    assert!(bus.dispatch(Point::new(5, 5)).is_empty());
    let outside = bus.dispatch(Point::new(30, 5));
    assert_eq!(outside, vec![selector.listener_id()]);

    let (render, _) = handle_selector_event(&mut selector, &Event::OutsideInteraction);
    assert!(render);
    assert!(!selector.is_open());

    handle_selector_event(&mut selector, &Event::Toggle);
    assert_eq!(selector.search_term(), "");
    assert_eq!(selector.visible().len(), 3);
}

#[test]
fn external_value_overrides_local_choice() {
    let bus = PointerBus::new();
    let mut selector = CountrySelector::new(WidgetConfig::default(), catalog(), None, &bus);

    handle_selector_event(&mut selector, &Event::Toggle);
    let (_, actions) = handle_selector_event(&mut selector, &Event::SelectItem("GB".to_string()));
    assert!(matches!(&actions[..], [Action::CountryChanged(c)] if c.code == "GB"));

    let de = catalog().lookup("DE").cloned();
    handle_selector_event(&mut selector, &Event::ExternalValue(de));
    assert_eq!(selector.selected().map(|c| c.code.as_str()), Some("DE"));
}

#[test]
fn country_change_moves_number_under_new_dial_code() {
    let bus = PointerBus::new();
    let mut widget = PhoneWidget::new(WidgetConfig::default(), catalog(), "+15551234567", &bus);

    handle_event(&mut widget, &Event::Toggle);
    assert_eq!(widget.focus(), WidgetFocus::Trigger);
    let (_, actions) = handle_event(&mut widget, &Event::SelectItem("GB".to_string()));

    assert!(matches!(
        &actions[..],
        [Action::PhoneChanged { full_number, country: Some(c) }]
            if full_number == "+445551234567" && c.code == "GB"
    ));
    assert_eq!(widget.local_part(), "5551234567");
    assert_eq!(widget.focus(), WidgetFocus::Number);
    assert!(!widget.selector().is_open());
}

#[test]
fn disabled_widget_is_inert() {
    let bus = PointerBus::new();
    let config = WidgetConfig {
        disabled: true,
        ..Default::default()
    };
    let mut widget = PhoneWidget::new(config, catalog(), "+1555", &bus);

    let (render, actions) = handle_event(&mut widget, &Event::Toggle);
    assert!(!render);
    assert!(actions.is_empty());
    assert!(!widget.selector().is_open());

    let (_, actions) = handle_event(&mut widget, &Event::NumberEdited("999".to_string()));
    assert!(actions.is_empty());
    assert_eq!(widget.full_number(), "+1555");
}

#[test]
fn disabling_while_open_closes() {
    let bus = PointerBus::new();
    let mut selector = CountrySelector::new(WidgetConfig::default(), catalog(), None, &bus);
    handle_selector_event(&mut selector, &Event::Toggle);

    handle_selector_event(&mut selector, &Event::SetDisabled(true));
    assert!(!selector.is_open());
    assert!(bus.dispatch(Point::new(99, 99)).is_empty());
}

#[test]
fn empty_search_is_a_distinct_state() {
    let bus = PointerBus::new();
    let mut selector = CountrySelector::new(WidgetConfig::default(), catalog(), None, &bus);
    handle_selector_event(&mut selector, &Event::Toggle);
    handle_selector_event(&mut selector, &Event::Search("atlantis".to_string()));

    assert!(selector.is_open());
    assert!(selector.visible().is_empty());

    let (render, actions) = handle_selector_event(&mut selector, &Event::SelectHighlighted);
    assert!(!render);
    assert!(actions.is_empty());
}

#[test]
fn dropped_widgets_release_their_listener() {
    let bus = PointerBus::new();
    for _ in 0..10 {
        let widget = PhoneWidget::new(WidgetConfig::default(), catalog(), "", &bus);
        assert_eq!(bus.listener_count(), 1);
        drop(widget);
    }
    assert_eq!(bus.listener_count(), 0);
}

#[test]
fn keyboard_flow_through_the_bundled_catalog() {
    let bus = PointerBus::new();
    let mut widget = PhoneWidget::new(WidgetConfig::default(), Rc::new(StaticCatalog::bundled()), "", &bus);

    handle_event(&mut widget, &Event::FocusNext);
    let (_, actions) = handle_event(&mut widget, &Event::Enter);
    assert_eq!(actions, vec![Action::FocusSearch]);

    for c in "japan".chars() {
        handle_event(&mut widget, &Event::Char(c));
    }
    assert_eq!(widget.selector().search_term(), "japan");

    let (_, actions) = handle_event(&mut widget, &Event::Enter);
    assert!(matches!(
        &actions[..],
        [Action::PhoneChanged { full_number, country: Some(c) }] if full_number == "+81" && c.code == "JP"
    ));

    for c in "312345678".chars() {
        handle_event(&mut widget, &Event::Char(c));
    }
    assert_eq!(widget.full_number(), "+81312345678");

    let (_, actions) = handle_event(&mut widget, &Event::Escape);
    assert_eq!(actions, vec![Action::CloseFocus]);
}
