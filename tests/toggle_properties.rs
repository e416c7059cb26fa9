//! Property tests for activation sequences
//!
//! Drives the share toggle through arbitrary click sequences and checks the
//! popup state and its projected attribute after every step.

use proptest::prelude::*;
use sharepop::app::{Dispatcher, install_popup_toggle};
use sharepop::config::Config;
use sharepop::page::Page;
use sharepop::popup::{PopupState, STATE_ATTRIBUTE, UnknownStatePolicy};

fn initial_state() -> impl Strategy<Value = PopupState> {
    prop_oneof![Just(PopupState::Closed), Just(PopupState::Active)]
}

fn share_page_with(initial: &str) -> Page {
    let mut page = Page::new();
    page.push(sharepop::page::Element::new("button").with_class("js-shareBtn"));
    page.push(
        sharepop::page::Element::new("div")
            .with_class("js-sharePopup")
            .with_attribute(STATE_ATTRIBUTE, initial),
    );
    page
}

proptest! {
    #[test]
    fn attribute_is_always_closed_or_active(
        initial in initial_state(),
        clicks in prop::collection::vec(any::<bool>(), 0..64),
    ) {
        let mut page = share_page_with(initial.as_str());
        let mut dispatcher = Dispatcher::new();
        let targets = install_popup_toggle(&mut dispatcher, &mut page, &Config::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        let mut expected = initial;
        for on_trigger in clicks {
            let target = if on_trigger { targets.trigger } else { targets.popup };
            dispatcher.click(&mut page, target);
            if on_trigger {
                expected = expected.toggled();
            }

            let raw = page.attribute(targets.popup, STATE_ATTRIBUTE);
            prop_assert!(matches!(raw, Some("closed" | "active")));
            prop_assert_eq!(raw, Some(expected.as_str()));
        }
    }

    #[test]
    fn parity_of_activations_decides_state(initial in initial_state(), n in 0_usize..100) {
        let mut page = share_page_with(initial.as_str());
        let mut dispatcher = Dispatcher::new();
        let targets = install_popup_toggle(&mut dispatcher, &mut page, &Config::default())
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        for _ in 0..n {
            dispatcher.click(&mut page, targets.trigger);
        }

        let expected = if n % 2 == 0 { initial } else { initial.toggled() };
        prop_assert_eq!(page.attribute(targets.popup, STATE_ATTRIBUTE), Some(expected.as_str()));
    }

    #[test]
    fn unrecognized_initial_value_is_normalized(
        raw in "[a-z]{0,8}".prop_filter("known states", |s| s != "closed" && s != "active"),
        active_policy in any::<bool>(),
    ) {
        let policy = if active_policy { UnknownStatePolicy::Active } else { UnknownStatePolicy::Closed };
        let config = Config { unknown_state: policy, ..Config::default() };
        let mut page = share_page_with(&raw);
        let mut dispatcher = Dispatcher::new();
        let targets = install_popup_toggle(&mut dispatcher, &mut page, &config)
            .map_err(|e| TestCaseError::fail(e.to_string()))?;

        prop_assert_eq!(
            page.attribute(targets.popup, STATE_ATTRIBUTE),
            Some(policy.fallback().as_str())
        );

        dispatcher.click(&mut page, targets.trigger);
        prop_assert_eq!(
            page.attribute(targets.popup, STATE_ATTRIBUTE),
            Some(policy.fallback().toggled().as_str())
        );
    }
}
