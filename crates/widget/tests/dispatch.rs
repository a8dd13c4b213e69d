mod support;

use support::Harness;

use xmenu_widget::core::document::{CLOSING, NotificationKind};
use xmenu_widget::core::event::Status;
use xmenu_widget::core::keyboard::{self, Code};
use xmenu_widget::core::mouse::{self, Button, Buttons, PointerId};
use xmenu_widget::core::{Event, Kind, NodeId, Point};

use std::cell::Cell;
use std::rc::Rc;

fn click(target: NodeId) -> Event {
    Event::Mouse(mouse::Event::Click {
        button: Button::Left,
        target,
    })
}

fn key(code: Code) -> Event {
    Event::Keyboard(keyboard::Event::KeyPressed { code })
}

fn count(harness: &Harness, node: NodeId, kind: NotificationKind) -> Rc<Cell<usize>> {
    let counter = Rc::new(Cell::new(0));
    let seen = Rc::clone(&counter);

    harness
        .document
        .borrow_mut()
        .add_listener(node, kind, move |_| seen.set(seen.get() + 1));

    counter
}

#[test]
fn test_click_flips_togglable_item() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let toggles = count(&harness, harness.menu, NotificationKind::Toggle);

    item.set_togglable(true);
    let _ = harness.update(&item, click(item.id()));

    assert!(item.toggled());
    assert_eq!(toggles.get(), 1);

    let _ = harness.update(&item, click(item.id()));

    assert!(!item.toggled());
    assert_eq!(toggles.get(), 2);
}

#[test]
fn test_canceled_toggle_leaves_item_unchanged() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);

    item.set_togglable(true);
    harness
        .document
        .borrow_mut()
        .add_listener(harness.menu, NotificationKind::Toggle, |notification| {
            notification.prevent_default();
        });

    let _ = harness.update(&item, click(item.id()));

    assert!(!item.toggled());
    // The trigger effect still plays.
    assert_eq!(item.ripple_count(), 1);
}

#[test]
fn test_toggle_listener_may_update_sibling_items() {
    let mut harness = Harness::new();
    let first = harness.item(harness.menu);
    let second = harness.item(harness.menu);
    let seen = Rc::new(Cell::new(None));

    first.set_togglable(true);
    second.set_togglable(true);
    second.set_toggled(true);

    {
        let item = first.clone();
        let sibling = second.clone();
        let seen = Rc::clone(&seen);

        harness.document.borrow_mut().add_listener(
            first.id(),
            NotificationKind::Toggle,
            move |_| {
                seen.set(Some(item.toggled()));
                sibling.set_toggled(false);
            },
        );
    }

    let _ = harness.update(&first, click(first.id()));

    assert_eq!(seen.get(), Some(false));
    assert!(first.toggled());
    assert!(!second.toggled());

    let document = harness.document.borrow();
    assert!(document.has_attribute(first.id(), "toggled"));
    assert!(!document.has_attribute(second.id(), "toggled"));
}

#[test]
fn test_click_listener_may_disable_the_item() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);

    {
        let handle = item.clone();

        harness.document.borrow_mut().add_listener(
            harness.menu,
            NotificationKind::Click,
            move |_| handle.set_disabled(true),
        );
    }

    let _ = harness.update(&item, key(Code::Enter));

    assert!(item.disabled());
    assert_eq!(harness.document.borrow().tab_index(item.id()), -1);
}

#[test]
fn test_click_from_descendant_is_accepted() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let label = harness.node(item.id(), Kind::Generic);

    item.set_togglable(true);
    let _ = harness.update(&item, click(label));

    assert!(item.toggled());
}

#[test]
fn test_click_from_nested_item_is_ignored() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let submenu = harness.node(item.id(), Kind::Menu);
    let nested = harness.item(submenu);

    item.set_togglable(true);
    let outcome = harness.update(&item, click(nested.id()));

    assert!(!item.toggled());
    assert_eq!(outcome.effects, 0);
}

#[test]
fn test_click_from_nested_menu_content_is_ignored() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let submenu = harness.node(item.id(), Kind::Menu);
    let separator = harness.node(submenu, Kind::Generic);

    item.set_togglable(true);
    let _ = harness.update(&item, click(separator));

    assert!(!item.toggled());
    assert_eq!(item.ripple_count(), 0);
}

#[test]
fn test_non_primary_input_is_ignored() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);

    item.set_togglable(true);

    let down = harness.update(
        &item,
        Event::Mouse(mouse::Event::PointerDown {
            buttons: Buttons::SECONDARY,
            position: Point::new(5.0, 5.0),
            pointer: PointerId(2),
        }),
    );
    let up = harness.update(
        &item,
        Event::Mouse(mouse::Event::Click {
            button: Button::Right,
            target: item.id(),
        }),
    );

    assert_eq!(down.status, Status::Ignored);
    assert_eq!(up.effects, 0);
    assert!(!item.toggled());
    assert_eq!(item.ripple_count(), 0);
}

#[test]
fn test_primary_bit_with_other_buttons_activates() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);

    let outcome = harness.update(
        &item,
        Event::Mouse(mouse::Event::PointerDown {
            buttons: Buttons::PRIMARY | Buttons::SECONDARY,
            position: Point::new(5.0, 5.0),
            pointer: PointerId(1),
        }),
    );

    assert_eq!(outcome.status, Status::Captured);
    assert_eq!(item.ripple_count(), 1);
}

#[test]
fn test_closing_menu_swallows_input() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);

    item.set_togglable(true);
    harness
        .document
        .borrow_mut()
        .set_attribute(harness.menu, CLOSING, "");

    let down = harness.update(
        &item,
        Event::Mouse(mouse::Event::PointerDown {
            buttons: Buttons::PRIMARY,
            position: Point::new(5.0, 5.0),
            pointer: PointerId(1),
        }),
    );

    assert_eq!(down.status, Status::Captured);
    assert!(down.is_default_prevented);
    assert_eq!(down.effects, 0);

    let up = harness.update(&item, click(item.id()));

    assert_eq!(up.effects, 0);
    assert!(!item.toggled());
    assert_eq!(item.ripple_count(), 0);
}

#[test]
fn test_disabled_item_still_plays_effects() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);

    item.set_disabled(true);
    let _ = harness.update(&item, click(item.id()));

    assert_eq!(item.ripple_count(), 1);
}

#[test]
fn test_enter_activates_item_once() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let clicks = count(&harness, harness.menu, NotificationKind::Click);

    item.set_togglable(true);
    let outcome = harness.update(&item, key(Code::Enter));

    assert_eq!(outcome.status, Status::Captured);
    assert!(outcome.is_default_prevented);
    assert_eq!(clicks.get(), 1);
    assert!(item.toggled());
    assert_eq!(item.ripple_count(), 1);
}

#[test]
fn test_space_activates_item() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let clicks = count(&harness, item.id(), NotificationKind::Click);

    let _ = harness.update(&item, key(Code::Space));

    assert_eq!(clicks.get(), 1);
}

#[test]
fn test_enter_on_submenu_host_only_prevents_default() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let _submenu = harness.node(item.id(), Kind::Menu);
    let clicks = count(&harness, harness.menu, NotificationKind::Click);

    let outcome = harness.update(&item, key(Code::Enter));

    assert_eq!(outcome.status, Status::Ignored);
    assert!(outcome.is_default_prevented);
    assert_eq!(clicks.get(), 0);
    assert_eq!(item.ripple_count(), 0);
}

#[test]
fn test_other_keys_are_ignored() {
    let mut harness = Harness::new();
    let item = harness.item(harness.menu);

    for code in [Code::Escape, Code::ArrowDown, Code::NumpadEnter, Code::Tab] {
        let outcome = harness.update(&item, key(code));

        assert_eq!(outcome.status, Status::Ignored);
        assert!(!outcome.is_default_prevented);
    }

    let released = harness.update(
        &item,
        Event::Keyboard(keyboard::Event::KeyReleased { code: Code::Enter }),
    );

    assert_eq!(released.status, Status::Ignored);
}

#[cfg(feature = "accessibility")]
#[test]
fn test_accessibility_actions() {
    use xmenu_widget::core::accessibility::{self, Action};

    let mut harness = Harness::new();
    let item = harness.item(harness.menu);
    let clicks = count(&harness, harness.menu, NotificationKind::Click);

    let _ = harness.update(
        &item,
        Event::Accessibility(accessibility::Event {
            action: Action::Focus,
            target: accessibility::NodeId(1),
        }),
    );

    assert_eq!(harness.document.borrow().focused(), Some(item.id()));

    let _ = harness.update(
        &item,
        Event::Accessibility(accessibility::Event {
            action: Action::Click,
            target: accessibility::NodeId(1),
        }),
    );

    assert_eq!(clicks.get(), 1);
}
