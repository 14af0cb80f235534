//! A settings change reaches a live overlay through a store listener, the
//! way a host wires the two together.

use std::{cell::RefCell, rc::Rc};

use block_properties_config::{Settings, SettingsChange, SettingsStore};
use block_properties_engine::{Decoration, DisplayMode, Overlay, ViewState};
use pretty_assertions::assert_eq;

#[test]
fn display_mode_change_rebuilds_overlay() {
    let view = Rc::new(ViewState::new("Ship it ^rel [version: 1.2, date: friday]\n"));
    let settings = Settings::default();
    let overlay = Rc::new(RefCell::new(Overlay::attach(
        &view,
        settings.display_mode,
        settings.inline_style(),
    )));

    let mut store = SettingsStore::in_memory(settings);
    {
        let view = Rc::clone(&view);
        let overlay = Rc::clone(&overlay);
        store.on_change(move |settings, change| {
            if matches!(change, SettingsChange::DisplayMode | SettingsChange::Style) {
                overlay.borrow_mut().reconfigure(
                    &view,
                    settings.display_mode,
                    settings.inline_style(),
                );
            }
        });
    }

    store.set_display_mode(DisplayMode::Badge).unwrap();
    {
        let overlay = overlay.borrow();
        let unit = &overlay.decorations().units()[0];
        match &unit.decoration {
            Decoration::Replace(badge) => {
                let record = badge.to_record().unwrap();
                assert_eq!(record.text, "2");
                assert_eq!(record.title, "version: 1.2, date: friday");
            }
            other => panic!("expected badge, got {other:?}"),
        }
    }

    store.set_display_mode(DisplayMode::Inline).unwrap();
    store.set_property_color("#00aa00").unwrap();
    let overlay = overlay.borrow();
    match &overlay.decorations().units()[0].decoration {
        Decoration::Mark { style, .. } => assert_eq!(style.color, "#00aa00"),
        other => panic!("expected mark, got {other:?}"),
    }
    assert_eq!(overlay.rebuilds(), 4);
}

#[test]
fn template_changes_do_not_touch_the_overlay() {
    let view = ViewState::new("^a [k: v]");
    let overlay = Rc::new(RefCell::new(Overlay::attach(
        &view,
        DisplayMode::Inline,
        Settings::default().inline_style(),
    )));

    let mut store = SettingsStore::in_memory(Settings::default());
    {
        let overlay = Rc::clone(&overlay);
        store.on_change(move |settings, change| {
            if change == SettingsChange::DisplayMode {
                overlay.borrow_mut().reconfigure(
                    &view,
                    settings.display_mode,
                    settings.inline_style(),
                );
            }
        });
    }

    store.remove_template(0).unwrap();
    assert_eq!(overlay.borrow().rebuilds(), 1);
}
