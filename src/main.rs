//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the flagdial library and Zellij. It owns the
//! pointer bus, translates keys, clicks and pipe messages into library events,
//! and executes the resulting actions.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, build `AppState`
//! 2. **Subscribe**: Register for `Key` and `Mouse` events
//! 3. **Update**: Map events, delegate to `handle_event`, record changes
//! 4. **Pipe**: Accept host values (`country`, `number`, `disabled`)
//! 5. **Render**: Draw the widget and keep the click layout
//!
//! # Event Mapping
//!
//! - `Tab` → `Event::FocusNext`
//! - `Enter` → `Event::Enter`
//! - `Down`/`Ctrl+n`, `Up`/`Ctrl+p` → cursor movement (opens the list from the trigger)
//! - `Esc` → `Event::Escape`
//! - `Backspace` → `Event::Backspace`
//! - printable characters → `Event::Char`
//! - left click → `Event::OutsideInteraction` when the pointer bus reports it
//!   outside the selector, then whatever the click landed on
//!
//! # Pipes
//!
//! ```text
//! zellij pipe --name country -- GB
//! zellij pipe --name number -- +447700900123
//! zellij pipe --name disabled -- true
//! ```

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use plugin::State;

#[cfg(target_family = "wasm")]
register_plugin!(State);

#[cfg(not(target_family = "wasm"))]
fn main() {
    eprintln!("flagdial is a Zellij plugin; build it for wasm32-wasip1 and load the .wasm from Zellij");
}

#[cfg(target_family = "wasm")]
mod plugin {
    use std::collections::BTreeMap;
    use zellij_tile::prelude::*;

    use flagdial::app::{AppState, WidgetFocus};
    use flagdial::infrastructure::pointer::{Point, PointerBus};
    use flagdial::ui::{Hit, Layout};
    use flagdial::{handle_event, Action, Catalog, Config, Event};

    /// Plugin state wrapper.
    pub struct State {
        /// Core widget state from the library layer.
        app: AppState,

        /// Pointer-down dispatcher for outside-click detection.
        bus: PointerBus,

        /// Layout of the last render, used for hit testing.
        layout: Option<Layout>,
    }

    impl Default for State {
        fn default() -> Self {
            let bus = PointerBus::new();
            Self {
                app: flagdial::initialize(&Config::default(), &bus),
                bus,
                layout: None,
            }
        }
    }

    impl ZellijPlugin for State {
        fn load(&mut self, configuration: BTreeMap<String, String>) {
            let config = Config::from_zellij(&configuration);
            flagdial::observability::init_tracing(&config);

            let span = tracing::debug_span!("plugin_load");
            let _guard = span.entered();

            tracing::debug!(
                default_country = %config.widget.default_country,
                preferred = ?config.widget.preferred_countries,
                "parsed configuration"
            );
            self.app = flagdial::initialize(&config, &self.bus);
            self.layout = None;

            subscribe(&[EventType::Key, EventType::Mouse]);
            tracing::debug!("plugin load complete");
        }

        fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
            let span = tracing::debug_span!("plugin_update_event");
            let _guard = span.entered();

            let events = match event {
                zellij_tile::prelude::Event::Key(ref key) => self.map_key_event(key).into_iter().collect(),
                zellij_tile::prelude::Event::Mouse(Mouse::LeftClick(line, col)) => self.map_click(line, col),
                _ => return false,
            };

            self.dispatch(&events)
        }

        fn pipe(&mut self, pipe_message: PipeMessage) -> bool {
            tracing::debug!(name = %pipe_message.name, "pipe message");

            let payload = pipe_message.payload.unwrap_or_default();
            let payload = payload.trim();
            let event = match pipe_message.name.as_str() {
                "country" => {
                    let catalog = self.app.widget.selector().catalog();
                    let country = catalog.lookup(&payload.to_uppercase()).cloned();
                    if country.is_none() && !payload.is_empty() {
                        tracing::debug!(code = %payload, "piped country not in catalog");
                    }
                    Event::ExternalValue(country)
                }
                "number" => Event::ExternalNumber(payload.to_string()),
                "disabled" => Event::SetDisabled(payload == "true"),
                other => {
                    tracing::debug!(name = %other, "ignoring pipe with unknown name");
                    return false;
                }
            };

            self.dispatch(&[event])
        }

        fn render(&mut self, rows: usize, cols: usize) {
            let vm = flagdial::ui::render(&self.app, rows, cols);
            self.layout = Some(vm.layout);
        }
    }

    impl State {
        /// Maps keyboard events to widget events.
        fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
            tracing::debug!(bare_key = ?key.bare_key, "key event");

            let open = self.app.widget.selector().is_open();
            let on_trigger = self.app.widget.focus() == WidgetFocus::Trigger;
            let ctrl = key.has_modifiers(&[KeyModifier::Ctrl]);

            let down = key.bare_key == BareKey::Down || (ctrl && key.bare_key == BareKey::Char('n'));
            let up = key.bare_key == BareKey::Up || (ctrl && key.bare_key == BareKey::Char('p'));

            if down || up {
                return if open {
                    Some(if down { Event::CursorDown } else { Event::CursorUp })
                } else if on_trigger {
                    Some(Event::Toggle)
                } else {
                    None
                };
            }
            if ctrl {
                return None;
            }

            Some(match key.bare_key {
                BareKey::Tab => Event::FocusNext,
                BareKey::Enter => Event::Enter,
                BareKey::Esc => Event::Escape,
                BareKey::Backspace => Event::Backspace,
                BareKey::Char(c) => Event::Char(c),
                _ => return None,
            })
        }

        /// Maps a left click (0-indexed pane coordinates) to widget events.
        fn map_click(&self, line: isize, col: usize) -> Vec<Event> {
            let Ok(line) = usize::try_from(line) else {
                return vec![];
            };
            let point = Point::new(line + 1, col + 1);

            let mut events = vec![];
            let outside = self.bus.dispatch(point);
            if outside.contains(&self.app.widget.selector().listener_id()) {
                events.push(Event::OutsideInteraction);
            }

            let hit = self.layout.as_ref().and_then(|layout| layout.hit_test(point));
            tracing::debug!(row = point.row, col = point.col, hit = ?hit, "click");

            match hit {
                Some(Hit::Trigger) => {
                    if self.app.widget.focus() != WidgetFocus::Trigger {
                        events.push(Event::FocusNext);
                    }
                    events.push(Event::Toggle);
                }
                Some(Hit::Number) => {
                    if self.app.widget.focus() != WidgetFocus::Number {
                        events.push(Event::FocusNext);
                    }
                }
                Some(Hit::Item(code)) => events.push(Event::SelectItem(code)),
                Some(Hit::Search | Hit::Inside) | None => {}
            }
            events
        }

        /// Feeds `events` to the widget in order and executes the resulting actions.
        fn dispatch(&mut self, events: &[Event]) -> bool {
            let mut should_render = false;
            for event in events {
                let (render, actions) = handle_event(&mut self.app.widget, event);
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = render,
                    "event handled"
                );
                should_render |= render;

                self.app.record(&actions);
                for action in &actions {
                    Self::execute_action(action);
                }
            }
            should_render
        }

        /// Translates library actions to Zellij API calls.
        ///
        /// Change notifications are already recorded in the header; only
        /// `CloseFocus` reaches Zellij.
        #[tracing::instrument(level = "debug")]
        fn execute_action(action: &Action) {
            match action {
                Action::CloseFocus => {
                    tracing::debug!("closing plugin focus");
                    hide_self();
                }
                Action::FocusSearch => tracing::debug!("search box focused"),
                Action::CountryChanged(_) | Action::PhoneChanged { .. } => {}
            }
        }
    }
}
